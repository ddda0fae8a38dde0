use serde::{Deserialize, Serialize};

/// A selectable symptom, identified by its catalog ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptom {
    pub id: u32,
    pub name: String,
}
