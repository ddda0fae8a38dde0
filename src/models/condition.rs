use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::enums::{AgeGroup, Gender, Urgency};

/// A catalog condition. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub id: u32,
    pub name: String,
    /// Defining symptoms. Never empty in a validated catalog.
    pub symptom_ids: BTreeSet<u32>,
    pub description: String,
    pub recommendations: Vec<String>,
    pub base_urgency: Urgency,
    pub when_to_seek_help: Vec<String>,
    /// Empty map means the condition has no gender-specific advice.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub gender_advice: BTreeMap<Gender, Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub age_advice: BTreeMap<AgeGroup, Vec<String>>,
}

impl Condition {
    /// Number of this condition's symptoms present in `selected`.
    pub fn overlap(&self, selected: &BTreeSet<u32>) -> usize {
        self.symptom_ids.intersection(selected).count()
    }

    pub fn advice_for_gender(&self, gender: Gender) -> Option<&[String]> {
        self.gender_advice.get(&gender).map(Vec::as_slice)
    }

    pub fn advice_for_age_group(&self, group: AgeGroup) -> Option<&[String]> {
        self.age_advice.get(&group).map(Vec::as_slice)
    }
}
