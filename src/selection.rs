//! Symptom picker state: tapping a symptom selects it, tapping it again
//! deselects it. Selection order is kept for display.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomSelection {
    ids: Vec<u32>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id` in or out. Returns `true` when it is now selected.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&s| s == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    /// Selected IDs in the order they were picked.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn to_set(&self) -> BTreeSet<u32> {
        self.ids.iter().copied().collect()
    }
}

impl FromIterator<u32> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        let mut selection = Self::new();
        for id in iter {
            if !selection.contains(id) {
                selection.ids.push(id);
            }
        }
        selection
    }
}
