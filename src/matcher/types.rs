use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::{Condition, Gender, Urgency};

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// One evaluation request. Rebuilt for every analysis.
///
/// Absent demographic fields only switch off the adjustment they drive;
/// matching on symptom overlap always runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub selected_symptom_ids: BTreeSet<u32>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub duration_days: Option<u32>,
}

impl Query {
    pub fn new(selected_symptom_ids: impl IntoIterator<Item = u32>) -> Self {
        Self {
            selected_symptom_ids: selected_symptom_ids.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_duration_days(mut self, days: u32) -> Self {
        self.duration_days = Some(days);
        self
    }
}

// ---------------------------------------------------------------------------
// ConditionMatch
// ---------------------------------------------------------------------------

/// A catalog condition annotated for one query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    #[serde(flatten)]
    pub condition: Condition,
    /// 0–100, share of the condition's symptoms that were selected.
    pub match_percentage: u8,
    pub adjusted_urgency: Urgency,
    pub gender_specific_advice: Option<Vec<String>>,
    pub age_specific_advice: Option<Vec<String>>,
}

impl ConditionMatch {
    /// Whether the urgency was raised above the catalog's base level.
    pub fn was_escalated(&self) -> bool {
        self.adjusted_urgency != self.condition.base_urgency
    }

    /// Card badge text, e.g. "60% Match".
    pub fn match_label(&self) -> String {
        format!("{}% Match", self.match_percentage)
    }

    /// Card badge text, e.g. "High Urgency".
    pub fn urgency_label(&self) -> String {
        format!("{} Urgency", self.adjusted_urgency.label())
    }
}
