//! Condition matching: selected symptoms plus demographics in, ranked and
//! annotated conditions out. Pure and deterministic over a `Catalog`.

pub mod engine;
pub mod types;

pub use engine::{escalation_triggered, match_conditions, match_percentage};
pub use types::{ConditionMatch, Query};
