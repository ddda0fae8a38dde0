pub mod condition;
pub mod enums;
pub mod symptom;

pub use condition::Condition;
pub use enums::{AgeGroup, Gender, Urgency};
pub use symptom::Symptom;
