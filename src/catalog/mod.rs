//! Symptom and condition catalog.
//!
//! The catalog is built once at startup, validated, and only read after
//! that. It comes either from the bundled table (`Catalog::builtin`) or
//! from an injected JSON document with the same shape.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Condition, Symptom};

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Condition {condition_id} ({name}) lists no symptoms")]
    EmptySymptomSet { condition_id: u32, name: String },

    #[error("Duplicate symptom id {0}")]
    DuplicateSymptom(u32),

    #[error("Duplicate condition id {0}")]
    DuplicateCondition(u32),

    #[error("Condition {condition_id} references unknown symptom {symptom_id}")]
    UnknownSymptom { condition_id: u32, symptom_id: u32 },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Failed to read catalog {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),
}

/// On-disk shape of an injected catalog.
#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
}

/// Validated, read-only symptom and condition tables.
#[derive(Debug, Clone)]
pub struct Catalog {
    symptoms: Vec<Symptom>,
    conditions: Vec<Condition>,
}

impl Catalog {
    /// Build a catalog, rejecting malformed entries.
    /// Condition order is kept; it is the tie-break order for ranking.
    pub fn new(symptoms: Vec<Symptom>, conditions: Vec<Condition>) -> Result<Self, CatalogError> {
        let mut symptom_ids = HashSet::with_capacity(symptoms.len());
        for symptom in &symptoms {
            if !symptom_ids.insert(symptom.id) {
                return Err(CatalogError::DuplicateSymptom(symptom.id));
            }
        }

        let mut condition_ids = HashSet::with_capacity(conditions.len());
        for condition in &conditions {
            if !condition_ids.insert(condition.id) {
                return Err(CatalogError::DuplicateCondition(condition.id));
            }
            if condition.symptom_ids.is_empty() {
                return Err(CatalogError::EmptySymptomSet {
                    condition_id: condition.id,
                    name: condition.name.clone(),
                });
            }
            if let Some(missing) = condition
                .symptom_ids
                .iter()
                .find(|id| !symptom_ids.contains(*id))
            {
                return Err(CatalogError::UnknownSymptom {
                    condition_id: condition.id,
                    symptom_id: *missing,
                });
            }
        }

        tracing::debug!(
            symptoms = symptoms.len(),
            conditions = conditions.len(),
            "Catalog validated"
        );

        Ok(Self {
            symptoms,
            conditions,
        })
    }

    /// The bundled HealthGuide table.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::symptoms(), builtin::conditions())
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(file.symptoms, file.conditions)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Load(path.display().to_string(), e.to_string()))?;
        Self::from_json_str(&json)
    }

    /// Serialize back to the injected-catalog JSON shape.
    pub fn to_json(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            symptoms: self.symptoms.clone(),
            conditions: self.conditions.clone(),
        };
        serde_json::to_string_pretty(&file).map_err(|e| CatalogError::Parse(e.to_string()))
    }

    pub fn symptoms(&self) -> &[Symptom] {
        &self.symptoms
    }

    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    pub fn symptom(&self, id: u32) -> Option<&Symptom> {
        self.symptoms.iter().find(|s| s.id == id)
    }

    pub fn condition(&self, id: u32) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    pub fn contains_symptom(&self, id: u32) -> bool {
        self.symptom(id).is_some()
    }
}
