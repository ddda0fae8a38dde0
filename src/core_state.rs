//! Application state shared by every command.
//!
//! Holds the validated catalog behind an `Arc` so concurrent analyses read
//! it without coordination, plus the symptom picker's current selection.

use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::catalog::{Catalog, CatalogError};
use crate::config;
use crate::selection::SymptomSelection;

pub struct CoreState {
    catalog: Arc<Catalog>,
    /// Symptoms currently ticked in the picker.
    selection: RwLock<SymptomSelection>,
}

impl CoreState {
    /// State over the user's catalog override when one exists and is
    /// valid, otherwise over the bundled catalog.
    pub fn new() -> Result<Self, CoreError> {
        let catalog = match config::catalog_override_path() {
            Some(path) if path.exists() => Self::load_override(&path)?,
            _ => Catalog::builtin()?,
        };
        Ok(Self::from_catalog(catalog))
    }

    fn load_override(path: &Path) -> Result<Catalog, CoreError> {
        match Catalog::load(path) {
            Ok(catalog) => {
                tracing::info!(
                    path = %path.display(),
                    conditions = catalog.conditions().len(),
                    "Loaded catalog override"
                );
                Ok(catalog)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Catalog override rejected, using bundled catalog: {e}"
                );
                Ok(Catalog::builtin()?)
            }
        }
    }

    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            selection: RwLock::new(SymptomSelection::new()),
        }
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    pub fn read_selection(&self) -> Result<RwLockReadGuard<'_, SymptomSelection>, CoreError> {
        self.selection.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_selection(&self) -> Result<RwLockWriteGuard<'_, SymptomSelection>, CoreError> {
        self.selection.write().map_err(|_| CoreError::LockPoisoned)
    }
}

// ═══════════════════════════════════════════════════════════
// Error types
// ═══════════════════════════════════════════════════════════

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn from_catalog_shares_one_instance() {
        let state = CoreState::from_catalog(Catalog::builtin().unwrap());
        let a = state.catalog();
        let b = state.catalog();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn selection_starts_empty() {
        let state = CoreState::from_catalog(Catalog::builtin().unwrap());
        assert!(state.read_selection().unwrap().is_empty());
        state.write_selection().unwrap().toggle(2);
        assert_eq!(state.read_selection().unwrap().ids(), &[2]);
    }

    #[test]
    fn valid_override_is_used() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{
            "symptoms": [{ "id": 1, "name": "Fever" }],
            "conditions": [{
                "id": 1, "name": "Fever only", "symptom_ids": [1], "description": "",
                "recommendations": [], "base_urgency": "low", "when_to_seek_help": []
            }]
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let catalog = CoreState::load_override(file.path()).unwrap();
        assert_eq!(catalog.conditions().len(), 1);
        assert_eq!(catalog.conditions()[0].name, "Fever only");
    }

    #[test]
    fn invalid_override_falls_back_to_builtin() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ broken").unwrap();

        let catalog = CoreState::load_override(file.path()).unwrap();
        assert_eq!(catalog.conditions().len(), 4);
    }
}
