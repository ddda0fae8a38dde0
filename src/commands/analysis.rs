//! Symptom analysis commands.
//!
//! - `list_symptoms`: the catalog's selectable symptoms
//! - `toggle_symptom` / `get_selection` / `clear_selection`: picker state
//! - `analyze_symptoms`: rank conditions for a filled-in form; an empty
//!   symptom list falls back to the picker selection
//! - `analyze_symptoms_paced`: same, after the randomized "analyzing" pause

use crate::analysis::{self, AnalysisReport, AnalysisRequest};
use crate::core_state::CoreState;
use crate::models::Symptom;

/// Returns every symptom in catalog order.
pub fn list_symptoms(state: &CoreState) -> Vec<Symptom> {
    state.catalog().symptoms().to_vec()
}

/// Flips a symptom in the picker. Returns the selection afterwards.
pub fn toggle_symptom(symptom_id: u32, state: &CoreState) -> Result<Vec<u32>, String> {
    if !state.catalog().contains_symptom(symptom_id) {
        return Err(format!("Unknown symptom id {symptom_id}"));
    }

    let mut selection = state.write_selection().map_err(|e| e.to_string())?;
    let selected = selection.toggle(symptom_id);
    tracing::debug!(symptom_id, selected, "Symptom toggled");
    Ok(selection.ids().to_vec())
}

pub fn get_selection(state: &CoreState) -> Result<Vec<u32>, String> {
    let selection = state.read_selection().map_err(|e| e.to_string())?;
    Ok(selection.ids().to_vec())
}

pub fn clear_selection(state: &CoreState) -> Result<(), String> {
    state.write_selection().map_err(|e| e.to_string())?.clear();
    Ok(())
}

/// Fills in the picker selection when the form carries no symptom ids.
fn with_picker_selection(
    mut request: AnalysisRequest,
    state: &CoreState,
) -> Result<AnalysisRequest, String> {
    if request.selected_symptom_ids.is_empty() {
        let selection = state.read_selection().map_err(|e| e.to_string())?;
        request.selected_symptom_ids = selection.ids().to_vec();
    }
    Ok(request)
}

/// Ranks catalog conditions for the submitted form.
pub fn analyze_symptoms(
    request: AnalysisRequest,
    state: &CoreState,
) -> Result<AnalysisReport, String> {
    let request = with_picker_selection(request, state)?;
    let catalog = state.catalog();
    analysis::analyze(&request, &catalog).map_err(|e| {
        tracing::debug!("Analysis rejected: {e}");
        e.to_string()
    })
}

/// Ranks conditions after a 2–3 s pause so the "analyzing" view can show.
pub async fn analyze_symptoms_paced(
    request: AnalysisRequest,
    state: &CoreState,
) -> Result<AnalysisReport, String> {
    let request = with_picker_selection(request, state)?;
    let catalog = state.catalog();
    analysis::analyze_paced(&request, &catalog, analysis::pacing_delay())
        .await
        .map_err(|e| e.to_string())
}
