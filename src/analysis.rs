//! Symptom analysis: form values in, annotated report out.
//!
//! The form hands over text for age and duration. Those are read the way
//! the form always read them: a leading integer, anything after it
//! ignored. Text that does not start with a number leaves the field
//! absent, which switches off the adjustment it would drive rather than
//! failing the analysis.

use std::num::IntErrorKind;
use std::sync::LazyLock;
use std::time::Duration;

use chrono::{Local, NaiveDateTime};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config;
use crate::matcher::{match_conditions, ConditionMatch, Query};
use crate::models::Gender;

pub const DISCLAIMER: &str = "Disclaimer: This tool provides general information only and should not be used as a substitute for professional medical advice. Always consult with a qualified healthcare provider for proper diagnosis and treatment.";

pub const TIME_SENSITIVE_NOTE: &str =
    "Recommendations are time-sensitive. Seek professional medical advice if symptoms worsen.";

static LEADING_INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?[0-9]+)").unwrap());

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Incomplete(Vec<&'static str>),

    #[error("Unknown symptom id {0}")]
    UnknownSymptom(u32),
}

// ═══════════════════════════════════════════
// Request / report types
// ═══════════════════════════════════════════

/// Raw values from the analysis form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub selected_symptom_ids: Vec<u32>,
    pub age: String,
    pub gender: String,
    pub duration: String,
}

impl AnalysisRequest {
    /// Fields that still block the "Analyze" action.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.selected_symptom_ids.is_empty() {
            missing.push("symptoms");
        }
        if self.age.trim().is_empty() {
            missing.push("age");
        }
        if self.gender.trim().is_empty() {
            missing.push("gender");
        }
        if self.duration.trim().is_empty() {
            missing.push("duration");
        }
        missing
    }

    /// Every field filled in. Content is not checked here.
    pub fn is_ready(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Result of one analysis, as shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub id: Uuid,
    pub analyzed_at: NaiveDateTime,
    pub query: Query,
    pub matches: Vec<ConditionMatch>,
    pub disclaimer: String,
    pub time_sensitive_note: String,
}

// ═══════════════════════════════════════════
// Field parsing
// ═══════════════════════════════════════════

/// Leading integer of `input`, ignoring surrounding text. `None` when the
/// text does not start with an ASCII number. Values past the `i64` range
/// saturate.
pub fn parse_form_integer(input: &str) -> Option<i64> {
    let digits = LEADING_INTEGER.captures(input)?.get(1)?.as_str();
    match digits.parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

fn saturate_u32(v: i64) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

/// Age in years. Negative values count as absent; huge ones saturate.
pub fn parse_age(input: &str) -> Option<u32> {
    parse_form_integer(input).filter(|&v| v >= 0).map(saturate_u32)
}

/// Duration in days. Must be at least one day; huge values saturate.
pub fn parse_duration_days(input: &str) -> Option<u32> {
    parse_form_integer(input).filter(|&v| v >= 1).map(saturate_u32)
}

pub fn parse_gender(input: &str) -> Option<Gender> {
    input.trim().to_lowercase().parse().ok()
}

// ═══════════════════════════════════════════
// Analysis
// ═══════════════════════════════════════════

/// Validate the form and turn it into a matcher query.
pub fn prepare_query(request: &AnalysisRequest, catalog: &Catalog) -> Result<Query, AnalysisError> {
    let missing = request.missing_fields();
    if !missing.is_empty() {
        return Err(AnalysisError::Incomplete(missing));
    }

    if let Some(&unknown) = request
        .selected_symptom_ids
        .iter()
        .find(|&&id| !catalog.contains_symptom(id))
    {
        return Err(AnalysisError::UnknownSymptom(unknown));
    }

    let query = Query {
        selected_symptom_ids: request.selected_symptom_ids.iter().copied().collect(),
        age: parse_age(&request.age),
        gender: parse_gender(&request.gender),
        duration_days: parse_duration_days(&request.duration),
    };

    if query.age.is_none() || query.duration_days.is_none() || query.gender.is_none() {
        tracing::debug!(
            age = query.age.is_some(),
            gender = query.gender.is_some(),
            duration = query.duration_days.is_some(),
            "Unreadable form field; related adjustment skipped"
        );
    }

    Ok(query)
}

/// Run the matcher for a filled-in form.
pub fn analyze(request: &AnalysisRequest, catalog: &Catalog) -> Result<AnalysisReport, AnalysisError> {
    let query = prepare_query(request, catalog)?;
    let matches = match_conditions(&query, catalog);

    let report = AnalysisReport {
        id: Uuid::new_v4(),
        analyzed_at: Local::now().naive_local(),
        query,
        matches,
        disclaimer: DISCLAIMER.to_string(),
        time_sensitive_note: TIME_SENSITIVE_NOTE.to_string(),
    };

    tracing::info!(
        report_id = %report.id,
        selected = report.query.selected_symptom_ids.len(),
        matched = report.matches.len(),
        top = report.matches.first().map(|m| m.condition.name.as_str()).unwrap_or("none"),
        "Symptom analysis complete"
    );

    Ok(report)
}

/// Random "analyzing" pause in `[ANALYSIS_DELAY_MIN_MS, ANALYSIS_DELAY_MAX_MS)`.
pub fn pacing_delay() -> Duration {
    let ms = rand::thread_rng()
        .gen_range(config::ANALYSIS_DELAY_MIN_MS..config::ANALYSIS_DELAY_MAX_MS);
    Duration::from_millis(ms)
}

/// Same as [`analyze`], revealed after `delay`. Validation runs first so a
/// bad form fails without waiting.
pub async fn analyze_paced(
    request: &AnalysisRequest,
    catalog: &Catalog,
    delay: Duration,
) -> Result<AnalysisReport, AnalysisError> {
    prepare_query(request, catalog)?;
    tokio::time::sleep(delay).await;
    analyze(request, catalog)
}
