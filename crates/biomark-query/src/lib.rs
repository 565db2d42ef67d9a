//! The read-only query operations exposed to presentation layers.
//!
//! Each operation validates its input before any fetch, reads what it needs
//! from the [`LabStore`], and recomputes results from scratch — no cache, no
//! retries, no writes. Failures surface as a [`QueryError`] whose
//! [`code`](QueryError::code) distinguishes "no data" conditions from
//! genuine upstream failures.

use biomark_core::{RangeConflict, build_history, resolve_ranges, transform_lab};
use biomark_model::{Gender, LabHistoryResponse, LabResultsResponse};
use biomark_registry::BiomarkerRegistry;
use biomark_store::{LabStore, StoreError};

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("{message}")]
    InvalidInput { message: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("upstream read failed: {0}")]
    Upstream(#[from] StoreError),

    #[error("reference range integrity: {0}")]
    RangeIntegrity(#[from] RangeConflict),
}

impl QueryError {
    /// Stable machine-readable code for the presentation boundary. Both
    /// store failures and range-table integrity violations report as
    /// `upstream`; only the first two render as "no data".
    pub fn code(&self) -> &'static str {
        match self {
            QueryError::InvalidInput { .. } => "invalid_input",
            QueryError::NotFound { .. } => "not_found",
            QueryError::Upstream(_) | QueryError::RangeIntegrity(_) => "upstream",
        }
    }

    fn invalid_input(message: impl Into<String>) -> Self {
        QueryError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Fetch one lab draw and flag every present biomarker against the
/// gender-applicable reference ranges.
///
/// A missing range table entry leaves a result unflagged; a *failed* range
/// fetch aborts the whole request — partially flagged output is never
/// produced.
pub fn get_lab_results(
    store: &dyn LabStore,
    registry: &BiomarkerRegistry,
    lab_id: &str,
    gender: Gender,
) -> Result<LabResultsResponse, QueryError> {
    let lab_id = lab_id.trim();
    if lab_id.is_empty() {
        return Err(QueryError::invalid_input("lab_id required"));
    }

    let record = store
        .lab_by_id(lab_id)?
        .ok_or_else(|| QueryError::NotFound {
            message: format!("lab '{lab_id}' not found"),
        })?;
    let range_rows = store.reference_ranges()?;
    let ranges = resolve_ranges(&range_rows, gender)?;

    let results = transform_lab(&record, &ranges, registry);
    tracing::info!(lab_id, gender = %gender, results = results.len(), "lab results query");

    Ok(LabResultsResponse {
        lab: record.header(),
        results,
    })
}

/// Fetch a patient's full lab history, most recent draw first.
pub fn get_patient_lab_history(
    store: &dyn LabStore,
    registry: &BiomarkerRegistry,
    patient_id: &str,
    gender: Gender,
) -> Result<LabHistoryResponse, QueryError> {
    let patient_id = patient_id.trim();
    if patient_id.is_empty() {
        return Err(QueryError::invalid_input("patient_id required"));
    }

    let records = store.labs_for_patient(patient_id)?;
    let range_rows = store.reference_ranges()?;
    let ranges = resolve_ranges(&range_rows, gender)?;

    let labs = build_history(records, &ranges, registry);
    tracing::info!(patient_id, gender = %gender, draws = labs.len(), "lab history query");

    Ok(LabHistoryResponse { labs })
}
