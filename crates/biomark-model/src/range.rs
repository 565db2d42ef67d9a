use serde::{Deserialize, Serialize};

use crate::gender::Gender;

/// A stored reference range for one biomarker, per applicable gender.
///
/// Seeded and maintained externally; read-only here. Older rows populate the
/// legacy `reference_low`/`reference_high` columns instead of
/// `ref_low`/`ref_high`, so consumers go through [`effective_low`] /
/// [`effective_high`] rather than the raw fields.
///
/// [`effective_low`]: ReferenceRange::effective_low
/// [`effective_high`]: ReferenceRange::effective_high
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceRange {
    pub biomarker: String,
    pub gender: Gender,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
    /// Legacy column name, consulted only when `ref_low` is absent.
    pub reference_low: Option<f64>,
    /// Legacy column name, consulted only when `ref_high` is absent.
    pub reference_high: Option<f64>,
    pub optimal_low: Option<f64>,
    pub optimal_high: Option<f64>,
    pub unit: Option<String>,
}

impl ReferenceRange {
    /// Lower reference bound: `ref_low`, falling back to `reference_low`.
    pub fn effective_low(&self) -> Option<f64> {
        self.ref_low.or(self.reference_low)
    }

    /// Upper reference bound: `ref_high`, falling back to `reference_high`.
    pub fn effective_high(&self) -> Option<f64> {
        self.ref_high.or(self.reference_high)
    }
}
