use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::flag::Flag;

/// One flagged biomarker value from a single lab draw.
///
/// Derived fresh on every request; never persisted. `flag` is `None` only
/// when no reference range exists for the biomarker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomarkerResult {
    pub biomarker_key: String,
    pub display_name: String,
    pub value: f64,
    pub unit: String,
    pub category: String,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
    pub optimal_low: Option<f64>,
    pub optimal_high: Option<f64>,
    pub flag: Option<Flag>,
}

/// One biomarker value in a history snapshot.
///
/// History surfaces raw values for side-by-side comparison, so there is no
/// flag and no optimal range here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub biomarker_key: String,
    pub display_name: String,
    pub value: f64,
    pub unit: String,
    pub category: String,
    pub ref_low: Option<f64>,
    pub ref_high: Option<f64>,
}

/// One lab draw in a patient's history, most-recent-first in context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabSnapshot {
    pub id: String,
    pub test_date: NaiveDate,
    pub lab_type: Option<String>,
    pub panel_type: Option<String>,
    pub lab_provider: Option<String>,
    pub biomarkers: Vec<HistoryEntry>,
}

impl LabSnapshot {
    pub fn value_of(&self, key: &str) -> Option<f64> {
        self.biomarkers
            .iter()
            .find(|entry| entry.biomarker_key == key)
            .map(|entry| entry.value)
    }
}
