use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One stored lab draw for a patient.
///
/// The stored table is wide: one sparse column per known biomarker key, most
/// of them empty for any given draw since panels vary. Values stay raw
/// strings here; numeric coercion happens at transform time so that
/// unparseable values can be treated as absent rather than erroring the
/// whole row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabRecord {
    pub id: String,
    pub patient_id: String,
    pub test_date: NaiveDate,
    pub lab_type: Option<String>,
    pub panel_type: Option<String>,
    pub lab_provider: Option<String>,
    pub notes: Option<String>,
    /// Raw biomarker values keyed by biomarker key. Absent key = not drawn.
    pub values: BTreeMap<String, String>,
}

impl LabRecord {
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn header(&self) -> LabHeader {
        LabHeader {
            id: self.id.clone(),
            test_date: self.test_date,
            lab_type: self.lab_type.clone(),
            panel_type: self.panel_type.clone(),
            lab_provider: self.lab_provider.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Draw-level metadata returned alongside transformed results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabHeader {
    pub id: String,
    pub test_date: NaiveDate,
    pub lab_type: Option<String>,
    pub panel_type: Option<String>,
    pub lab_provider: Option<String>,
    pub notes: Option<String>,
}
