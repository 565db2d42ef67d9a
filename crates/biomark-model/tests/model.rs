//! Serialization contract tests for the model types.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use biomark_model::{Gender, HistoryEntry, LabHistoryResponse, LabRecord, LabSnapshot};

#[test]
fn lab_record_header_carries_draw_metadata_only() {
    let mut values = BTreeMap::new();
    values.insert("glucose".to_string(), "92".to_string());
    let record = LabRecord {
        id: "lab-1".to_string(),
        patient_id: "patient-1".to_string(),
        test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        lab_type: Some("blood".to_string()),
        panel_type: None,
        lab_provider: None,
        notes: Some("fasted".to_string()),
        values,
    };

    let header = record.header();
    assert_eq!(header.id, "lab-1");
    assert_eq!(header.notes.as_deref(), Some("fasted"));

    let json = serde_json::to_value(&header).unwrap();
    assert!(json.get("values").is_none());
    assert!(json.get("patient_id").is_none());
}

#[test]
fn history_response_round_trips() {
    let response = LabHistoryResponse {
        labs: vec![LabSnapshot {
            id: "lab-1".to_string(),
            test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            lab_type: None,
            panel_type: Some("elite".to_string()),
            lab_provider: None,
            biomarkers: vec![HistoryEntry {
                biomarker_key: "glucose".to_string(),
                display_name: "Glucose".to_string(),
                value: 92.0,
                unit: "mg/dL".to_string(),
                category: "Blood Sugar & Metabolism".to_string(),
                ref_low: Some(65.0),
                ref_high: Some(99.0),
            }],
        }],
    };

    let json = serde_json::to_string(&response).unwrap();
    let round: LabHistoryResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(round, response);
}

#[test]
fn snapshot_value_lookup() {
    let snapshot = LabSnapshot {
        id: "lab-1".to_string(),
        test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
        lab_type: None,
        panel_type: None,
        lab_provider: None,
        biomarkers: vec![HistoryEntry {
            biomarker_key: "tsh".to_string(),
            display_name: "TSH".to_string(),
            value: 2.1,
            unit: "uIU/mL".to_string(),
            category: "Thyroid".to_string(),
            ref_low: None,
            ref_high: None,
        }],
    };

    assert_eq!(snapshot.value_of("tsh"), Some(2.1));
    assert_eq!(snapshot.value_of("glucose"), None);
}

#[test]
fn gender_serializes_capitalized() {
    // Range rows store "Male"/"Female"/"Both"; serde follows the variant name.
    assert_eq!(serde_json::to_string(&Gender::Both).unwrap(), "\"Both\"");
    let round: Gender = serde_json::from_str("\"Female\"").unwrap();
    assert_eq!(round, Gender::Female);
}
