//! Integration tests for the patient history builder.

use chrono::NaiveDate;

use biomark_core::{build_history, resolve_ranges};
use biomark_model::{Gender, LabRecord, ReferenceRange};
use biomark_registry::BiomarkerRegistry;

fn record(id: &str, date: (i32, u32, u32), values: &[(&str, &str)]) -> LabRecord {
    LabRecord {
        id: id.to_string(),
        patient_id: "patient-1".to_string(),
        test_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        lab_type: None,
        panel_type: Some("baseline".to_string()),
        lab_provider: None,
        notes: None,
        values: values
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
    }
}

#[test]
fn snapshots_are_most_recent_first() {
    let registry = BiomarkerRegistry::from_builtin().unwrap();
    let ranges = resolve_ranges(&[], Gender::Male).unwrap();

    let records = vec![
        record("lab-a", (2024, 11, 4), &[("glucose", "95")]),
        record("lab-c", (2025, 6, 2), &[("glucose", "88")]),
        record("lab-b", (2025, 1, 20), &[("glucose", "91")]),
    ];
    let history = build_history(records, &ranges, &registry);

    let ids: Vec<&str> = history.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["lab-c", "lab-b", "lab-a"]);
}

#[test]
fn equal_dates_tie_break_on_id() {
    let registry = BiomarkerRegistry::from_builtin().unwrap();
    let ranges = resolve_ranges(&[], Gender::Male).unwrap();

    let records = vec![
        record("lab-2", (2025, 3, 1), &[]),
        record("lab-1", (2025, 3, 1), &[]),
    ];
    let history = build_history(records, &ranges, &registry);
    let ids: Vec<&str> = history.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["lab-1", "lab-2"]);
}

#[test]
fn snapshots_carry_ranges_but_no_flags() {
    let registry = BiomarkerRegistry::from_builtin().unwrap();
    let rows = vec![ReferenceRange {
        biomarker: "vitamin_d".to_string(),
        gender: Gender::Both,
        ref_low: Some(30.0),
        ref_high: Some(100.0),
        reference_low: None,
        reference_high: None,
        optimal_low: Some(50.0),
        optimal_high: Some(80.0),
        unit: None,
    }];
    let ranges = resolve_ranges(&rows, Gender::Female).unwrap();

    let records = vec![record("lab-a", (2025, 6, 2), &[("vitamin_d", "25")])];
    let history = build_history(records, &ranges, &registry);

    let entry = &history[0].biomarkers[0];
    assert_eq!(entry.biomarker_key, "vitamin_d");
    assert_eq!(entry.value, 25.0);
    assert_eq!(entry.ref_low, Some(30.0));
    assert_eq!(entry.ref_high, Some(100.0));
    // HistoryEntry has no flag field at all; this is the raw-comparison view.
}

#[test]
fn sparse_draws_only_surface_present_markers() {
    let registry = BiomarkerRegistry::from_builtin().unwrap();
    let ranges = resolve_ranges(&[], Gender::Male).unwrap();

    let records = vec![record(
        "lab-a",
        (2025, 6, 2),
        &[("glucose", "92"), ("tsh", ""), ("ferritin", "n/a")],
    )];
    let history = build_history(records, &ranges, &registry);

    assert_eq!(history[0].biomarkers.len(), 1);
    assert_eq!(history[0].biomarkers[0].biomarker_key, "glucose");
}
