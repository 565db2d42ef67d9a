pub mod compare;
pub mod format;
pub mod history;
pub mod single;

pub use compare::render_comparison;
pub use format::{format_date, format_delta, format_opt_value, format_range, format_value};
pub use history::render_history;
pub use single::{lab_heading, render_single_lab, summary_line};

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use biomark_core::{FlagFilter, FlagSummary, build_comparison};
    use biomark_model::{
        BiomarkerResult, Flag, HistoryEntry, LabHeader, LabResultsResponse, LabSnapshot,
    };
    use biomark_registry::BiomarkerRegistry;

    use super::*;

    fn response() -> LabResultsResponse {
        LabResultsResponse {
            lab: LabHeader {
                id: "lab-1".to_string(),
                test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                lab_type: Some("blood".to_string()),
                panel_type: Some("elite".to_string()),
                lab_provider: Some("Quest".to_string()),
                notes: None,
            },
            results: vec![
                BiomarkerResult {
                    biomarker_key: "vitamin_d".to_string(),
                    display_name: "Vitamin D".to_string(),
                    value: 25.0,
                    unit: "ng/mL".to_string(),
                    category: "Vitamins & Minerals".to_string(),
                    ref_low: Some(30.0),
                    ref_high: Some(100.0),
                    optimal_low: Some(50.0),
                    optimal_high: Some(80.0),
                    flag: Some(Flag::Low),
                },
                BiomarkerResult {
                    biomarker_key: "glucose".to_string(),
                    display_name: "Glucose".to_string(),
                    value: 92.0,
                    unit: "mg/dL".to_string(),
                    category: "Blood Sugar & Metabolism".to_string(),
                    ref_low: Some(65.0),
                    ref_high: Some(99.0),
                    optimal_low: None,
                    optimal_high: None,
                    flag: Some(Flag::BorderlineHigh),
                },
            ],
        }
    }

    #[test]
    fn summary_line_reads_naturally() {
        let summary = FlagSummary {
            total: 24,
            in_range: 18,
            flagged: 4,
            borderline: 2,
        };
        assert_eq!(
            summary_line(&summary),
            "24 markers · 18 in range · 4 flagged · 2 borderline"
        );
    }

    #[test]
    fn single_view_groups_categories_in_fixed_order() {
        let registry = BiomarkerRegistry::from_builtin().unwrap();
        let rendered = render_single_lab(&response(), &registry, FlagFilter::All, None).to_string();

        assert!(rendered.contains("Vitamin D"));
        assert!(rendered.contains("Glucose"));
        assert!(rendered.contains("30 – 100"));
        // Blood Sugar & Metabolism precedes Vitamins & Minerals in the fixed
        // category order, regardless of result order.
        let sugar = rendered.find("BLOOD SUGAR & METABOLISM").unwrap();
        let vitamins = rendered.find("VITAMINS & MINERALS").unwrap();
        assert!(sugar < vitamins);
    }

    #[test]
    fn single_view_filter_drops_in_range_rows() {
        let registry = BiomarkerRegistry::from_builtin().unwrap();
        let rendered =
            render_single_lab(&response(), &registry, FlagFilter::InRange, None).to_string();
        assert!(!rendered.contains("Vitamin D"));
        assert!(!rendered.contains("Glucose"));
    }

    #[test]
    fn heading_includes_draw_metadata() {
        assert_eq!(lab_heading(&response()), "Lab lab-1 · Jun 2, 2025 · elite · Quest");
    }

    #[test]
    fn comparison_view_shows_values_and_delta() {
        let registry = BiomarkerRegistry::from_builtin().unwrap();
        let entry = |value: f64| HistoryEntry {
            biomarker_key: "glucose".to_string(),
            display_name: "Glucose".to_string(),
            value,
            unit: "mg/dL".to_string(),
            category: "Blood Sugar & Metabolism".to_string(),
            ref_low: Some(65.0),
            ref_high: Some(99.0),
        };
        let snapshots = vec![
            LabSnapshot {
                id: "lab-2".to_string(),
                test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                lab_type: None,
                panel_type: None,
                lab_provider: None,
                biomarkers: vec![entry(110.0)],
            },
            LabSnapshot {
                id: "lab-1".to_string(),
                test_date: NaiveDate::from_ymd_opt(2025, 1, 20).unwrap(),
                lab_type: None,
                panel_type: None,
                lab_provider: None,
                biomarkers: vec![entry(100.0)],
            },
        ];
        let comparison = build_comparison(&snapshots, &registry).unwrap();
        let rendered = render_comparison(&comparison).to_string();

        assert!(rendered.contains("Glucose (mg/dL)"));
        assert!(rendered.contains("110"));
        assert!(rendered.contains("100"));
        assert!(rendered.contains("↑ 10.0%"));
        assert!(rendered.contains("Jun 2, 2025 (latest)"));
    }

    #[test]
    fn history_view_lists_draws() {
        let labs = vec![LabSnapshot {
            id: "lab-2".to_string(),
            test_date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            lab_type: None,
            panel_type: Some("elite".to_string()),
            lab_provider: None,
            biomarkers: vec![],
        }];
        let rendered =
            render_history(&biomark_model::LabHistoryResponse { labs }).to_string();
        assert!(rendered.contains("Jun 2, 2025 (latest)"));
        assert!(rendered.contains("elite"));
        assert!(rendered.contains("lab-2"));
    }
}
