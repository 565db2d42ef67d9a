pub mod flag;
pub mod gender;
pub mod range;
pub mod record;
pub mod response;
pub mod result;

pub use flag::Flag;
pub use gender::{Gender, ParseGenderError};
pub use range::ReferenceRange;
pub use record::{LabHeader, LabRecord};
pub use response::{LabHistoryResponse, LabResultsResponse};
pub use result::{BiomarkerResult, HistoryEntry, LabSnapshot};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_serializes_snake_case() {
        let json = serde_json::to_string(&Flag::BorderlineHigh).expect("serialize flag");
        assert_eq!(json, "\"borderline_high\"");
        let round: Flag = serde_json::from_str("\"optimal\"").expect("deserialize flag");
        assert_eq!(round, Flag::Optimal);
    }

    #[test]
    fn results_response_round_trips() {
        let response = LabResultsResponse {
            lab: LabHeader {
                id: "lab-1".to_string(),
                test_date: chrono::NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date"),
                lab_type: Some("blood".to_string()),
                panel_type: Some("elite".to_string()),
                lab_provider: None,
                notes: None,
            },
            results: vec![BiomarkerResult {
                biomarker_key: "glucose".to_string(),
                display_name: "Glucose".to_string(),
                value: 92.0,
                unit: "mg/dL".to_string(),
                category: "Blood Sugar & Metabolism".to_string(),
                ref_low: Some(65.0),
                ref_high: Some(99.0),
                optimal_low: None,
                optimal_high: None,
                flag: Some(Flag::Normal),
            }],
        };
        let json = serde_json::to_string(&response).expect("serialize response");
        let round: LabResultsResponse = serde_json::from_str(&json).expect("deserialize response");
        assert_eq!(round, response);
    }
}
