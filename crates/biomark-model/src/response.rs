use serde::{Deserialize, Serialize};

use crate::record::LabHeader;
use crate::result::{BiomarkerResult, LabSnapshot};

/// Response envelope for the single-lab results query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabResultsResponse {
    pub lab: LabHeader,
    pub results: Vec<BiomarkerResult>,
}

/// Response envelope for the patient lab history query.
///
/// Snapshots are ordered most-recent-first: index 0 is the latest draw and
/// index 1 the immediately prior one. The comparison builder relies on this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabHistoryResponse {
    pub labs: Vec<LabSnapshot>,
}
