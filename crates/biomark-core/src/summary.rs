use serde::Serialize;

use biomark_model::{BiomarkerResult, Flag};
use biomark_registry::BiomarkerRegistry;

/// Headline counts for a single lab draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlagSummary {
    pub total: usize,
    pub in_range: usize,
    pub flagged: usize,
    pub borderline: usize,
}

impl FlagSummary {
    pub fn from_results(results: &[BiomarkerResult]) -> Self {
        let total = results.len();
        let flagged = results
            .iter()
            .filter(|r| r.flag.is_some_and(Flag::is_out_of_range))
            .count();
        let borderline = results
            .iter()
            .filter(|r| r.flag.is_some_and(Flag::is_borderline))
            .count();
        Self {
            total,
            in_range: total - flagged - borderline,
            flagged,
            borderline,
        }
    }
}

/// Display filter over a draw's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagFilter {
    #[default]
    All,
    /// Out-of-range or borderline.
    Flagged,
    /// Normal or optimal. Unflagged results (no range) are excluded.
    InRange,
}

impl FlagFilter {
    pub fn matches(self, flag: Option<Flag>) -> bool {
        match self {
            FlagFilter::All => true,
            FlagFilter::Flagged => {
                flag.is_some_and(|f| f.is_out_of_range() || f.is_borderline())
            }
            FlagFilter::InRange => {
                matches!(flag, Some(Flag::Normal) | Some(Flag::Optimal))
            }
        }
    }
}

/// Group results by category, in the registry's fixed category order.
///
/// Categories with no results are omitted; results in categories outside the
/// fixed order (the `Other` fallback) are not appended.
pub fn group_by_category<'a>(
    results: &'a [BiomarkerResult],
    registry: &BiomarkerRegistry,
) -> Vec<(String, Vec<&'a BiomarkerResult>)> {
    let mut grouped = Vec::new();
    for category in registry.categories_in_order() {
        let in_category: Vec<&BiomarkerResult> = results
            .iter()
            .filter(|r| r.category == category)
            .collect();
        if !in_category.is_empty() {
            grouped.push((category.to_string(), in_category));
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(key: &str, flag: Option<Flag>) -> BiomarkerResult {
        BiomarkerResult {
            biomarker_key: key.to_string(),
            display_name: key.to_string(),
            value: 1.0,
            unit: String::new(),
            category: "Hormones".to_string(),
            ref_low: None,
            ref_high: None,
            optimal_low: None,
            optimal_high: None,
            flag,
        }
    }

    #[test]
    fn summary_counts_partition_results() {
        let results = vec![
            result("a", Some(Flag::High)),
            result("b", Some(Flag::Low)),
            result("c", Some(Flag::BorderlineHigh)),
            result("d", Some(Flag::Normal)),
            result("e", Some(Flag::Optimal)),
            result("f", None),
        ];
        let summary = FlagSummary::from_results(&results);
        assert_eq!(summary.total, 6);
        assert_eq!(summary.flagged, 2);
        assert_eq!(summary.borderline, 1);
        // Unflagged results count as in-range in the headline stats.
        assert_eq!(summary.in_range, 3);
    }

    #[test]
    fn filters_partition_by_flag_class() {
        assert!(FlagFilter::Flagged.matches(Some(Flag::High)));
        assert!(FlagFilter::Flagged.matches(Some(Flag::BorderlineLow)));
        assert!(!FlagFilter::Flagged.matches(Some(Flag::Normal)));
        assert!(!FlagFilter::Flagged.matches(None));

        assert!(FlagFilter::InRange.matches(Some(Flag::Optimal)));
        assert!(!FlagFilter::InRange.matches(Some(Flag::BorderlineHigh)));
        assert!(!FlagFilter::InRange.matches(None));

        assert!(FlagFilter::All.matches(None));
    }
}
