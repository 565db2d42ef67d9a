use biomark_model::{BiomarkerResult, LabRecord};
use biomark_registry::BiomarkerRegistry;

use crate::evaluate::evaluate_flag;
use crate::ranges::RangeIndex;

/// Coerce a raw stored value to a finite number.
///
/// Values arrive as strings from the wide lab table. Anything that does not
/// parse to a finite number (empty, text, NaN, infinities) is absent, never
/// an error and never a NaN in output.
pub fn parse_numeric(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Transform one stored lab draw into per-biomarker flagged results.
///
/// Output order is the registry's key iteration order, stable across calls;
/// grouping by category is a presentation concern and happens later. Keys
/// with no parseable value are omitted. Keys with no applicable reference
/// range are included unflagged.
pub fn transform_lab(
    record: &LabRecord,
    ranges: &RangeIndex,
    registry: &BiomarkerRegistry,
) -> Vec<BiomarkerResult> {
    let mut results = Vec::new();

    for key in registry.all_keys() {
        let Some(value) = record.value(key).and_then(parse_numeric) else {
            continue;
        };

        let meta = registry.definition_or_fallback(key);
        let range = ranges.get(key);

        let ref_low = range.and_then(|r| r.effective_low());
        let ref_high = range.and_then(|r| r.effective_high());
        let optimal_low = range.and_then(|r| r.optimal_low);
        let optimal_high = range.and_then(|r| r.optimal_high);

        // Unit preference: registry metadata, then the range row's unit.
        let unit = if meta.unit.is_empty() {
            range
                .and_then(|r| r.unit.clone())
                .unwrap_or_default()
        } else {
            meta.unit
        };

        let flag =
            range.map(|_| evaluate_flag(value, ref_low, ref_high, optimal_low, optimal_high));

        results.push(BiomarkerResult {
            biomarker_key: key.to_string(),
            display_name: meta.label,
            value,
            unit,
            category: meta.category,
            ref_low,
            ref_high,
            optimal_low,
            optimal_high,
            flag,
        });
    }

    tracing::debug!(lab_id = %record.id, results = results.len(), "transformed lab record");
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_accepts_finite_numbers_only() {
        assert_eq!(parse_numeric("450"), Some(450.0));
        assert_eq!(parse_numeric(" 4.5 "), Some(4.5));
        assert_eq!(parse_numeric(""), None);
        assert_eq!(parse_numeric("pending"), None);
        assert_eq!(parse_numeric("NaN"), None);
        assert_eq!(parse_numeric("inf"), None);
        assert_eq!(parse_numeric("-inf"), None);
    }
}
