use biomark_model::{HistoryEntry, LabRecord, LabSnapshot};
use biomark_registry::BiomarkerRegistry;

use crate::ranges::RangeIndex;
use crate::transform::parse_numeric;

/// Build one history snapshot from a stored lab draw.
///
/// Per-key extraction matches [`transform_lab`], but the history view is for
/// raw side-by-side comparison, so no flag is computed.
///
/// [`transform_lab`]: crate::transform::transform_lab
pub fn build_snapshot(
    record: &LabRecord,
    ranges: &RangeIndex,
    registry: &BiomarkerRegistry,
) -> LabSnapshot {
    let mut biomarkers = Vec::new();

    for key in registry.all_keys() {
        let Some(value) = record.value(key).and_then(parse_numeric) else {
            continue;
        };

        let meta = registry.definition_or_fallback(key);
        let range = ranges.get(key);
        let unit = if meta.unit.is_empty() {
            range
                .and_then(|r| r.unit.clone())
                .unwrap_or_default()
        } else {
            meta.unit
        };

        biomarkers.push(HistoryEntry {
            biomarker_key: key.to_string(),
            display_name: meta.label,
            value,
            unit,
            category: meta.category,
            ref_low: range.and_then(|r| r.effective_low()),
            ref_high: range.and_then(|r| r.effective_high()),
        });
    }

    LabSnapshot {
        id: record.id.clone(),
        test_date: record.test_date,
        lab_type: record.lab_type.clone(),
        panel_type: record.panel_type.clone(),
        lab_provider: record.lab_provider.clone(),
        biomarkers,
    }
}

/// Build a patient's lab history, most recent draw first.
///
/// Ordering is a hard contract consumed by the comparison builder: index 0
/// is the latest draw, index 1 the immediately prior one. Equal test dates
/// tie-break on id ascending so the order never depends on store row order.
pub fn build_history(
    mut records: Vec<LabRecord>,
    ranges: &RangeIndex,
    registry: &BiomarkerRegistry,
) -> Vec<LabSnapshot> {
    records.sort_by(|a, b| {
        b.test_date
            .cmp(&a.test_date)
            .then_with(|| a.id.cmp(&b.id))
    });

    tracing::debug!(draws = records.len(), "built lab history");
    records
        .iter()
        .map(|record| build_snapshot(record, ranges, registry))
        .collect()
}
