use std::collections::BTreeMap;

use biomark_model::{Gender, ReferenceRange};

/// Two stored range rows of equal gender specificity claim the same
/// biomarker. This is a data-integrity problem in the range table and is
/// surfaced rather than resolved by row order.
#[derive(Debug, Clone, thiserror::Error)]
#[error("conflicting {gender} reference ranges for biomarker '{biomarker}'")]
pub struct RangeConflict {
    pub biomarker: String,
    pub gender: Gender,
}

/// Reference ranges applicable to one query gender, one row per biomarker.
#[derive(Debug, Clone, Default)]
pub struct RangeIndex {
    by_key: BTreeMap<String, ReferenceRange>,
}

impl RangeIndex {
    pub fn get(&self, key: &str) -> Option<&ReferenceRange> {
        self.by_key.get(key)
    }

    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}

/// Select the applicable range per biomarker for `gender`.
///
/// A row applies when its gender is the query gender or `Both`. An exact
/// gender match always beats a `Both` row; two applicable rows of equal
/// specificity are a [`RangeConflict`]. An empty input is a valid range set
/// (every biomarker ends up unflagged), not an error.
pub fn resolve_ranges(
    rows: &[ReferenceRange],
    gender: Gender,
) -> Result<RangeIndex, RangeConflict> {
    let mut by_key: BTreeMap<String, ReferenceRange> = BTreeMap::new();

    for row in rows {
        if !row.gender.applies_to(gender) {
            continue;
        }
        match by_key.get(&row.biomarker) {
            None => {
                by_key.insert(row.biomarker.clone(), row.clone());
            }
            Some(existing) => {
                if existing.gender == row.gender {
                    return Err(RangeConflict {
                        biomarker: row.biomarker.clone(),
                        gender: row.gender,
                    });
                }
                if row.gender.is_specific() {
                    by_key.insert(row.biomarker.clone(), row.clone());
                }
                // Otherwise the existing exact match stays.
            }
        }
    }

    tracing::debug!(gender = %gender, ranges = by_key.len(), "resolved reference ranges");
    Ok(RangeIndex { by_key })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(biomarker: &str, gender: Gender, low: f64, high: f64) -> ReferenceRange {
        ReferenceRange {
            biomarker: biomarker.to_string(),
            gender,
            ref_low: Some(low),
            ref_high: Some(high),
            reference_low: None,
            reference_high: None,
            optimal_low: None,
            optimal_high: None,
            unit: None,
        }
    }

    #[test]
    fn exact_gender_beats_both_in_either_order() {
        let male = row("ferritin", Gender::Male, 30.0, 400.0);
        let both = row("ferritin", Gender::Both, 15.0, 300.0);

        for rows in [vec![male.clone(), both.clone()], vec![both, male]] {
            let index = resolve_ranges(&rows, Gender::Male).unwrap();
            let winner = index.get("ferritin").unwrap();
            assert_eq!(winner.gender, Gender::Male);
            assert_eq!(winner.ref_low, Some(30.0));
        }
    }

    #[test]
    fn other_gender_rows_are_ignored() {
        let rows = vec![row("estradiol", Gender::Female, 15.0, 350.0)];
        let index = resolve_ranges(&rows, Gender::Male).unwrap();
        assert!(index.get("estradiol").is_none());
    }

    #[test]
    fn duplicate_specificity_is_a_conflict() {
        let rows = vec![
            row("glucose", Gender::Both, 65.0, 99.0),
            row("glucose", Gender::Both, 70.0, 100.0),
        ];
        let err = resolve_ranges(&rows, Gender::Male).unwrap_err();
        assert_eq!(err.biomarker, "glucose");
        assert_eq!(err.gender, Gender::Both);
    }

    #[test]
    fn empty_input_is_a_valid_empty_set() {
        let index = resolve_ranges(&[], Gender::Female).unwrap();
        assert!(index.is_empty());
    }
}
