use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use biomark_model::LabSnapshot;
use biomark_registry::BiomarkerRegistry;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompareError {
    #[error("need at least 2 labs to compare, have {have}")]
    InsufficientData { have: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Flat,
}

impl Direction {
    pub fn glyph(self) -> &'static str {
        match self {
            Direction::Up => "↑",
            Direction::Down => "↓",
            Direction::Flat => "=",
        }
    }
}

/// Percentage change between the latest draw and the immediately prior one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delta {
    pub pct: f64,
    pub direction: Direction,
}

/// One draw column of the comparison table, latest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonColumn {
    pub lab_id: String,
    pub test_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub key: String,
    pub label: String,
    pub unit: String,
    /// Aligned to the snapshot columns; `None` where the draw lacks the key.
    pub values: Vec<Option<f64>>,
    /// `None` means "no data": value missing on either side, or prior zero.
    pub delta: Option<Delta>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonCategory {
    pub category: String,
    pub rows: Vec<ComparisonRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonTable {
    pub columns: Vec<ComparisonColumn>,
    pub categories: Vec<ComparisonCategory>,
}

/// Align 2+ history snapshots into a category-grouped comparison table.
///
/// Snapshots must be ordered most-recent-first (the history builder's
/// contract). Categories follow the registry's fixed order; biomarkers that
/// resolve outside it (the `Other` fallback) are not appended. The delta is
/// computed only between index 0 and index 1.
pub fn build_comparison(
    snapshots: &[LabSnapshot],
    registry: &BiomarkerRegistry,
) -> Result<ComparisonTable, CompareError> {
    if snapshots.len() < 2 {
        return Err(CompareError::InsufficientData {
            have: snapshots.len(),
        });
    }

    let mut present: BTreeSet<&str> = BTreeSet::new();
    for snapshot in snapshots {
        for entry in &snapshot.biomarkers {
            present.insert(entry.biomarker_key.as_str());
        }
    }

    let columns = snapshots
        .iter()
        .map(|snapshot| ComparisonColumn {
            lab_id: snapshot.id.clone(),
            test_date: snapshot.test_date,
        })
        .collect();

    let mut categories = Vec::new();
    for category in registry.categories_in_order() {
        let rows: Vec<ComparisonRow> = registry
            .markers_in_category(category)
            .filter(|def| present.contains(def.key.as_str()))
            .map(|def| {
                let values: Vec<Option<f64>> = snapshots
                    .iter()
                    .map(|snapshot| snapshot.value_of(&def.key))
                    .collect();
                let delta = delta_between(&values);
                ComparisonRow {
                    key: def.key.clone(),
                    label: def.label.clone(),
                    unit: def.unit.clone(),
                    values,
                    delta,
                }
            })
            .collect();

        if !rows.is_empty() {
            categories.push(ComparisonCategory {
                category: category.to_string(),
                rows,
            });
        }
    }

    Ok(ComparisonTable {
        columns,
        categories,
    })
}

/// Percentage delta between the first two values: both must be present and
/// the prior nonzero, otherwise there is no data to compare.
pub fn delta_between(values: &[Option<f64>]) -> Option<Delta> {
    let latest = values.first().copied().flatten()?;
    let prior = values.get(1).copied().flatten()?;
    if prior == 0.0 {
        return None;
    }
    let pct = (latest - prior) / prior.abs() * 100.0;
    let direction = if pct > 0.0 {
        Direction::Up
    } else if pct < 0.0 {
        Direction::Down
    } else {
        Direction::Flat
    };
    Some(Delta { pct, direction })
}
