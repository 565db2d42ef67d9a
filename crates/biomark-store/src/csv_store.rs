//! CSV-backed lab store.
//!
//! `labs.csv` is wide and sparse: the fixed draw-metadata columns plus one
//! column per biomarker key, most cells empty for any given draw.
//! `reference_ranges.csv` carries one row per `(biomarker, gender)`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use biomark_model::{Gender, LabRecord, ReferenceRange};

use crate::LabStore;
use crate::error::StoreError;

const LABS_FILE: &str = "labs.csv";
const RANGES_FILE: &str = "reference_ranges.csv";

/// Lab record columns that are draw metadata, not biomarker values.
const LAB_META_COLUMNS: &[&str] = &[
    "id",
    "patient_id",
    "test_date",
    "lab_type",
    "panel_type",
    "lab_provider",
    "notes",
];

/// Store backed by CSV files in a data directory.
///
/// Files are re-read on every call; there is no cache to invalidate.
#[derive(Debug, Clone)]
pub struct CsvStore {
    labs_path: PathBuf,
    ranges_path: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        Self {
            labs_path: data_dir.join(LABS_FILE),
            ranges_path: data_dir.join(RANGES_FILE),
        }
    }

    fn read_labs(&self) -> Result<Vec<LabRecord>, StoreError> {
        let path = &self.labs_path;
        let bytes = std::fs::read(path).map_err(|e| StoreError::io(path, e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| StoreError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?
            .clone();

        let idx_id = require_column(&headers, "id", path)?;
        let idx_patient = require_column(&headers, "patient_id", path)?;
        let idx_date = require_column(&headers, "test_date", path)?;
        let idx_lab_type = header_index(&headers, "lab_type");
        let idx_panel = header_index(&headers, "panel_type");
        let idx_provider = header_index(&headers, "lab_provider");
        let idx_notes = header_index(&headers, "notes");

        // Every non-metadata column is a biomarker value column.
        let marker_columns: Vec<(usize, String)> = headers
            .iter()
            .enumerate()
            .filter(|(_, name)| !LAB_META_COLUMNS.contains(name))
            .map(|(idx, name)| (idx, name.to_string()))
            .collect();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| StoreError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?;

            let Some(id) = get_string(&row, Some(idx_id)) else {
                // A row without an id is unaddressable; skip it.
                continue;
            };
            let Some(patient_id) = get_string(&row, Some(idx_patient)) else {
                continue;
            };
            let date_raw = get_string(&row, Some(idx_date)).unwrap_or_default();
            let test_date = NaiveDate::parse_from_str(&date_raw, "%Y-%m-%d").map_err(|_| {
                StoreError::InvalidDate {
                    path: path.clone(),
                    value: date_raw.clone(),
                }
            })?;

            let mut values = BTreeMap::new();
            for (idx, key) in &marker_columns {
                if let Some(value) = get_string(&row, Some(*idx)) {
                    values.insert(key.clone(), value);
                }
            }

            records.push(LabRecord {
                id,
                patient_id,
                test_date,
                lab_type: get_string(&row, idx_lab_type),
                panel_type: get_string(&row, idx_panel),
                lab_provider: get_string(&row, idx_provider),
                notes: get_string(&row, idx_notes),
                values,
            });
        }

        tracing::debug!(path = %path.display(), rows = records.len(), "read lab records");
        Ok(records)
    }

    fn read_ranges(&self) -> Result<Vec<ReferenceRange>, StoreError> {
        let path = &self.ranges_path;
        let bytes = std::fs::read(path).map_err(|e| StoreError::io(path, e))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());
        let headers = reader
            .headers()
            .map_err(|e| StoreError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?
            .clone();

        let idx_biomarker = require_column(&headers, "biomarker", path)?;
        let idx_gender = require_column(&headers, "gender", path)?;
        let idx_ref_low = header_index(&headers, "ref_low");
        let idx_ref_high = header_index(&headers, "ref_high");
        let idx_legacy_low = header_index(&headers, "reference_low");
        let idx_legacy_high = header_index(&headers, "reference_high");
        let idx_opt_low = header_index(&headers, "optimal_low");
        let idx_opt_high = header_index(&headers, "optimal_high");
        let idx_unit = header_index(&headers, "unit");

        let mut ranges = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| StoreError::Csv {
                path: path.clone(),
                message: e.to_string(),
            })?;

            let Some(biomarker) = get_string(&row, Some(idx_biomarker)) else {
                continue;
            };
            let gender_raw = get_string(&row, Some(idx_gender)).unwrap_or_default();
            let gender: Gender =
                gender_raw
                    .parse()
                    .map_err(|_| StoreError::InvalidGender {
                        path: path.clone(),
                        value: gender_raw.clone(),
                    })?;

            ranges.push(ReferenceRange {
                biomarker,
                gender,
                ref_low: get_f64(&row, idx_ref_low, "ref_low", path)?,
                ref_high: get_f64(&row, idx_ref_high, "ref_high", path)?,
                reference_low: get_f64(&row, idx_legacy_low, "reference_low", path)?,
                reference_high: get_f64(&row, idx_legacy_high, "reference_high", path)?,
                optimal_low: get_f64(&row, idx_opt_low, "optimal_low", path)?,
                optimal_high: get_f64(&row, idx_opt_high, "optimal_high", path)?,
                unit: get_string(&row, idx_unit),
            });
        }

        tracing::debug!(path = %path.display(), rows = ranges.len(), "read reference ranges");
        Ok(ranges)
    }
}

impl LabStore for CsvStore {
    fn lab_by_id(&self, lab_id: &str) -> Result<Option<LabRecord>, StoreError> {
        let labs = self.read_labs()?;
        Ok(labs.into_iter().find(|lab| lab.id == lab_id))
    }

    fn labs_for_patient(&self, patient_id: &str) -> Result<Vec<LabRecord>, StoreError> {
        let labs = self.read_labs()?;
        Ok(labs
            .into_iter()
            .filter(|lab| lab.patient_id == patient_id)
            .collect())
    }

    fn reference_ranges(&self) -> Result<Vec<ReferenceRange>, StoreError> {
        self.read_ranges()
    }
}

fn header_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn require_column(
    headers: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<usize, StoreError> {
    header_index(headers, name).ok_or_else(|| StoreError::MissingColumn {
        path: path.to_path_buf(),
        column: name.to_string(),
    })
}

fn get_string(row: &csv::StringRecord, idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn get_f64(
    row: &csv::StringRecord,
    idx: Option<usize>,
    column: &str,
    path: &Path,
) -> Result<Option<f64>, StoreError> {
    match get_string(row, idx) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| StoreError::InvalidNumber {
                path: path.to_path_buf(),
                column: column.to_string(),
                value: raw,
            }),
    }
}
