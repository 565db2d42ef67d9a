pub mod csv_store;
pub mod error;
pub mod memory;

pub use csv_store::CsvStore;
pub use error::StoreError;
pub use memory::MemoryStore;

use biomark_model::{LabRecord, ReferenceRange};

/// Read-only access to the lab records and reference ranges tables.
///
/// Both tables are owned externally; this side never writes. Implementations
/// must not cache across calls — every query recomputes from a fresh read.
pub trait LabStore {
    /// Fetch one lab draw by id. `Ok(None)` when no row matches.
    fn lab_by_id(&self, lab_id: &str) -> Result<Option<LabRecord>, StoreError>;

    /// Fetch all lab draws for a patient, in no particular order.
    fn labs_for_patient(&self, patient_id: &str) -> Result<Vec<LabRecord>, StoreError>;

    /// Fetch the full reference-range table. An empty table is valid.
    fn reference_ranges(&self) -> Result<Vec<ReferenceRange>, StoreError>;
}
