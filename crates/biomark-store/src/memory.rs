use biomark_model::{LabRecord, ReferenceRange};

use crate::LabStore;
use crate::error::StoreError;

/// In-memory store for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    labs: Vec<LabRecord>,
    ranges: Vec<ReferenceRange>,
}

impl MemoryStore {
    pub fn new(labs: Vec<LabRecord>, ranges: Vec<ReferenceRange>) -> Self {
        Self { labs, ranges }
    }
}

impl LabStore for MemoryStore {
    fn lab_by_id(&self, lab_id: &str) -> Result<Option<LabRecord>, StoreError> {
        Ok(self.labs.iter().find(|lab| lab.id == lab_id).cloned())
    }

    fn labs_for_patient(&self, patient_id: &str) -> Result<Vec<LabRecord>, StoreError> {
        Ok(self
            .labs
            .iter()
            .filter(|lab| lab.patient_id == patient_id)
            .cloned()
            .collect())
    }

    fn reference_ranges(&self) -> Result<Vec<ReferenceRange>, StoreError> {
        Ok(self.ranges.clone())
    }
}
