#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error(
        "duplicate biomarker key '{key}' (first in category '{first_category}', again in '{second_category}')"
    )]
    DuplicateKey {
        key: String,
        first_category: String,
        second_category: String,
    },
}
