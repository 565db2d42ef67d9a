use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("missing required column '{column}' in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("invalid date '{value}' in {path} (expected YYYY-MM-DD)")]
    InvalidDate { path: PathBuf, value: String },

    #[error("invalid number '{value}' in column '{column}' of {path}")]
    InvalidNumber {
        path: PathBuf,
        column: String,
        value: String,
    },

    #[error("invalid gender '{value}' in {path}")]
    InvalidGender { path: PathBuf, value: String },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
