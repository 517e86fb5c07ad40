use rollsig_core::JobError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors reading prices or writing metrics.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Input CSV not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Input CSV is empty")]
    Empty,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Non-numeric cell; `row` is the 1-based data row.
    #[error("Invalid number {value:?} in column {column} at row {row}")]
    Parse {
        row: usize,
        column: String,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StorageError> for JobError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Self::Io(e),
            StorageError::Json(e) => Self::Io(e.into()),
            other => Self::Input(other.to_string()),
        }
    }
}
