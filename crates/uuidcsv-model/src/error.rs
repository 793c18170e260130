use std::path::PathBuf;

use thiserror::Error;

use crate::limits::{MAX_RECORDS, MIN_RECORDS};

#[derive(Debug, Error)]
pub enum UuidCsvError {
    #[error("not a CSV file: {}", .path.display())]
    InvalidFileType { path: PathBuf },
    #[error("file is empty or contains no data lines")]
    EmptyInput,
    #[error("file has only {count} record(s), the minimum is {}", MIN_RECORDS)]
    TooFewRecords { count: usize },
    #[error("file has {count} records, the maximum is {}", MAX_RECORDS)]
    TooManyRecords { count: usize },
    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),
    #[error("backend submission failed: {0}")]
    Backend(String),
}

impl UuidCsvError {
    /// Record-count failures keep the parsed records visible so the user can
    /// see why the file was rejected; every other error clears them.
    pub fn preserves_records(&self) -> bool {
        matches!(
            self,
            UuidCsvError::TooFewRecords { .. } | UuidCsvError::TooManyRecords { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UuidCsvError>;
