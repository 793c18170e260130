//! Explicit state snapshot for one upload attempt.
//!
//! The upload flow moves through discrete phases instead of mutating shared
//! flags: idle, processing, then either succeeded or failed. Each transition
//! produces a new snapshot; callers pass the snapshot through function
//! boundaries explicitly.

use crate::error::UuidCsvError;
use crate::record::{Record, Stats};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum UploadState {
    #[default]
    Idle,
    Processing {
        file_name: String,
    },
    Succeeded {
        file_name: String,
        records: Vec<Record>,
        stats: Stats,
    },
    Failed {
        file_name: String,
        message: String,
        /// Non-empty only when the error preserves records (count failures).
        records: Vec<Record>,
    },
}

impl UploadState {
    pub fn processing(file_name: impl Into<String>) -> Self {
        UploadState::Processing {
            file_name: file_name.into(),
        }
    }

    /// Transition from `Processing` to `Succeeded`.
    pub fn succeed(self, records: Vec<Record>, stats: Stats) -> Self {
        UploadState::Succeeded {
            file_name: self.into_file_name(),
            records,
            stats,
        }
    }

    /// Transition from `Processing` to `Failed`.
    ///
    /// Records are kept only for errors that preserve them, so a retry after
    /// any other failure starts clean.
    pub fn fail(self, error: &UuidCsvError, records: Vec<Record>) -> Self {
        let records = if error.preserves_records() {
            records
        } else {
            Vec::new()
        };
        UploadState::Failed {
            file_name: self.into_file_name(),
            message: error.to_string(),
            records,
        }
    }

    pub fn file_name(&self) -> Option<&str> {
        match self {
            UploadState::Idle => None,
            UploadState::Processing { file_name }
            | UploadState::Succeeded { file_name, .. }
            | UploadState::Failed { file_name, .. } => Some(file_name),
        }
    }

    pub fn records(&self) -> &[Record] {
        match self {
            UploadState::Succeeded { records, .. } | UploadState::Failed { records, .. } => records,
            _ => &[],
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, UploadState::Failed { .. })
    }

    fn into_file_name(self) -> String {
        match self {
            UploadState::Idle => String::new(),
            UploadState::Processing { file_name }
            | UploadState::Succeeded { file_name, .. }
            | UploadState::Failed { file_name, .. } => file_name,
        }
    }
}
