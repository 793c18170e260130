//! Validation limits for uploaded files.

/// Minimum number of data records a file must contain.
pub const MIN_RECORDS: usize = 5;

/// Maximum number of data records a file may contain.
pub const MAX_RECORDS: usize = 1000;

/// Accepted file extension, compared case-insensitively.
pub const CSV_EXTENSION: &str = "csv";
