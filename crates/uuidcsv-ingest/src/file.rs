//! File-type gate and file reading.

use std::ffi::OsStr;
use std::path::Path;

use tracing::debug;

use uuidcsv_model::{CSV_EXTENSION, Result, UuidCsvError};

/// Reject files whose name does not end in `.csv` (case-insensitive).
///
/// The check runs before any read, so a wrong file type never reaches the
/// parser.
pub fn check_file_type(path: &Path) -> Result<()> {
    let is_csv = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(CSV_EXTENSION));
    if !is_csv {
        return Err(UuidCsvError::InvalidFileType {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Read the file into decoded text, stripping a leading UTF-8 BOM.
pub fn read_file_to_text(path: &Path) -> Result<String> {
    check_file_type(path)?;
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "read upload file");
    Ok(strip_bom(text))
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}
