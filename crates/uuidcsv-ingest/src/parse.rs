//! Text-to-record parsing.

use tracing::debug;

use uuidcsv_model::{Record, Result, UuidCsvError};
use uuidcsv_validate::format_check;

/// Parse decoded file text into an ordered record list.
///
/// Lines that are empty after trimming are dropped. If the first remaining
/// line does not pass the format check it is treated as a header and
/// excluded from the data; this is a heuristic, not a CSV parser - the whole
/// line is one candidate UUID, with no quoting or delimiter handling. A
/// non-UUID first line is therefore always a header, never an invalid row.
///
/// Positions number the lines of the original file, so they start at 2 when
/// a header was stripped.
pub fn parse(text: &str) -> Result<Vec<Record>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return Err(UuidCsvError::EmptyInput);
    }

    let has_header = !format_check(lines[0]);
    let data_lines = if has_header { &lines[1..] } else { &lines[..] };
    let first_position = if has_header { 2 } else { 1 };

    let records: Vec<Record> = data_lines
        .iter()
        .enumerate()
        .map(|(idx, line)| Record {
            position: first_position + idx,
            value: (*line).to_string(),
            is_valid: format_check(line),
        })
        .collect();
    debug!(
        lines = lines.len(),
        records = records.len(),
        has_header,
        "parsed upload text"
    );
    Ok(records)
}
