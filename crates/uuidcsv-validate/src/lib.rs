mod format;
mod report;

pub use format::format_check;
pub use report::{
    RecordJson, ValidationReportPayload, write_validation_report_csv,
    write_validation_report_json,
};

use uuidcsv_model::{MAX_RECORDS, MIN_RECORDS, Record, Result, Stats, UuidCsvError};

/// Check that the record count is within the accepted bounds.
pub fn validate_size(records: &[Record]) -> Result<()> {
    let count = records.len();
    if count < MIN_RECORDS {
        return Err(UuidCsvError::TooFewRecords { count });
    }
    if count > MAX_RECORDS {
        return Err(UuidCsvError::TooManyRecords { count });
    }
    Ok(())
}

/// Aggregate validity counts and the rounded valid percentage.
pub fn compute_stats(records: &[Record]) -> Stats {
    let total = records.len();
    let valid = records.iter().filter(|record| record.is_valid).count();
    let invalid = total - valid;
    let percentage = if total == 0 {
        0
    } else {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = (valid as f64 / total as f64 * 100.0).round() as u32;
        rounded
    };
    Stats {
        total,
        valid,
        invalid,
        percentage,
    }
}

/// Values of the valid records, in original file order.
pub fn filter_valid(records: &[Record]) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.is_valid)
        .map(|record| record.value.clone())
        .collect()
}
