//! Validation report writers.
//!
//! Two artifacts can be written next to each other in a report directory:
//! `validation_report.json` (schema-tagged, machine-readable) and
//! `validation_report.csv` (one row per record).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;

use uuidcsv_model::{Record, Stats};

const REPORT_SCHEMA: &str = "uuidcsv.validation-report";
const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
pub struct ValidationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub file_name: String,
    pub stats: Stats,
    pub records: Vec<RecordJson>,
}

#[derive(Debug, Serialize)]
pub struct RecordJson {
    pub line: usize,
    pub uuid: String,
    pub valid: bool,
}

pub fn write_validation_report_json(
    output_dir: &Path,
    file_name: &str,
    records: &[Record],
    stats: Stats,
) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create report dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("validation_report.json");
    let payload = ValidationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        file_name: file_name.to_string(),
        stats,
        records: records
            .iter()
            .map(|record| RecordJson {
                line: record.position,
                uuid: record.value.clone(),
                valid: record.is_valid,
            })
            .collect(),
    };
    let json = serde_json::to_string_pretty(&payload)?;
    std::fs::write(&output_path, format!("{json}\n"))
        .with_context(|| format!("write report: {}", output_path.display()))?;
    Ok(output_path)
}

pub fn write_validation_report_csv(output_dir: &Path, records: &[Record]) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create report dir: {}", output_dir.display()))?;
    let output_path = output_dir.join("validation_report.csv");
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("write report: {}", output_path.display()))?;
    writer.write_record(["line", "uuid", "valid"])?;
    for record in records {
        writer.write_record([
            record.position.to_string(),
            record.value.clone(),
            record.is_valid.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(output_path)
}
