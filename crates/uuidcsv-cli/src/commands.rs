use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use uuidcsv_ingest::{parse, read_file_to_text};
use uuidcsv_model::{CSV_EXTENSION, MAX_RECORDS, MIN_RECORDS, Record, UploadState};
use uuidcsv_submit::{Backend, Payload, SimulatedBackend};
use uuidcsv_validate::{
    compute_stats, filter_valid, validate_size, write_validation_report_csv,
    write_validation_report_json,
};

use crate::cli::CheckArgs;
use crate::summary::apply_table_style;
use crate::types::CheckResult;

/// List the validation rules and limits.
pub fn run_rules() {
    let mut table = Table::new();
    table.set_header(vec!["Rule", "Value"]);
    apply_table_style(&mut table);
    table.add_row(vec!["Accepted file type".to_string(), format!(".{CSV_EXTENSION}")]);
    table.add_row(vec!["Minimum records".to_string(), MIN_RECORDS.to_string()]);
    table.add_row(vec!["Maximum records".to_string(), MAX_RECORDS.to_string()]);
    table.add_row(vec![
        "UUID format".to_string(),
        "8-4-4-4-12 hex groups, version 1-5, variant 8/9/a/b".to_string(),
    ]);
    println!("{table}");
}

/// Run the upload flow against the default (simulated) backend.
pub fn run_check(args: &CheckArgs) -> Result<CheckResult> {
    run_check_with_backend(args, &SimulatedBackend::new())
}

/// Run the upload flow: gate, read, parse, size-check, then the optional
/// report, export, and submission steps.
///
/// Pipeline errors land in the returned snapshot's `Failed` state rather
/// than in `Err`, so the summary can still show preserved records for
/// record-count failures. `Err` is reserved for artifact-writing problems.
pub fn run_check_with_backend(args: &CheckArgs, backend: &dyn Backend) -> Result<CheckResult> {
    let file_name = display_name(&args.file);
    let span = info_span!("check", file = %args.file.display());
    let _guard = span.enter();
    let state = UploadState::processing(file_name.as_str());

    let records = match read_file_to_text(&args.file).and_then(|text| parse(&text)) {
        Ok(records) => records,
        Err(error) => return Ok(CheckResult::failed(state.fail(&error, Vec::new()))),
    };
    let stats = compute_stats(&records);
    if let Err(error) = validate_size(&records) {
        warn!(count = records.len(), "record count outside accepted bounds");
        return Ok(CheckResult::failed(state.fail(&error, records)));
    }
    info!(
        total = stats.total,
        valid = stats.valid,
        invalid = stats.invalid,
        percentage = stats.percentage,
        "file processed"
    );

    let mut result = CheckResult {
        state: state.succeed(records, stats),
        ..CheckResult::default()
    };

    if let Some(dir) = &args.report {
        result.report_json = Some(write_validation_report_json(
            dir,
            &file_name,
            result.state.records(),
            stats,
        )?);
        result.report_csv = Some(write_validation_report_csv(dir, result.state.records())?);
    }

    if let Some(path) = &args.export {
        write_export(path, result.state.records())?;
        if path != Path::new("-") {
            result.export = Some(path.clone());
        }
    }

    if args.submit {
        let payload = Payload::from_records(file_name.clone(), result.state.records());
        match backend.process_uuids(&payload) {
            Ok(response) => result.submission = Some(response),
            Err(error) => {
                // A backend failure clears the run, like any non-count error.
                let state = UploadState::processing(file_name).fail(&error, Vec::new());
                return Ok(CheckResult::failed(state));
            }
        }
    }

    if args.fail_on_invalid && stats.invalid > 0 {
        result.has_errors = true;
    }
    Ok(result)
}

/// Write the valid UUIDs, newline-joined, to `path` or stdout for `-`.
pub fn write_export(path: &Path, records: &[Record]) -> Result<()> {
    let joined = filter_valid(records).join("\n");
    if path == Path::new("-") {
        println!("{joined}");
        return Ok(());
    }
    std::fs::write(path, format!("{joined}\n"))
        .with_context(|| format!("write export: {}", path.display()))?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
