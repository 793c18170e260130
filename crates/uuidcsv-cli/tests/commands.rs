//! End-to-end tests for the check command.

use std::path::{Path, PathBuf};
use std::time::Duration;

use uuidcsv_cli::cli::CheckArgs;
use uuidcsv_cli::commands::{run_check_with_backend, write_export};
use uuidcsv_model::{Record, UploadState, UuidCsvError};
use uuidcsv_submit::{Backend, BackendResponse, Payload, SimulatedBackend};

const UUIDS: [&str; 5] = [
    "a1b2c3d4-e5f6-4a2b-8c3d-4e5f6a7b8c9d",
    "b3f5c9a2-8d4e-4f6a-9b1c-2e7d8a5f0c3b",
    "c4d5e6f7-a8b9-1c2d-ae3f-5a6b7c8d9e0f",
    "d5e6f7a8-b9c0-2d3e-bf4a-6b7c8d9e0f1a",
    "e6f7a8b9-c0d1-3e4f-8a5b-7c8d9e0f1a2b",
];

fn check_args(file: PathBuf) -> CheckArgs {
    CheckArgs {
        file,
        records: false,
        report: None,
        export: None,
        submit: false,
        fail_on_invalid: false,
    }
}

fn backend() -> SimulatedBackend {
    SimulatedBackend::new().with_delay(Duration::ZERO)
}

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

struct FailingBackend;

impl Backend for FailingBackend {
    fn process_uuids(&self, _payload: &Payload) -> uuidcsv_model::Result<BackendResponse> {
        Err(UuidCsvError::Backend("connection refused".to_string()))
    }
}

#[test]
fn test_check_succeeds_with_header() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.csv", &format!("id\n{}\n", UUIDS.join("\n")));

    let result = run_check_with_backend(&check_args(file), &backend()).expect("run check");
    assert!(!result.has_errors);
    match &result.state {
        UploadState::Succeeded {
            file_name,
            records,
            stats,
        } => {
            assert_eq!(file_name, "data.csv");
            assert_eq!(records.len(), 5);
            assert_eq!(records[0].position, 2);
            assert_eq!(stats.valid, 5);
            assert_eq!(stats.percentage, 100);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn test_check_counts_invalid_records_without_failing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!("id\n{}\nnot-a-uuid\n", UUIDS[..4].join("\n"));
    let file = write_file(dir.path(), "data.csv", &content);

    let result = run_check_with_backend(&check_args(file), &backend()).expect("run check");
    assert!(!result.has_errors);
    match &result.state {
        UploadState::Succeeded { stats, .. } => {
            assert_eq!(stats.total, 5);
            assert_eq!(stats.valid, 4);
            assert_eq!(stats.invalid, 1);
            assert_eq!(stats.percentage, 80);
        }
        other => panic!("expected success, got {other:?}"),
    }
}

#[test]
fn test_fail_on_invalid_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!("id\n{}\nnot-a-uuid\n", UUIDS[..4].join("\n"));
    let file = write_file(dir.path(), "data.csv", &content);

    let mut args = check_args(file);
    args.fail_on_invalid = true;
    let result = run_check_with_backend(&args, &backend()).expect("run check");
    assert!(result.has_errors);
    assert!(!result.state.is_failed());
}

#[test]
fn test_too_few_records_preserves_parsed_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(
        dir.path(),
        "data.csv",
        &format!("id\n{}\n", UUIDS[..4].join("\n")),
    );

    let result = run_check_with_backend(&check_args(file), &backend()).expect("run check");
    assert!(result.has_errors);
    match &result.state {
        UploadState::Failed {
            message, records, ..
        } => {
            assert_eq!(records.len(), 4);
            assert!(message.contains('4'));
        }
        other => panic!("expected failure, got {other:?}"),
    }
}

#[test]
fn test_wrong_extension_fails_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.txt", &UUIDS.join("\n"));

    let result = run_check_with_backend(&check_args(file), &backend()).expect("run check");
    assert!(result.has_errors);
    assert!(result.state.is_failed());
    assert!(result.state.records().is_empty());
}

#[test]
fn test_empty_file_fails_clean() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.csv", "\n  \n");

    let result = run_check_with_backend(&check_args(file), &backend()).expect("run check");
    assert!(result.has_errors);
    assert!(result.state.records().is_empty());
}

#[test]
fn test_reports_are_written() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.csv", &format!("id\n{}\n", UUIDS.join("\n")));

    let mut args = check_args(file);
    args.report = Some(dir.path().join("reports"));
    let result = run_check_with_backend(&args, &backend()).expect("run check");

    let json = result.report_json.expect("json report path");
    let csv = result.report_csv.expect("csv report path");
    assert!(json.exists());
    assert!(csv.exists());
}

#[test]
fn test_export_writes_valid_uuids() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!("id\n{}\nnot-a-uuid\n", UUIDS[..4].join("\n"));
    let file = write_file(dir.path(), "data.csv", &content);

    let mut args = check_args(file);
    let export = dir.path().join("valid.txt");
    args.export = Some(export.clone());
    let result = run_check_with_backend(&args, &backend()).expect("run check");
    assert_eq!(result.export.as_deref(), Some(export.as_path()));

    let text = std::fs::read_to_string(&export).expect("read export");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], UUIDS[0]);
    assert!(!text.contains("not-a-uuid"));
}

#[test]
fn test_export_helper_orders_and_joins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let records = vec![
        Record {
            position: 1,
            value: UUIDS[0].to_string(),
            is_valid: true,
        },
        Record {
            position: 2,
            value: "nope".to_string(),
            is_valid: false,
        },
        Record {
            position: 3,
            value: UUIDS[1].to_string(),
            is_valid: true,
        },
    ];
    let path = dir.path().join("out.txt");
    write_export(&path, &records).expect("write export");
    let text = std::fs::read_to_string(&path).expect("read export");
    assert_eq!(text, format!("{}\n{}\n", UUIDS[0], UUIDS[1]));
}

#[test]
fn test_submit_reports_processed_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let content = format!("id\n{}\nnot-a-uuid\n", UUIDS[..4].join("\n"));
    let file = write_file(dir.path(), "data.csv", &content);

    let mut args = check_args(file);
    args.submit = true;
    let result = run_check_with_backend(&args, &backend()).expect("run check");
    let response = result.submission.expect("submission response");
    assert!(response.success);
    assert_eq!(response.processed_count, 4);
}

#[test]
fn test_backend_failure_resets_state() {
    let dir = tempfile::tempdir().expect("tempdir");
    let file = write_file(dir.path(), "data.csv", &format!("id\n{}\n", UUIDS.join("\n")));

    let mut args = check_args(file);
    args.submit = true;
    let result = run_check_with_backend(&args, &FailingBackend).expect("run check");
    assert!(result.has_errors);
    match &result.state {
        UploadState::Failed {
            message, records, ..
        } => {
            assert!(message.contains("connection refused"));
            assert!(records.is_empty());
        }
        other => panic!("expected failure, got {other:?}"),
    }
}
