use std::path::PathBuf;

use uuidcsv_model::UploadState;
use uuidcsv_submit::BackendResponse;

/// Snapshot of one `check` run, passed from the command to the summary.
#[derive(Debug, Default)]
pub struct CheckResult {
    pub state: UploadState,
    pub report_json: Option<PathBuf>,
    pub report_csv: Option<PathBuf>,
    pub export: Option<PathBuf>,
    pub submission: Option<BackendResponse>,
    pub has_errors: bool,
}

impl CheckResult {
    pub fn failed(state: UploadState) -> Self {
        CheckResult {
            state,
            has_errors: true,
            ..CheckResult::default()
        }
    }
}
