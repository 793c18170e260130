//! Backend submission.
//!
//! The wire types mirror the backend contract (camelCase field names). The
//! default backend is simulated: it logs the payload, waits a fixed
//! artificial delay, and echoes a success response. A real client slots in
//! behind the [`Backend`] trait.

use std::thread;
use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use uuidcsv_model::{Record, Result, UuidCsvError};
use uuidcsv_validate::filter_valid;

/// Delay applied by the simulated backend unless overridden.
pub const DEFAULT_SIMULATED_DELAY: Duration = Duration::from_millis(1500);

/// Outbound request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub file_name: String,
    pub total_records: usize,
    #[serde(rename = "validUUIDs")]
    pub valid_uuids: Vec<String>,
    /// ISO-8601 submission time.
    pub timestamp: String,
}

impl Payload {
    /// Build a payload from the current record list. Only valid UUIDs are
    /// submitted; `total_records` still counts every parsed record.
    pub fn from_records(file_name: impl Into<String>, records: &[Record]) -> Self {
        Payload {
            file_name: file_name.into(),
            total_records: records.len(),
            valid_uuids: filter_valid(records),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Expected response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendResponse {
    pub success: bool,
    pub processed_count: usize,
    pub timestamp: String,
}

/// Seam for the outbound call. No retry, no timeout, no cancellation.
pub trait Backend {
    fn process_uuids(&self, payload: &Payload) -> Result<BackendResponse>;
}

/// Backend stand-in: fixed artificial delay, unconditional success.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            delay: DEFAULT_SIMULATED_DELAY,
        }
    }

    /// Override the artificial delay (tests use zero).
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for SimulatedBackend {
    fn process_uuids(&self, payload: &Payload) -> Result<BackendResponse> {
        let body = serde_json::to_string(payload)
            .map_err(|error| UuidCsvError::Backend(error.to_string()))?;
        debug!(body = %body, "submission payload");
        info!(
            file_name = %payload.file_name,
            valid = payload.valid_uuids.len(),
            "submitting valid UUIDs to backend (simulated)"
        );
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        Ok(BackendResponse {
            success: true,
            processed_count: payload.valid_uuids.len(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
