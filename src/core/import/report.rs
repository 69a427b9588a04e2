//! Run reporting
//!
//! This module defines the run identifier, counters, terminal status, and the
//! report returned to the caller after a run finishes.

use serde::Serialize;
use std::fmt;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier for one import run
///
/// Time-derived (UTC timestamp) with a random suffix so that concurrent
/// invocations of the same or different pairings cannot collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunId(String);

impl RunId {
    /// Mint a new run id
    pub fn new() -> Self {
        let timestamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", timestamp, &suffix[..8]))
    }

    /// Get the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Terminal status of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RunStatus {
    /// The source was exhausted and every non-empty chunk was written
    Completed,
    /// An open or write failure aborted the run
    Failed,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Completed => f.write_str("COMPLETED"),
            RunStatus::Failed => f.write_str("FAILED"),
        }
    }
}

/// Counters accumulated while a run executes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunCounts {
    /// Records pulled from the source
    pub read: u64,

    /// Records persisted by the writer
    pub written: u64,

    /// Malformed source lines skipped by the reader
    pub skipped: u64,
}

/// Report describing one finished run
///
/// Returned to the caller of [`RunCoordinator::execute`] and printed by the
/// CLI as the run descriptor.
///
/// [`RunCoordinator::execute`]: crate::core::import::RunCoordinator::execute
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Unique run identifier
    pub id: RunId,

    /// Name of the reader/writer pairing that executed
    pub pairing: String,

    /// Terminal status
    pub status: RunStatus,

    /// Accumulated counters
    pub counts: RunCounts,

    /// Wall-clock duration of the run
    #[serde(serialize_with = "serialize_duration_ms", rename = "duration_ms")]
    pub duration: Duration,

    /// Failure message when `status` is `Failed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

fn serialize_duration_ms<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u128(duration.as_millis())
}

impl RunReport {
    /// Check whether the run completed without a fatal error
    pub fn is_successful(&self) -> bool {
        self.status == RunStatus::Completed
    }

    /// Log the run summary
    pub fn log_summary(&self) {
        tracing::info!(
            run_id = %self.id,
            pairing = %self.pairing,
            status = %self.status,
            read = self.counts.read,
            written = self.counts.written,
            skipped = self.counts.skipped,
            duration_ms = self.duration.as_millis() as u64,
            "Import run finished"
        );

        if let Some(error) = &self.error {
            tracing::error!(run_id = %self.id, error = %error, "Import run failed");
        }
    }
}
