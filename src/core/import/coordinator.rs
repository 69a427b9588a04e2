//! Run coordinator
//!
//! The coordinator receives an already-resolved reader/writer pairing (mode
//! resolution lives in the adapter factory), mints a unique run id, drives
//! the chunk orchestrator synchronously to completion, and returns the run
//! report. It keeps no global run registry; concurrent invocations are safe
//! and are not fenced against each other. Destination exclusivity, if
//! required, is the caller's responsibility.

use crate::adapters::sink::BatchWriter;
use crate::adapters::source::RecordReader;
use crate::core::import::chunk::ChunkOrchestrator;
use crate::core::import::report::{RunId, RunReport};
use std::sync::Arc;
use std::time::Instant;

/// A resolved reader/writer pairing ready to execute
pub struct Pairing {
    /// Pairing name surfaced in logs and the run report (the mode label)
    pub name: String,

    /// Record source
    pub reader: Box<dyn RecordReader>,

    /// Chunk sink
    pub writer: Arc<dyn BatchWriter>,
}

impl Pairing {
    /// Create a pairing
    pub fn new(
        name: impl Into<String>,
        reader: Box<dyn RecordReader>,
        writer: Arc<dyn BatchWriter>,
    ) -> Self {
        Self {
            name: name.into(),
            reader,
            writer,
        }
    }
}

/// Run coordinator
pub struct RunCoordinator {
    chunk_size: usize,
}

impl RunCoordinator {
    /// Create a coordinator with the configured chunk size
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Execute one import run to completion
    ///
    /// Always returns a report; fatal errors surface as a `Failed` status
    /// with the error message attached rather than as an `Err`.
    pub async fn execute(&self, mut pairing: Pairing) -> RunReport {
        let id = RunId::new();
        let start = Instant::now();

        tracing::info!(
            run_id = %id,
            pairing = %pairing.name,
            reader = %pairing.reader.origin(),
            writer = %pairing.writer.name(),
            chunk_size = self.chunk_size,
            "Starting import run"
        );

        let outcome = ChunkOrchestrator::new(self.chunk_size)
            .execute(pairing.reader.as_mut(), pairing.writer.as_ref())
            .await;

        let report = RunReport {
            id,
            pairing: pairing.name,
            status: outcome.status,
            counts: outcome.counts,
            duration: start.elapsed(),
            error: outcome.error.map(|e| e.to_string()),
        };

        report.log_summary();
        report
    }
}
