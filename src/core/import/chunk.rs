//! Chunk orchestration loop
//!
//! The orchestrator drives reader → transform → writer in bounded chunks.
//! Each iteration pulls up to `chunk_size` records, transforms each one, and
//! hands the buffer to exactly one `write` call. A chunk is built once and
//! never split or merged afterwards; its commit guarantee is whatever the
//! store client gives that single batched write, since the orchestrator
//! performs no transaction management of its own.

use crate::adapters::sink::BatchWriter;
use crate::adapters::source::RecordReader;
use crate::core::import::report::{RunCounts, RunStatus};
use crate::core::transform::transform;
use crate::domain::{CaravanError, Result};

/// Default number of records per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 100;

/// Outcome of one orchestrated run
#[derive(Debug)]
pub struct ChunkOutcome {
    /// Accumulated counters; populated even when the run fails partway
    pub counts: RunCounts,

    /// Terminal status
    pub status: RunStatus,

    /// The fatal error when `status` is `Failed`
    pub error: Option<CaravanError>,
}

/// Chunk orchestrator
///
/// State machine `Running -> {Completed, Failed}`. The run completes when the
/// reader reports end-of-stream and the pending buffer has been flushed; it
/// fails immediately on an open failure or a write failure. Parse skips are
/// absorbed inside the reader and only surface through the skip counter.
pub struct ChunkOrchestrator {
    chunk_size: usize,
}

impl ChunkOrchestrator {
    /// Create an orchestrator with the given chunk size (>= 1)
    pub fn new(chunk_size: usize) -> Self {
        debug_assert!(chunk_size >= 1);
        Self { chunk_size }
    }

    /// Execute one run over the given reader/writer pair
    ///
    /// `close()` runs on every exit path, including after a fatal error;
    /// close failures are logged inside the reader and never alter the
    /// already-determined status.
    pub async fn execute(
        &self,
        reader: &mut dyn RecordReader,
        writer: &dyn BatchWriter,
    ) -> ChunkOutcome {
        let mut counts = RunCounts::default();

        if let Err(e) = reader.open().await {
            tracing::error!(origin = %reader.origin(), error = %e, "Failed to open source");
            return ChunkOutcome {
                counts,
                status: RunStatus::Failed,
                error: Some(e),
            };
        }

        let result = self.drive(reader, writer, &mut counts).await;

        reader.close().await;
        counts.skipped = reader.records_skipped();

        match result {
            Ok(()) => ChunkOutcome {
                counts,
                status: RunStatus::Completed,
                error: None,
            },
            Err(e) => {
                tracing::error!(error = %e, "Import run aborted");
                ChunkOutcome {
                    counts,
                    status: RunStatus::Failed,
                    error: Some(e),
                }
            }
        }
    }

    /// The chunk loop proper, separated so `execute` can close the reader on
    /// every exit path
    async fn drive(
        &self,
        reader: &mut dyn RecordReader,
        writer: &dyn BatchWriter,
        counts: &mut RunCounts,
    ) -> Result<()> {
        let mut exhausted = false;
        let mut chunk_index: u64 = 0;

        while !exhausted {
            let mut chunk = Vec::with_capacity(self.chunk_size);

            while chunk.len() < self.chunk_size {
                match reader.next().await? {
                    Some(record) => {
                        counts.read += 1;
                        chunk.push(transform(record));
                    }
                    None => {
                        exhausted = true;
                        break;
                    }
                }
            }

            if !chunk.is_empty() {
                writer.write(&chunk).await?;
                counts.written += chunk.len() as u64;
                chunk_index += 1;
                tracing::debug!(
                    chunk = chunk_index,
                    size = chunk.len(),
                    total_written = counts.written,
                    "Flushed chunk"
                );
            }
        }

        Ok(())
    }
}
