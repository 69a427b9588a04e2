//! Import orchestration: chunk loop, run coordination, and reporting.
//!
//! One run flows as: [`RunCoordinator::execute`] → [`ChunkOrchestrator`]
//! loop → {reader `next()` up to chunk size times → transform each →
//! writer `write`} → repeat until the source is exhausted → [`RunReport`].

pub mod chunk;
pub mod coordinator;
pub mod report;

pub use chunk::{ChunkOrchestrator, ChunkOutcome, DEFAULT_CHUNK_SIZE};
pub use coordinator::{Pairing, RunCoordinator};
pub use report::{RunCounts, RunId, RunReport, RunStatus};
