//! Core business logic for Caravan.
//!
//! # Modules
//!
//! - [`parse`] - the single CSV line parser shared by every source variant
//! - [`transform`] - per-record normalization
//! - [`import`] - chunk orchestration, run coordination, and reporting
//!
//! # Import Workflow
//!
//! 1. **Resolve**: the adapter factory builds a reader/writer pairing for
//!    the configured mode
//! 2. **Open**: the reader acquires its file handle or S3 object
//! 3. **Chunk**: up to `chunk_size` records are pulled, transformed, and
//!    flushed per writer call
//! 4. **Finish**: the reader is closed on every exit path and a run report
//!    with read/written/skipped counts is returned

pub mod import;
pub mod parse;
pub mod transform;
