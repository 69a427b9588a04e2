//! Source reader abstraction
//!
//! A source produces a lazy, finite, non-restartable sequence of customer
//! records from one concrete origin. Two variants exist: a local CSV file
//! ([`local::LocalFileReader`]) and an S3 object ([`s3::S3ObjectReader`]).
//! Both stream lines through the shared [`RecordStream`] so they parse
//! identically.

pub mod local;
pub mod s3;

use crate::core::parse::{parse_line, ParsedLine};
use crate::domain::{Customer, Result, SourceError};
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader, Lines};

pub use local::LocalFileReader;
pub use s3::S3ObjectReader;

/// Record source trait
///
/// The contract mirrors the lifecycle of the underlying I/O handle:
///
/// - [`open`](RecordReader::open) acquires the handle; failure is fatal for
///   the run.
/// - [`next`](RecordReader::next) yields one record per call, `Ok(None)` at
///   end-of-stream. Malformed lines are absorbed (warn + counter), never
///   surfaced as errors. The sequence is not restartable once closed.
/// - [`close`](RecordReader::close) releases the handle; failures here are
///   logged only and never alter the run outcome.
#[async_trait]
pub trait RecordReader: Send {
    /// Acquire the underlying I/O handle
    async fn open(&mut self) -> Result<()>;

    /// Pull the next record, or `Ok(None)` once the source is exhausted
    async fn next(&mut self) -> Result<Option<Customer>>;

    /// Release the underlying handle
    async fn close(&mut self);

    /// Number of malformed lines skipped so far
    fn records_skipped(&self) -> u64;

    /// Human-readable origin for logging (path or `s3://bucket/key`)
    fn origin(&self) -> &str;
}

/// Shared line-to-record stream used by every reader variant
///
/// Wraps an async line source and applies [`parse_line`] to each line.
/// Header lines are dropped wherever they occur; malformed lines are
/// warn-logged and counted. Skipping is an explicit loop, so a long stretch
/// of skippable lines costs no stack depth.
pub(crate) struct RecordStream {
    lines: Lines<BufReader<Box<dyn AsyncRead + Send + Unpin>>>,
    origin: String,
    skipped: u64,
}

impl RecordStream {
    /// Create a stream over an async byte source
    pub(crate) fn new(reader: Box<dyn AsyncRead + Send + Unpin>, origin: impl Into<String>) -> Self {
        Self {
            lines: BufReader::new(reader).lines(),
            origin: origin.into(),
            skipped: 0,
        }
    }

    /// Pull the next well-formed record
    pub(crate) async fn next_record(&mut self) -> Result<Option<Customer>> {
        loop {
            let line = self
                .lines
                .next_line()
                .await
                .map_err(|e| SourceError::ReadFailed {
                    origin: self.origin.clone(),
                    message: e.to_string(),
                })?;

            let line = match line {
                Some(line) => line,
                None => return Ok(None),
            };

            match parse_line(&line) {
                ParsedLine::Header => {
                    tracing::debug!(origin = %self.origin, "Skipping header line");
                }
                ParsedLine::Malformed => {
                    tracing::warn!(origin = %self.origin, line = %line, "Skipping invalid line");
                    self.skipped += 1;
                }
                ParsedLine::Record(customer) => return Ok(Some(customer)),
            }
        }
    }

    /// Number of malformed lines skipped so far
    pub(crate) fn skipped(&self) -> u64 {
        self.skipped
    }
}
