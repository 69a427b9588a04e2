//! Local CSV file reader

use super::{RecordReader, RecordStream};
use crate::domain::{Customer, Result, SourceError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs::File;

/// Reader over a CSV file on the local filesystem
///
/// The file handle is acquired at [`open`](RecordReader::open) time and
/// streamed line by line; nothing is buffered beyond the current line.
pub struct LocalFileReader {
    path: PathBuf,
    origin: String,
    stream: Option<RecordStream>,
    skipped: u64,
}

impl LocalFileReader {
    /// Create a reader for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let origin = path.display().to_string();
        Self {
            path,
            origin,
            stream: None,
            skipped: 0,
        }
    }
}

#[async_trait]
impl RecordReader for LocalFileReader {
    async fn open(&mut self) -> Result<()> {
        let file = File::open(&self.path)
            .await
            .map_err(|e| SourceError::OpenFailed {
                origin: self.origin.clone(),
                message: e.to_string(),
            })?;

        self.stream = Some(RecordStream::new(Box::new(file), self.origin.clone()));
        tracing::info!(path = %self.origin, "Opened local CSV file");
        Ok(())
    }

    async fn next(&mut self) -> Result<Option<Customer>> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| SourceError::NotOpen(self.origin.clone()))?;

        stream.next_record().await
    }

    async fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Dropping the stream closes the file handle; local file close
            // cannot meaningfully fail beyond that.
            self.skipped = stream.skipped();
            tracing::info!(path = %self.origin, "Closed local CSV file reader");
        }
    }

    fn records_skipped(&self) -> u64 {
        match &self.stream {
            Some(stream) => stream.skipped(),
            None => self.skipped,
        }
    }

    fn origin(&self) -> &str {
        &self.origin
    }
}
