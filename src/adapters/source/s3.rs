//! S3 object reader

use super::{RecordReader, RecordStream};
use crate::domain::{Customer, Result, SourceError};
use async_trait::async_trait;
use aws_sdk_s3::Client;
use std::io::Cursor;

/// Reader over a named object in an S3 bucket
///
/// The object is fetched at [`open`](RecordReader::open) time and then
/// streamed through the same line parser as the local file variant.
pub struct S3ObjectReader {
    client: Client,
    bucket: String,
    key: String,
    origin: String,
    stream: Option<RecordStream>,
    skipped: u64,
}

impl S3ObjectReader {
    /// Create a reader for `s3://bucket/key`
    pub fn new(client: Client, bucket: impl Into<String>, key: impl Into<String>) -> Self {
        let bucket = bucket.into();
        let key = key.into();
        let origin = format!("s3://{}/{}", bucket, key);
        Self {
            client,
            bucket,
            key,
            origin,
            stream: None,
            skipped: 0,
        }
    }
}

#[async_trait]
impl RecordReader for S3ObjectReader {
    async fn open(&mut self) -> Result<()> {
        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| SourceError::OpenFailed {
                origin: self.origin.clone(),
                message: e.to_string(),
            })?;

        let body = response
            .body
            .collect()
            .await
            .map_err(|e| SourceError::OpenFailed {
                origin: self.origin.clone(),
                message: e.to_string(),
            })?;

        let bytes = body.into_bytes().to_vec();
        tracing::info!(
            origin = %self.origin,
            size_bytes = bytes.len(),
            "Fetched S3 object"
        );

        self.stream = Some(RecordStream::new(
            Box::new(Cursor::new(bytes)),
            self.origin.clone(),
        ));
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
            self.skipped = stream.skipped();
            tracing::info!(origin = %self.origin, "Closed S3 object reader");
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

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_s3::config::{BehaviorVersion, Region};

    fn offline_client() -> Client {
        let config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        Client::from_conf(config)
    }

    #[test]
    fn test_origin_format() {
        let reader = S3ObjectReader::new(offline_client(), "imports", "customers.csv");
        assert_eq!(reader.origin(), "s3://imports/customers.csv");
    }

    #[tokio::test]
    async fn test_next_before_open_fails() {
        let mut reader = S3ObjectReader::new(offline_client(), "imports", "customers.csv");
        let err = reader.next().await.unwrap_err();
        assert!(err.to_string().contains("is not open"));
    }
}
