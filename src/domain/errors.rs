//! Domain error types
//!
//! This module defines the error hierarchy for Caravan. All errors are
//! domain-specific and don't expose third-party types.
//!
//! Fatality rules for a run:
//! - [`SourceError::OpenFailed`] aborts the run before any chunk is processed.
//! - Parse skips are not errors at all; the reader absorbs them, logs a
//!   warning, and counts them.
//! - [`StoreError`] variants raised during a write abort the run. With the
//!   dual-store writer this can leave one store committed and the other not;
//!   no compensating rollback is ever attempted.
//! - Close failures are logged and never change the run status, so they have
//!   no error variant here.

use thiserror::Error;

/// Main Caravan error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum CaravanError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Source reader errors
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Destination store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Source-reader errors
///
/// Errors raised while acquiring or consuming a record source. These don't
/// expose the underlying file or SDK error types.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to acquire the underlying I/O handle; fatal for the run
    #[error("Failed to open source {origin}: {message}")]
    OpenFailed { origin: String, message: String },

    /// Failed while pulling the next line from an already-open source
    #[error("Failed to read from source {origin}: {message}")]
    ReadFailed { origin: String, message: String },

    /// `next()` was called before `open()` or after `close()`
    #[error("Source {0} is not open")]
    NotOpen(String),
}

/// Destination-store errors
///
/// Errors raised by the PostgreSQL store clients. These don't expose
/// tokio-postgres or deadpool types.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to connect or to get a pooled connection
    #[error("Failed to connect to store {store}: {message}")]
    ConnectionFailed { store: String, message: String },

    /// A batched insert failed; fatal for the run
    #[error("Failed to write batch to store {store}: {message}")]
    WriteFailed { store: String, message: String },

    /// Schema provisioning failed
    #[error("Failed to provision schema on store {store}: {message}")]
    SchemaFailed { store: String, message: String },
}

impl From<std::io::Error> for CaravanError {
    fn from(err: std::io::Error) -> Self {
        CaravanError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for CaravanError {
    fn from(err: toml::de::Error) -> Self {
        CaravanError::Configuration(format!("TOML parse error: {err}"))
    }
}
