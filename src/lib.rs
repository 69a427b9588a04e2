// Caravan - Chunked Customer Import Tool
// Copyright (c) 2026 Caravan Contributors
// Licensed under the MIT License

//! # Caravan - Chunked Customer Import
//!
//! Caravan moves customer records from a pluggable source (local CSV file or
//! S3 object) through a normalization step into one or more PostgreSQL
//! destination stores, in fixed-size chunks, under a single synchronous run.
//!
//! ## Architecture
//!
//! Caravan follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (parsing, transform, chunk orchestration)
//! - [`adapters`] - External integrations (sources, sinks, PostgreSQL, S3)
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use caravan::adapters::build_pairing;
//! use caravan::config::load_config;
//! use caravan::core::import::RunCoordinator;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("caravan.toml")?;
//!     let resolved = build_pairing(&config).await?;
//!
//!     let coordinator = RunCoordinator::new(config.batch.chunk_size);
//!     let report = coordinator.execute(resolved.pairing).await;
//!
//!     println!("{}: wrote {} records", report.status, report.counts.written);
//!     Ok(())
//! }
//! ```
//!
//! ## Consistency Note
//!
//! The dual-store writer used in s3 mode commits its primary insert and its
//! audit insert independently, with no shared transaction and no rollback.
//! A failed audit insert leaves the chunk committed in the primary store and
//! the run reported as failed; see [`adapters::sink::dual::DualStoreWriter`].

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
