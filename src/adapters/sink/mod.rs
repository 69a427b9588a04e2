//! Sink writer abstraction
//!
//! A sink persists one chunk of transformed customer records per call.
//! Variants differ in how many destination stores they touch:
//!
//! - [`single::SingleStoreWriter`] targets one relational store.
//! - [`dual::DualStoreWriter`] targets a primary store plus an audit store
//!   with two independently-committed operations and no shared transaction.
//!
//! Store access goes through [`CustomerStore`], implemented for PostgreSQL
//! in [`crate::adapters::postgres`] and by in-memory fakes in tests.

pub mod dual;
pub mod single;

use crate::domain::{Customer, Result};
use async_trait::async_trait;

pub use dual::DualStoreWriter;
pub use single::SingleStoreWriter;

/// Batch writer trait
///
/// `write` persists a full chunk in one invocation. An empty batch is a
/// no-op, not an error. A returned error is fatal for the run; the writer
/// performs no retry and no compensating rollback of work already committed.
#[async_trait]
pub trait BatchWriter: Send + Sync {
    /// Persist one chunk
    async fn write(&self, batch: &[Customer]) -> Result<()>;

    /// Writer name for logging and run reports
    fn name(&self) -> &str;
}

/// Destination store operations
///
/// One implementation per concrete store. The two insert shapes exist
/// because the audit copy is denormalized into a fixed
/// `(FIRST_NAME, LAST_NAME, EMAIL)` statement that must stay stable for
/// downstream consumers.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Insert a batch into the customer table with one batched statement
    ///
    /// Returns the number of rows inserted. Atomicity is whatever the store
    /// gives a single batched insert; the caller adds nothing on top.
    async fn insert_customers(&self, batch: &[Customer]) -> Result<u64>;

    /// Append one audit row per record via a parameterized multi-row insert
    async fn insert_audit_rows(&self, batch: &[Customer]) -> Result<u64>;

    /// Store label for logging
    fn store_name(&self) -> &str;
}
