//! Dual-store batch writer (primary + audit)

use super::{BatchWriter, CustomerStore};
use crate::domain::{Customer, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Writer persisting each chunk to a primary store and an audit store
///
/// Each chunk triggers two sequential, independently-committed operations:
///
/// 1. a batched insert of the full chunk into the primary customer table,
/// 2. a parameterized multi-row insert of one audit row per record into the
///    audit store.
///
/// The two operations are **not** wrapped in a shared transaction. If the
/// primary insert commits and the audit insert then fails, the chunk stays
/// committed in the primary store, is absent from the audit store, and the
/// run fails with no compensating rollback. Callers that need cross-store
/// consistency must reconcile externally; this writer intentionally does not.
pub struct DualStoreWriter {
    primary: Arc<dyn CustomerStore>,
    audit: Arc<dyn CustomerStore>,
    name: String,
}

impl DualStoreWriter {
    /// Create a writer over a primary and an audit store
    pub fn new(primary: Arc<dyn CustomerStore>, audit: Arc<dyn CustomerStore>) -> Self {
        let name = format!(
            "dual-store[{}+{}]",
            primary.store_name(),
            audit.store_name()
        );
        Self {
            primary,
            audit,
            name,
        }
    }
}

#[async_trait]
impl BatchWriter for DualStoreWriter {
    async fn write(&self, batch: &[Customer]) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        // 1) Full chunk into the primary customer table.
        let primary_written = self.primary.insert_customers(batch).await?;

        // 2) Denormalized audit rows. A failure here leaves the primary
        //    rows committed; that exposure is part of this writer's contract.
        let audit_written = self.audit.insert_audit_rows(batch).await.map_err(|e| {
            tracing::error!(
                primary_store = %self.primary.store_name(),
                audit_store = %self.audit.store_name(),
                committed_rows = primary_written,
                error = %e,
                "Audit insert failed after primary commit; stores are now inconsistent"
            );
            e
        })?;

        tracing::info!(
            primary_store = %self.primary.store_name(),
            audit_store = %self.audit.store_name(),
            primary_rows = primary_written,
            audit_rows = audit_written,
            "Wrote customers to primary and audit stores"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
