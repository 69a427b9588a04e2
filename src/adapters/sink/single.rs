//! Single-store batch writer

use super::{BatchWriter, CustomerStore};
use crate::domain::{Customer, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Writer persisting each chunk to one relational store
///
/// The whole chunk goes into a single batched insert; there is no partial-row
/// guarantee beyond what the store itself offers for that one statement.
pub struct SingleStoreWriter {
    store: Arc<dyn CustomerStore>,
    name: String,
}

impl SingleStoreWriter {
    /// Create a writer over one store
    pub fn new(store: Arc<dyn CustomerStore>) -> Self {
        let name = format!("single-store[{}]", store.store_name());
        Self { store, name }
    }
}

#[async_trait]
impl BatchWriter for SingleStoreWriter {
    async fn write(&self, batch: &[Customer]) -> Result<()> {
        if batch.is_empty() {
            return Ok(());
        }

        let written = self.store.insert_customers(batch).await?;
        tracing::info!(
            store = %self.store.store_name(),
            count = written,
            "Wrote customers to store"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
