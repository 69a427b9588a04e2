//! Dual-store consistency exposure tests
//!
//! The dual-store writer commits its two operations independently. These
//! tests pin down the observable behavior when the second operation fails:
//! the run is failed, and the rows the primary store already committed stay
//! committed.

mod common;

use caravan::adapters::sink::DualStoreWriter;
use caravan::core::import::{Pairing, RunCoordinator, RunStatus};
use common::{MemoryReader, MemoryStore};
use std::sync::Arc;

fn reader(n: usize) -> Box<MemoryReader> {
    Box::new(MemoryReader::generated(n))
}

#[tokio::test]
async fn successful_run_persists_to_both_stores() {
    let primary = Arc::new(MemoryStore::named("primary"));
    let audit = Arc::new(MemoryStore::named("local"));
    let pairing = Pairing::new(
        "s3",
        reader(150),
        Arc::new(DualStoreWriter::new(primary.clone(), audit.clone())),
    );

    let report = RunCoordinator::new(100).execute(pairing).await;

    assert_eq!(report.status, RunStatus::Completed);
    assert_eq!(primary.customers.lock().unwrap().len(), 150);
    assert_eq!(audit.audit_rows.lock().unwrap().len(), 150);
}

#[tokio::test]
async fn audit_failure_fails_run_but_keeps_primary_rows() {
    let primary = Arc::new(MemoryStore::named("primary"));
    let audit = Arc::new(MemoryStore {
        fail_audit: true,
        ..MemoryStore::named("local")
    });
    let pairing = Pairing::new(
        "s3",
        reader(10),
        Arc::new(DualStoreWriter::new(primary.clone(), audit.clone())),
    );

    let report = RunCoordinator::new(100).execute(pairing).await;

    assert_eq!(report.status, RunStatus::Failed);
    assert!(report.error.unwrap().contains("audit insert refused"));

    // No rollback of the already-committed primary insert.
    assert_eq!(primary.customers.lock().unwrap().len(), 10);
    assert!(audit.audit_rows.lock().unwrap().is_empty());
}

#[tokio::test]
async fn audit_failure_on_second_chunk_keeps_first_chunk_in_both_stores() {
    let primary = Arc::new(MemoryStore::named("primary"));
    let audit = Arc::new(MemoryStore::named("local"));

    // Fail the audit path only after the first chunk has gone through.
    struct FlakyAudit {
        inner: Arc<MemoryStore>,
        allow: usize,
        calls: std::sync::Mutex<usize>,
    }

    #[async_trait::async_trait]
    impl caravan::adapters::sink::CustomerStore for FlakyAudit {
        async fn insert_customers(
            &self,
            batch: &[caravan::domain::Customer],
        ) -> caravan::domain::Result<u64> {
            self.inner.insert_customers(batch).await
        }

        async fn insert_audit_rows(
            &self,
            batch: &[caravan::domain::Customer],
        ) -> caravan::domain::Result<u64> {
            {
                let mut calls = self.calls.lock().unwrap();
                *calls += 1;
                if *calls > self.allow {
                    return Err(caravan::domain::StoreError::WriteFailed {
                        store: "local".to_string(),
                        message: "audit insert refused".to_string(),
                    }
                    .into());
                }
            }
            self.inner.insert_audit_rows(batch).await
        }

        fn store_name(&self) -> &str {
            "local"
        }
    }

    let flaky = Arc::new(FlakyAudit {
        inner: audit.clone(),
        allow: 1,
        calls: std::sync::Mutex::new(0),
    });
    let pairing = Pairing::new(
        "s3",
        reader(150),
        Arc::new(DualStoreWriter::new(primary.clone(), flaky)),
    );

    let report = RunCoordinator::new(100).execute(pairing).await;

    assert_eq!(report.status, RunStatus::Failed);
    // Chunk 1 landed in both stores; chunk 2 only in the primary.
    assert_eq!(primary.customers.lock().unwrap().len(), 150);
    assert_eq!(audit.audit_rows.lock().unwrap().len(), 100);
    assert_eq!(report.counts.written, 100);
}

#[tokio::test]
async fn primary_failure_aborts_before_audit() {
    let primary = Arc::new(MemoryStore {
        fail_customers: true,
        ..MemoryStore::named("primary")
    });
    let audit = Arc::new(MemoryStore::named("local"));
    let pairing = Pairing::new(
        "s3",
        reader(10),
        Arc::new(DualStoreWriter::new(primary.clone(), audit.clone())),
    );

    let report = RunCoordinator::new(100).execute(pairing).await;

    assert_eq!(report.status, RunStatus::Failed);
    assert!(primary.customers.lock().unwrap().is_empty());
    assert!(audit.audit_rows.lock().unwrap().is_empty());
}
