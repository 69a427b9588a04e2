//! Shared in-memory fakes for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use caravan::adapters::sink::{BatchWriter, CustomerStore};
use caravan::adapters::source::RecordReader;
use caravan::domain::{Customer, Result, SourceError, StoreError};
use std::sync::Mutex;

/// Reader over a fixed list of raw CSV lines, parsed with the production
/// line parser so integration tests exercise the same skip rules
pub struct MemoryReader {
    lines: Vec<String>,
    cursor: usize,
    skipped: u64,
    open_ok: bool,
    opened: bool,
}

impl MemoryReader {
    pub fn from_lines(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|s| s.to_string()).collect(),
            cursor: 0,
            skipped: 0,
            open_ok: true,
            opened: false,
        }
    }

    pub fn failing_open() -> Self {
        Self {
            open_ok: false,
            ..Self::from_lines(&[])
        }
    }

    /// `n` well-formed generated rows
    pub fn generated(n: usize) -> Self {
        let lines: Vec<String> = (0..n)
            .map(|i| format!("first{i},last{i},user{i}@example.com"))
            .collect();
        Self {
            lines,
            cursor: 0,
            skipped: 0,
            open_ok: true,
            opened: false,
        }
    }
}

#[async_trait]
impl RecordReader for MemoryReader {
    async fn open(&mut self) -> Result<()> {
        if !self.open_ok {
            return Err(SourceError::OpenFailed {
                origin: "memory".to_string(),
                message: "open refused".to_string(),
            }
            .into());
        }
        self.opened = true;
        Ok(())
    }

    async fn next(&mut self) -> Result<Option<Customer>> {
        use caravan::core::parse::{parse_line, ParsedLine};

        while self.cursor < self.lines.len() {
            let line = &self.lines[self.cursor];
            self.cursor += 1;

            match parse_line(line) {
                ParsedLine::Header => continue,
                ParsedLine::Malformed => self.skipped += 1,
                ParsedLine::Record(customer) => return Ok(Some(customer)),
            }
        }
        Ok(None)
    }

    async fn close(&mut self) {}

    fn records_skipped(&self) -> u64 {
        self.skipped
    }

    fn origin(&self) -> &str {
        "memory"
    }
}

/// In-memory customer store with independently failable insert paths
#[derive(Default)]
pub struct MemoryStore {
    pub label: String,
    pub customers: Mutex<Vec<Customer>>,
    pub audit_rows: Mutex<Vec<Customer>>,
    pub fail_customers: bool,
    pub fail_audit: bool,
}

impl MemoryStore {
    pub fn named(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    pub fn customer_emails(&self) -> Vec<String> {
        self.customers
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.email.clone())
            .collect()
    }
}

#[async_trait]
impl CustomerStore for MemoryStore {
    async fn insert_customers(&self, batch: &[Customer]) -> Result<u64> {
        if self.fail_customers {
            return Err(StoreError::WriteFailed {
                store: self.label.clone(),
                message: "customer insert refused".to_string(),
            }
            .into());
        }
        self.customers.lock().unwrap().extend_from_slice(batch);
        Ok(batch.len() as u64)
    }

    async fn insert_audit_rows(&self, batch: &[Customer]) -> Result<u64> {
        if self.fail_audit {
            return Err(StoreError::WriteFailed {
                store: self.label.clone(),
                message: "audit insert refused".to_string(),
            }
            .into());
        }
        self.audit_rows.lock().unwrap().extend_from_slice(batch);
        Ok(batch.len() as u64)
    }

    fn store_name(&self) -> &str {
        &self.label
    }
}

/// Writer recording the size of every batch it receives
#[derive(Default)]
pub struct RecordingWriter {
    pub batches: Mutex<Vec<usize>>,
    pub rows: Mutex<Vec<Customer>>,
}

#[async_trait]
impl BatchWriter for RecordingWriter {
    async fn write(&self, batch: &[Customer]) -> Result<()> {
        self.batches.lock().unwrap().push(batch.len());
        self.rows.lock().unwrap().extend_from_slice(batch);
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
