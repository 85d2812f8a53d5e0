//! Process-local record store.

use std::sync::Mutex;

use super::{RecordStore, RecordTable, Result};
use crate::error::StoreError;
use crate::models::filter::FilterSpec;
use crate::models::record::{StoredRecord, TransactionRecord};

/// Record store held in memory; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    table: Mutex<RecordTable>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn insert_many(&self, records: Vec<TransactionRecord>) -> Result<Vec<StoredRecord>> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(table.insert(records))
    }

    fn select(&self, filter: &FilterSpec, limit: Option<usize>) -> Result<Vec<StoredRecord>> {
        let table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(table.select(filter, limit))
    }
}
