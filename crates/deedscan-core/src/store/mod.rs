//! Record persistence: store trait plus in-memory and JSON-file stores.

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::filter::FilterSpec;
use crate::models::record::{StoredRecord, TransactionRecord};

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Persistence collaborator for finalized records.
///
/// Selects must use [`FilterSpec::matches`] so that stored-record search
/// agrees with upload-time filtering.
pub trait RecordStore: Send + Sync {
    /// Insert records, returning them with their assigned ids.
    fn insert_many(&self, records: Vec<TransactionRecord>) -> Result<Vec<StoredRecord>>;

    /// Records matching `filter`, in insertion order, at most `limit`.
    fn select(&self, filter: &FilterSpec, limit: Option<usize>) -> Result<Vec<StoredRecord>>;
}

/// Records plus the next id to hand out.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecordTable {
    next_id: u64,
    records: Vec<StoredRecord>,
}

impl Default for RecordTable {
    fn default() -> Self {
        Self {
            next_id: 1,
            records: Vec::new(),
        }
    }
}

impl RecordTable {
    fn insert(&mut self, records: Vec<TransactionRecord>) -> Vec<StoredRecord> {
        let stored: Vec<StoredRecord> = records
            .into_iter()
            .map(|record| {
                let id = self.next_id;
                self.next_id += 1;
                StoredRecord { id, record }
            })
            .collect();
        self.records.extend(stored.iter().cloned());
        stored
    }

    fn select(&self, filter: &FilterSpec, limit: Option<usize>) -> Vec<StoredRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(&r.record))
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
