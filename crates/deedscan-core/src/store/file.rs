//! Record store persisted as a single JSON file.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::debug;

use super::{RecordStore, RecordTable, Result};
use crate::error::StoreError;
use crate::models::filter::FilterSpec;
use crate::models::record::{StoredRecord, TransactionRecord};

/// Record store backed by a JSON file.
///
/// The whole table is loaded on open and rewritten after every insert.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: Mutex<RecordTable>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let table = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            RecordTable::default()
        };

        debug!(
            "Opened record store {} with {} records",
            path.display(),
            table.records.len()
        );

        Ok(Self {
            path,
            table: Mutex::new(table),
        })
    }

    fn persist(&self, table: &RecordTable) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_string_pretty(table)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RecordStore for JsonFileStore {
    fn insert_many(&self, records: Vec<TransactionRecord>) -> Result<Vec<StoredRecord>> {
        let mut table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        // Persist a copy first so a failed write leaves memory untouched.
        let mut updated = table.clone();
        let stored = updated.insert(records);
        self.persist(&updated)?;
        *table = updated;

        Ok(stored)
    }

    fn select(&self, filter: &FilterSpec, limit: Option<usize>) -> Result<Vec<StoredRecord>> {
        let table = self.table.lock().map_err(|_| StoreError::Poisoned)?;
        Ok(table.select(filter, limit))
    }
}
