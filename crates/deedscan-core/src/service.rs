//! Upload and search entry points over the pipeline and a record store.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::deed::Pipeline;
use crate::error::{DeedscanError, Result};
use crate::models::config::DeedscanConfig;
use crate::models::filter::FilterSpec;
use crate::models::record::StoredRecord;
use crate::store::RecordStore;

/// Default cap on unfiltered searches.
pub const DEFAULT_UNFILTERED_LIMIT: usize = 100;

/// Result of uploading one document.
#[derive(Debug, Clone, Serialize)]
pub struct UploadOutcome {
    /// Blocks found in the document before filtering.
    pub blocks: usize,
    /// Number of records persisted.
    pub count: usize,
    /// Persisted records with their ids.
    pub transactions: Vec<StoredRecord>,
}

/// Result of a search.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub count: usize,
    pub transactions: Vec<StoredRecord>,
}

/// Runs documents through the pipeline and persists what survives the filter.
#[derive(Clone)]
pub struct TransactionService {
    pipeline: Pipeline,
    store: Arc<dyn RecordStore>,
    unfiltered_limit: usize,
}

impl TransactionService {
    pub fn new(pipeline: Pipeline, store: Arc<dyn RecordStore>) -> Self {
        Self {
            pipeline,
            store,
            unfiltered_limit: DEFAULT_UNFILTERED_LIMIT,
        }
    }

    /// Create a service from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured anchor pattern is invalid or the
    /// unfiltered search limit is zero.
    pub fn from_config(config: &DeedscanConfig, store: Arc<dyn RecordStore>) -> Result<Self> {
        if config.search.unfiltered_limit == 0 {
            return Err(DeedscanError::Config(
                "search.unfiltered_limit must be at least 1".to_string(),
            ));
        }
        let pipeline = Pipeline::from_config(config)?;
        Ok(Self::new(pipeline, store).with_unfiltered_limit(config.search.unfiltered_limit))
    }

    /// Set the cap applied to searches without filters.
    pub fn with_unfiltered_limit(mut self, limit: usize) -> Self {
        self.unfiltered_limit = limit;
        self
    }

    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }

    /// Extract records from `text`, keep those matching `filter` and persist them.
    ///
    /// Nothing is persisted if extraction fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is blank or the store rejects the insert.
    pub async fn upload(&self, text: &str, filter: &FilterSpec) -> Result<UploadOutcome> {
        let output = self.pipeline.process(text, filter).await?;
        let transactions = self.store.insert_many(output.records)?;

        info!(
            "Stored {} of {} transactions",
            transactions.len(),
            output.blocks
        );

        Ok(UploadOutcome {
            blocks: output.blocks,
            count: transactions.len(),
            transactions,
        })
    }

    /// Persisted records matching `filter`.
    ///
    /// Unbounded when any filter field is set, capped at the unfiltered limit
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn search(&self, filter: &FilterSpec) -> Result<SearchOutcome> {
        let limit = filter.is_empty().then_some(self.unfiltered_limit);
        let transactions = self.store.select(filter, limit)?;

        debug!("Search matched {} transactions", transactions.len());

        Ok(SearchOutcome {
            count: transactions.len(),
            transactions,
        })
    }
}
