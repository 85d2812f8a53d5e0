//! Core library for bilingual (Tamil/English) property-deed extraction.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Segmentation of registry text into per-transaction blocks
//! - Tamil-first, English-fallback field rules with `UNKNOWN` sentinels
//! - Date and rupee-amount normalization
//! - Name translation through a pluggable, failure-tolerant adapter
//! - Record filtering, persistence and search

pub mod deed;
pub mod error;
pub mod models;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod service;
pub mod store;
pub mod translate;

pub use deed::{DeedExtractor, Normalizer, Pipeline, PipelineOutput, Segmenter};
pub use error::{DeedscanError, Result};
pub use models::config::DeedscanConfig;
pub use models::filter::FilterSpec;
pub use models::record::{
    ExtractedFields, FieldStatus, RawBlock, StoredRecord, TransactionRecord, TranslationStatus,
    UNKNOWN,
};
#[cfg(feature = "pdf")]
pub use pdf::{extract_document_text, PdfExtractor, PdfProcessor};
pub use service::{SearchOutcome, TransactionService, UploadOutcome};
pub use store::{InMemoryStore, JsonFileStore, RecordStore};
pub use translate::{GoogleTranslator, Translator, TranslatorAdapter};
