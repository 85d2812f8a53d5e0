//! Error types for the deedscan-core library.

use thiserror::Error;

/// Main error type for the deedscan library.
#[derive(Error, Debug)]
pub enum DeedscanError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Deed extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Record store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to deed field extraction.
///
/// Missing or malformed fields are never errors; they resolve to sentinels
/// and fallbacks inside the pipeline.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No usable text was supplied.
    #[error("no text to extract from")]
    NoInput,

    /// An anchor or rule pattern failed to compile.
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

/// Errors raised by translation collaborators.
///
/// These are absorbed by the translator adapter and never reach pipeline
/// callers.
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Transport-level failure.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be understood.
    #[error("malformed response: {0}")]
    Malformed(String),

    /// The service returned a different number of strings than requested.
    #[error("expected {expected} translations, got {actual}")]
    Cardinality { expected: usize, actual: usize },

    /// The call did not complete in time.
    #[error("timed out after {0}ms")]
    Timeout(u64),

    /// The collaborator is not configured (e.g. missing API key).
    #[error("translator not configured: {0}")]
    NotConfigured(String),
}

/// Errors related to record persistence.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store contents could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A lock guarding the store was poisoned by a panicking writer.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Result type for the deedscan library.
pub type Result<T> = std::result::Result<T, DeedscanError>;
