//! PDF text extraction for uploaded deed documents.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;
}

/// Decode a PDF and return its text.
///
/// Deeds scanned without a text layer yield little or no text; anything
/// shorter than `min_text_length` non-whitespace characters is rejected.
///
/// # Errors
///
/// Returns a [`PdfError`] if the PDF cannot be parsed or decrypted, or has
/// too little text.
pub fn extract_document_text(data: &[u8], min_text_length: usize) -> Result<String> {
    let mut extractor = PdfExtractor::new();
    extractor.load(data)?;
    let text = extractor.extract_text()?;

    let visible = text.chars().filter(|c| !c.is_whitespace()).count();
    if visible < min_text_length {
        return Err(PdfError::TextExtraction(format!(
            "only {} characters of text found across {} pages",
            visible,
            extractor.page_count()
        )));
    }

    Ok(text)
}
