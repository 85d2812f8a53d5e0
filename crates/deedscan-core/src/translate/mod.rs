//! Name translation: collaborator trait, Google client, degrading adapter.

mod adapter;
pub mod google;

pub use adapter::{TranslatedBatch, TranslationStats, TranslatorAdapter};
pub use google::GoogleTranslator;

use crate::error::TranslationError;

/// A source-script to target-script translation capability.
///
/// Implementations may fail freely; callers go through
/// [`TranslatorAdapter`], which absorbs every error.
#[async_trait::async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single string.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] if the request fails.
    async fn translate(&self, text: &str) -> Result<String, TranslationError>;

    /// Translate several strings, preserving order and count.
    ///
    /// The default issues one call per string.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError`] if any request fails.
    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, TranslationError> {
        let mut out = Vec::with_capacity(texts.len());
        for text in texts {
            out.push(self.translate(text).await?);
        }
        Ok(out)
    }
}
