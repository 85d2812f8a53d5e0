//! Best-effort translation with bounded time and silent degradation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::{GoogleTranslator, Translator};
use crate::error::TranslationError;
use crate::models::config::TranslationConfig;
use crate::models::record::TranslationStatus;

/// Call and failure counters, shared by every pipeline using the same
/// adapter.
#[derive(Debug, Default)]
pub struct TranslationStats {
    calls: AtomicU64,
    failures: AtomicU64,
}

impl TranslationStats {
    /// Requests issued to the translation collaborator.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }

    /// Requests that failed and fell back to the original text.
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }
}

/// Translations for a batch, with a status per string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedBatch {
    pub texts: Vec<String>,
    pub statuses: Vec<TranslationStatus>,
}

/// Wraps a [`Translator`] so that no failure reaches the caller.
///
/// Every call is bounded by a timeout. Errors, timeouts and cardinality
/// mismatches return the input strings unchanged and bump
/// [`TranslationStats::failures`].
#[derive(Clone)]
pub struct TranslatorAdapter {
    inner: Option<Arc<dyn Translator>>,
    timeout: Duration,
    max_batch_size: usize,
    stats: Arc<TranslationStats>,
}

impl TranslatorAdapter {
    /// Wrap a translator with default limits.
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        let defaults = TranslationConfig::default();
        Self {
            inner: Some(translator),
            timeout: Duration::from_millis(defaults.timeout_ms),
            max_batch_size: defaults.max_batch_size,
            stats: Arc::new(TranslationStats::default()),
        }
    }

    /// An adapter that passes every string through untranslated.
    pub fn disabled() -> Self {
        let defaults = TranslationConfig::default();
        Self {
            inner: None,
            timeout: Duration::from_millis(defaults.timeout_ms),
            max_batch_size: defaults.max_batch_size,
            stats: Arc::new(TranslationStats::default()),
        }
    }

    /// Build the configured adapter.
    ///
    /// A missing API key disables translation with a warning instead of
    /// failing.
    pub fn from_config(config: &TranslationConfig) -> Self {
        if !config.enabled {
            debug!("Translation disabled by configuration");
            return Self::disabled();
        }

        let adapter = match GoogleTranslator::from_config(config) {
            Ok(translator) => Self::new(Arc::new(translator)),
            Err(e) => {
                warn!("Translation unavailable, names will be kept as-is: {}", e);
                Self::disabled()
            }
        };

        adapter
            .with_timeout(Duration::from_millis(config.timeout_ms))
            .with_max_batch_size(config.max_batch_size)
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of strings per call.
    pub fn with_max_batch_size(mut self, size: usize) -> Self {
        self.max_batch_size = size.max(1);
        self
    }

    /// Share counters with other adapters.
    pub fn with_stats(mut self, stats: Arc<TranslationStats>) -> Self {
        self.stats = stats;
        self
    }

    pub fn stats(&self) -> &Arc<TranslationStats> {
        &self.stats
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Translate one string, falling back to the original.
    pub async fn translate_one(&self, text: &str) -> (String, TranslationStatus) {
        let Some(translator) = &self.inner else {
            return (text.to_string(), TranslationStatus::Skipped);
        };

        self.stats.calls.fetch_add(1, Ordering::Relaxed);
        let result = match tokio::time::timeout(self.timeout, translator.translate(text)).await {
            Ok(result) => result,
            Err(_) => Err(self.timeout_error()),
        };

        match result {
            Ok(translated) => (translated, TranslationStatus::Translated),
            Err(e) => {
                self.record_failure(&e, 1);
                (text.to_string(), TranslationStatus::Fallback)
            }
        }
    }

    /// Translate many strings in as few calls as the batch limit allows.
    ///
    /// Output order and length always match the input.
    pub async fn translate_all(&self, texts: &[String]) -> TranslatedBatch {
        let Some(translator) = &self.inner else {
            return TranslatedBatch {
                texts: texts.to_vec(),
                statuses: vec![TranslationStatus::Skipped; texts.len()],
            };
        };

        let mut out = TranslatedBatch {
            texts: Vec::with_capacity(texts.len()),
            statuses: Vec::with_capacity(texts.len()),
        };

        for chunk in texts.chunks(self.max_batch_size) {
            match self.call_batch(translator.as_ref(), chunk).await {
                Ok(translated) => {
                    out.texts.extend(translated);
                    out.statuses
                        .extend(std::iter::repeat_n(TranslationStatus::Translated, chunk.len()));
                }
                Err(e) => {
                    self.record_failure(&e, chunk.len());
                    out.texts.extend_from_slice(chunk);
                    out.statuses
                        .extend(std::iter::repeat_n(TranslationStatus::Fallback, chunk.len()));
                }
            }
        }

        out
    }

    async fn call_batch(
        &self,
        translator: &dyn Translator,
        chunk: &[String],
    ) -> Result<Vec<String>, TranslationError> {
        self.stats.calls.fetch_add(1, Ordering::Relaxed);

        let translated =
            match tokio::time::timeout(self.timeout, translator.translate_batch(chunk)).await {
                Ok(result) => result?,
                Err(_) => return Err(self.timeout_error()),
            };

        if translated.len() != chunk.len() {
            return Err(TranslationError::Cardinality {
                expected: chunk.len(),
                actual: translated.len(),
            });
        }
        Ok(translated)
    }

    fn timeout_error(&self) -> TranslationError {
        TranslationError::Timeout(u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX))
    }

    fn record_failure(&self, error: &TranslationError, count: usize) {
        self.stats.failures.fetch_add(1, Ordering::Relaxed);
        warn!(
            "Translation failed for {} string(s), keeping originals: {}",
            count, error
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Upper;

    #[async_trait::async_trait]
    impl Translator for Upper {
        async fn translate(&self, text: &str) -> Result<String, TranslationError> {
            Ok(text.to_uppercase())
        }
    }

    struct Broken;

    #[async_trait::async_trait]
    impl Translator for Broken {
        async fn translate(&self, _text: &str) -> Result<String, TranslationError> {
            Err(TranslationError::Status {
                status: 403,
                message: "quota".to_string(),
            })
        }
    }

    struct Short;

    #[async_trait::async_trait]
    impl Translator for Short {
        async fn translate(&self, text: &str) -> Result<String, TranslationError> {
            Ok(text.to_string())
        }

        async fn translate_batch(&self, _texts: &[String]) -> Result<Vec<String>, TranslationError> {
            Ok(vec!["only one".to_string()])
        }
    }

    struct Slow;

    #[async_trait::async_trait]
    impl Translator for Slow {
        async fn translate(&self, text: &str) -> Result<String, TranslationError> {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Ok(text.to_string())
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_translate_all_success() {
        let adapter = TranslatorAdapter::new(Arc::new(Upper));
        let out = adapter.translate_all(&strings(&["ravi", "meena"])).await;

        assert_eq!(out.texts, strings(&["RAVI", "MEENA"]));
        assert_eq!(out.statuses, vec![TranslationStatus::Translated; 2]);
        assert_eq!(adapter.stats().calls(), 1);
        assert_eq!(adapter.stats().failures(), 0);
    }

    #[tokio::test]
    async fn test_failure_returns_originals() {
        let adapter = TranslatorAdapter::new(Arc::new(Broken));
        let input = strings(&["முருகன்", "லட்சுமி"]);
        let out = adapter.translate_all(&input).await;

        assert_eq!(out.texts, input);
        assert_eq!(out.statuses, vec![TranslationStatus::Fallback; 2]);
        assert_eq!(adapter.stats().failures(), 1);

        let (single, status) = adapter.translate_one("முருகன்").await;
        assert_eq!(single, "முருகன்");
        assert_eq!(status, TranslationStatus::Fallback);
        assert_eq!(adapter.stats().failures(), 2);
    }

    #[tokio::test]
    async fn test_cardinality_mismatch_degrades() {
        let adapter = TranslatorAdapter::new(Arc::new(Short));
        let input = strings(&["a", "b", "c"]);
        let out = adapter.translate_all(&input).await;

        assert_eq!(out.texts, input);
        assert_eq!(out.statuses, vec![TranslationStatus::Fallback; 3]);
    }

    #[tokio::test]
    async fn test_timeout_degrades() {
        let adapter =
            TranslatorAdapter::new(Arc::new(Slow)).with_timeout(Duration::from_millis(20));
        let input = strings(&["a"]);
        let out = adapter.translate_all(&input).await;

        assert_eq!(out.texts, input);
        assert_eq!(out.statuses, vec![TranslationStatus::Fallback]);
        assert_eq!(adapter.stats().failures(), 1);
    }

    #[tokio::test]
    async fn test_chunks_by_batch_size() {
        let adapter = TranslatorAdapter::new(Arc::new(Upper)).with_max_batch_size(2);
        let out = adapter.translate_all(&strings(&["a", "b", "c", "d", "e"])).await;

        assert_eq!(out.texts, strings(&["A", "B", "C", "D", "E"]));
        assert_eq!(adapter.stats().calls(), 3);
    }

    #[tokio::test]
    async fn test_disabled_passes_through() {
        let adapter = TranslatorAdapter::disabled();
        let out = adapter.translate_all(&strings(&["ரவி"])).await;

        assert_eq!(out.texts, strings(&["ரவி"]));
        assert_eq!(out.statuses, vec![TranslationStatus::Skipped]);
        assert_eq!(adapter.stats().calls(), 0);
        assert!(!adapter.is_enabled());
    }

    #[tokio::test]
    async fn test_shared_stats() {
        let stats = Arc::new(TranslationStats::default());
        let a = TranslatorAdapter::new(Arc::new(Broken)).with_stats(stats.clone());
        let b = TranslatorAdapter::new(Arc::new(Broken)).with_stats(stats.clone());

        a.translate_one("x").await;
        b.translate_one("y").await;
        assert_eq!(stats.failures(), 2);
    }

    #[test]
    fn test_from_config_disabled() {
        let config = TranslationConfig {
            enabled: false,
            ..TranslationConfig::default()
        };
        assert!(!TranslatorAdapter::from_config(&config).is_enabled());
    }
}
