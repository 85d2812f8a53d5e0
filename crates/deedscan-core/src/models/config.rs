//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for deedscan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeedscanConfig {
    /// Block segmentation configuration.
    pub segmentation: SegmentationConfig,

    /// Name translation configuration.
    pub translation: TranslationConfig,

    /// Search configuration.
    pub search: SearchConfig,

    /// Record store configuration.
    pub store: StoreConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// Block segmentation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Regexes marking the first line of a transaction (matched case-insensitively).
    pub anchor_patterns: Vec<String>,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            anchor_patterns: vec![
                r"வ\.எண்".to_string(),
                "ஆவணம்".to_string(),
                r"Document\s*No".to_string(),
            ],
        }
    }
}

/// Name translation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// Translate names at all.
    pub enabled: bool,

    /// Translation v2 endpoint.
    pub endpoint: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Source language code.
    pub source_language: String,

    /// Target language code.
    pub target_language: String,

    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,

    /// Maximum strings per request.
    pub max_batch_size: usize,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://translation.googleapis.com/language/translate/v2".to_string(),
            api_key_env: "GOOGLE_TRANSLATE_API_KEY".to_string(),
            source_language: "ta".to_string(),
            target_language: "en".to_string(),
            timeout_ms: 10_000,
            max_batch_size: 128,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Result cap applied when no filter is given.
    pub unfiltered_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { unfiltered_limit: 100 }
    }
}

/// Record store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// JSON file holding persisted records.
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("deedscan-records.json"),
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Minimum extracted text length to accept a PDF as readable.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self { min_text_length: 1 }
    }
}

impl DeedscanConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeedscanConfig::default();
        assert_eq!(config.search.unfiltered_limit, 100);
        assert_eq!(config.translation.max_batch_size, 128);
        assert_eq!(config.segmentation.anchor_patterns.len(), 3);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: DeedscanConfig =
            serde_json::from_str(r#"{"translation": {"enabled": false}}"#).unwrap();
        assert!(!config.translation.enabled);
        assert_eq!(config.translation.target_language, "en");
        assert_eq!(config.search.unfiltered_limit, 100);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = DeedscanConfig::default();
        config.search.unfiltered_limit = 25;
        config.save(&path).unwrap();

        let loaded = DeedscanConfig::from_file(&path).unwrap();
        assert_eq!(loaded.search.unfiltered_limit, 25);
    }
}
