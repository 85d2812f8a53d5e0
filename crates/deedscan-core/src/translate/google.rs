//! Google Cloud Translation (v2 REST) client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Translator;
use crate::error::TranslationError;
use crate::models::config::TranslationConfig;

/// Google Cloud Translation v2 client.
pub struct GoogleTranslator {
    api_key: String,
    endpoint: String,
    source: String,
    target: String,
    client: reqwest::Client,
}

impl GoogleTranslator {
    /// Create a client for the public endpoint.
    pub fn new(
        api_key: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: TranslationConfig::default().endpoint,
            source: source.into(),
            target: target.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Use a different endpoint (proxies, test servers).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Build a client from configuration, reading the key from the
    /// configured environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::NotConfigured`] if the variable is unset
    /// or empty.
    pub fn from_config(config: &TranslationConfig) -> Result<Self, TranslationError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                TranslationError::NotConfigured(format!(
                    "{} environment variable not set",
                    config.api_key_env
                ))
            })?;

        Ok(Self::new(api_key, &config.source_language, &config.target_language)
            .with_endpoint(&config.endpoint))
    }
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a [String],
    source: &'a str,
    target: &'a str,
    format: &'static str,
}

#[derive(Deserialize)]
struct TranslateResponse {
    data: TranslateData,
}

#[derive(Deserialize)]
struct TranslateData {
    translations: Vec<Translation>,
}

#[derive(Deserialize)]
struct Translation {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

fn parse_response(body: &str, expected: usize) -> Result<Vec<String>, TranslationError> {
    let response: TranslateResponse =
        serde_json::from_str(body).map_err(|e| TranslationError::Malformed(e.to_string()))?;

    let translations: Vec<String> = response
        .data
        .translations
        .into_iter()
        .map(|t| t.translated_text)
        .collect();

    if translations.len() != expected {
        return Err(TranslationError::Cardinality {
            expected,
            actual: translations.len(),
        });
    }
    Ok(translations)
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

#[async_trait::async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str) -> Result<String, TranslationError> {
        let mut out = self.translate_batch(&[text.to_string()]).await?;
        out.pop().ok_or(TranslationError::Cardinality {
            expected: 1,
            actual: 0,
        })
    }

    async fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, TranslationError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = TranslateRequest {
            q: texts,
            source: &self.source,
            target: &self.target,
            format: "text",
        };

        debug!("Requesting {} translations from {}", texts.len(), self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TranslationError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_response(&body, texts.len())
    }
}
