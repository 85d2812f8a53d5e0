//! Rule-based field extractors for bilingual deed text.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::{normalize_value, parse_rupee_amount};
pub use dates::{normalize_date, parse_day_first};
pub use patterns::*;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::record::FieldStatus;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Script a rule alternative is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    /// Tamil label.
    Tamil,
    /// Latin (English) label.
    Latin,
    /// Unlabeled value shape.
    Any,
}

/// A matched field value and the alternative that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Script of the alternative that matched.
    pub script: Script,
}

/// A canonical value and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized<T> {
    pub value: T,
    pub status: FieldStatus,
}

impl<T> Normalized<T> {
    pub fn new(value: T, status: FieldStatus) -> Self {
        Self { value, status }
    }
}

/// One field's ordered pattern alternatives.
///
/// Alternatives are tried in order and the first non-blank capture wins.
/// Every pattern must have exactly one capture group holding the value.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: &'static str,
    alternatives: Vec<(Script, &'static Regex)>,
}

impl FieldRule {
    pub fn new(name: &'static str, alternatives: Vec<(Script, &'static Regex)>) -> Self {
        Self { name, alternatives }
    }

    /// Field name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn matches_for<'a>(
    script: Script,
    pattern: &'static Regex,
    text: &'a str,
) -> impl Iterator<Item = ExtractionMatch<String>> + 'a {
    pattern.captures_iter(text).filter_map(move |caps| {
        let value = caps.get(1)?.as_str().trim();
        (!value.is_empty()).then(|| ExtractionMatch {
            value: value.to_string(),
            script,
        })
    })
}

impl FieldExtractor for FieldRule {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.alternatives
            .iter()
            .find_map(|(script, pattern)| matches_for(*script, pattern, text).next())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.alternatives
            .iter()
            .flat_map(|(script, pattern)| matches_for(*script, pattern, text))
            .collect()
    }
}
