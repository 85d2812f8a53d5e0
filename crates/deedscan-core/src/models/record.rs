//! Transaction record models for registered property deeds.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder for required fields that could not be extracted.
pub const UNKNOWN: &str = "UNKNOWN";

/// A span of document text believed to describe one transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    /// Position among emitted blocks (0-based, document order).
    pub ordinal: usize,
    /// Trimmed block text.
    pub text: String,
}

/// Fields matched in a single block, before normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    /// Buyer name in the source script, or [`UNKNOWN`].
    pub buyer_name: String,

    /// Seller name in the source script, or [`UNKNOWN`].
    pub seller_name: String,

    /// House / door number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub house_number: Option<String>,

    /// Survey (parcel) number, or [`UNKNOWN`].
    pub survey_number: String,

    /// Registered document number, or [`UNKNOWN`].
    pub document_number: String,

    /// Date substring as matched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_date_text: Option<String>,

    /// Consideration substring as matched, currency marker included.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_value_text: Option<String>,

    /// Registration district.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,

    /// Full block text, kept for audit.
    pub source_text: String,
}

impl ExtractedFields {
    /// Fields for a block where nothing matched.
    pub fn unresolved(source_text: impl Into<String>) -> Self {
        Self {
            buyer_name: UNKNOWN.to_string(),
            seller_name: UNKNOWN.to_string(),
            house_number: None,
            survey_number: UNKNOWN.to_string(),
            document_number: UNKNOWN.to_string(),
            raw_date_text: None,
            raw_value_text: None,
            district: None,
            source_text: source_text.into(),
        }
    }
}

/// How a normalized field was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldStatus {
    /// Matched and converted successfully.
    Parsed,
    /// Nothing matched in the block.
    #[default]
    Missing,
    /// Matched, but the text could not be converted.
    Malformed,
}

/// Outcome of name translation for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    /// Names were rendered by the translation service.
    Translated,
    /// The service failed; translated names are the originals.
    Fallback,
    /// Translation is disabled.
    #[default]
    Skipped,
}

/// A finalized transaction, ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Raw extracted fields.
    #[serde(flatten)]
    pub fields: ExtractedFields,

    /// Buyer name in the target language.
    pub buyer_name_translated: String,

    /// Seller name in the target language.
    pub seller_name_translated: String,

    /// Registration date; the ingestion date when unresolved.
    pub transaction_date: NaiveDate,

    /// How `transaction_date` was obtained.
    pub date_status: FieldStatus,

    /// Consideration in whole rupees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_value: Option<u64>,

    /// How `transaction_value` was obtained.
    pub value_status: FieldStatus,

    /// Outcome of name translation.
    pub translation_status: TranslationStatus,

    /// Position of the source block within its document.
    pub block_ordinal: usize,

    /// When the pipeline processed the document.
    pub ingested_at: DateTime<Utc>,
}

impl TransactionRecord {
    /// Check whether any required field fell back to the sentinel.
    pub fn has_unresolved_fields(&self) -> bool {
        [
            &self.fields.buyer_name,
            &self.fields.seller_name,
            &self.fields.survey_number,
            &self.fields.document_number,
        ]
        .iter()
        .any(|v| v.as_str() == UNKNOWN)
    }

    /// Human-readable issues with this record.
    pub fn validate(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if self.fields.document_number == UNKNOWN {
            issues.push("Missing document number".to_string());
        }
        if self.fields.survey_number == UNKNOWN {
            issues.push("Missing survey number".to_string());
        }
        if self.fields.buyer_name == UNKNOWN {
            issues.push("Missing buyer name".to_string());
        }
        if self.fields.seller_name == UNKNOWN {
            issues.push("Missing seller name".to_string());
        }
        match self.date_status {
            FieldStatus::Missing => issues.push("No date found, using ingestion date".to_string()),
            FieldStatus::Malformed => issues.push(format!(
                "Unparseable date {:?}, using ingestion date",
                self.fields.raw_date_text.as_deref().unwrap_or_default()
            )),
            FieldStatus::Parsed => {}
        }
        if self.value_status == FieldStatus::Malformed {
            issues.push(format!(
                "Unparseable value {:?}",
                self.fields.raw_value_text.as_deref().unwrap_or_default()
            ));
        }

        issues
    }
}

/// A record as held by a store, with its assigned identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecord {
    /// Store-assigned identifier.
    pub id: u64,

    #[serde(flatten)]
    pub record: TransactionRecord,
}
