//! Merges extraction, normalization and translation into final records.

use chrono::{DateTime, Utc};

use super::normalizer::NormalizedValues;
use crate::models::record::{ExtractedFields, TransactionRecord, TranslationStatus};

/// A translated name and how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedName {
    pub text: String,
    pub status: TranslationStatus,
}

impl TranslatedName {
    /// The source name kept as-is.
    pub fn untranslated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status: TranslationStatus::Skipped,
        }
    }
}

/// Everything known about one block before assembly.
#[derive(Debug, Clone)]
pub struct RecordParts {
    pub block_ordinal: usize,
    pub fields: ExtractedFields,
    pub values: NormalizedValues,
    pub buyer: TranslatedName,
    pub seller: TranslatedName,
}

/// Combine per-name statuses into the record status.
///
/// Any fallback wins over success so degraded records stay visible.
pub fn combine_status(buyer: TranslationStatus, seller: TranslationStatus) -> TranslationStatus {
    use TranslationStatus::*;
    match (buyer, seller) {
        (Fallback, _) | (_, Fallback) => Fallback,
        (Translated, _) | (_, Translated) => Translated,
        _ => Skipped,
    }
}

/// Build the finalized record.
pub fn assemble(parts: RecordParts, ingested_at: DateTime<Utc>) -> TransactionRecord {
    TransactionRecord {
        translation_status: combine_status(parts.buyer.status, parts.seller.status),
        buyer_name_translated: parts.buyer.text,
        seller_name_translated: parts.seller.text,
        transaction_date: parts.values.date.value,
        date_status: parts.values.date.status,
        transaction_value: parts.values.value.value,
        value_status: parts.values.value.status,
        block_ordinal: parts.block_ordinal,
        ingested_at,
        fields: parts.fields,
    }
}
