//! Canonical date and value conversion for extracted fields.

use chrono::NaiveDate;

use super::rules::{normalize_date, normalize_value, Normalized};
use crate::models::record::ExtractedFields;

/// Converts raw date/value matches to canonical values.
///
/// Unresolvable dates take `fallback_date`, normally the date the document
/// was processed.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    fallback_date: NaiveDate,
}

/// Canonical date and value for one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedValues {
    pub date: Normalized<NaiveDate>,
    pub value: Normalized<Option<u64>>,
}

impl Normalizer {
    pub fn new(fallback_date: NaiveDate) -> Self {
        Self { fallback_date }
    }

    pub fn normalize(&self, fields: &ExtractedFields) -> NormalizedValues {
        NormalizedValues {
            date: normalize_date(fields.raw_date_text.as_deref(), self.fallback_date),
            value: normalize_value(fields.raw_value_text.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deed::DeedExtractor;
    use crate::models::record::FieldStatus;

    #[test]
    fn test_normalize_fields() {
        let fallback = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let mut fields = ExtractedFields::unresolved("x");
        fields.raw_date_text = Some("05/03/2020".to_string());
        fields.raw_value_text = Some("Rs. 1,00,000".to_string());

        let out = Normalizer::new(fallback).normalize(&fields);
        assert_eq!(out.date.value, NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
        assert_eq!(out.value.value, Some(100_000));
        assert_eq!(out.value.status, FieldStatus::Parsed);
    }

    #[test]
    fn test_unresolved_fields() {
        let fallback = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let out = Normalizer::new(fallback).normalize(&ExtractedFields::unresolved("x"));
        assert_eq!(out.date.value, fallback);
        assert_eq!(out.date.status, FieldStatus::Missing);
        assert_eq!(out.value.value, None);
    }

    #[test]
    fn test_labeled_date_with_long_year_is_malformed() {
        let fallback = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let normalizer = Normalizer::new(fallback);

        for text in ["Date: 05/03/20201", "தேதி: 05/03/20201"] {
            let fields = DeedExtractor::new().extract_text(text);
            let out = normalizer.normalize(&fields);
            assert_eq!(fields.raw_date_text.as_deref(), Some("05/03/20201"), "{text}");
            assert_eq!(out.date.status, FieldStatus::Malformed, "{text}");
            assert_eq!(out.date.value, fallback, "{text}");
        }
    }
}
