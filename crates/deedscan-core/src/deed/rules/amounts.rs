//! Rupee amount normalization.

use super::patterns::AMOUNT_DIGITS;
use super::Normalized;
use crate::models::record::FieldStatus;

/// Parse the first digit run of a rupee amount (e.g. "Rs. 1,00,000").
///
/// Grouping commas may sit anywhere, so both lakh (1,00,000) and western
/// (100,000) grouping parse the same. Fractions are not read.
pub fn parse_rupee_amount(text: &str) -> Option<u64> {
    let run = AMOUNT_DIGITS.find(text)?;
    let digits: String = run.as_str().chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Normalize a matched consideration amount.
///
/// A missing amount stays `None`; it is never reported as zero.
pub fn normalize_value(raw: Option<&str>) -> Normalized<Option<u64>> {
    match raw {
        None => Normalized::new(None, FieldStatus::Missing),
        Some(text) => match parse_rupee_amount(text) {
            Some(value) => Normalized::new(Some(value), FieldStatus::Parsed),
            None => Normalized::new(None, FieldStatus::Malformed),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_grouping_styles() {
        assert_eq!(parse_rupee_amount("Rs. 1,00,000"), Some(100_000));
        assert_eq!(parse_rupee_amount("ரூ.1,00,000"), Some(100_000));
        assert_eq!(parse_rupee_amount("Rs 100,000"), Some(100_000));
        assert_eq!(parse_rupee_amount("₹ 12,34,56,789"), Some(123_456_789));
        assert_eq!(parse_rupee_amount("INR 500"), Some(500));
    }

    #[test]
    fn test_fraction_is_ignored() {
        assert_eq!(parse_rupee_amount("Rs. 1,500.75"), Some(1_500));
    }

    #[test]
    fn test_no_digits() {
        assert_eq!(parse_rupee_amount("Rs."), None);
        assert_eq!(normalize_value(Some("Rs.")).status, FieldStatus::Malformed);
    }

    #[test]
    fn test_overflow_is_malformed() {
        let result = normalize_value(Some("Rs. 99999999999999999999999"));
        assert_eq!(result.status, FieldStatus::Malformed);
        assert_eq!(result.value, None);
    }

    #[test]
    fn test_missing_is_not_zero() {
        let result = normalize_value(None);
        assert_eq!(result.value, None);
        assert_eq!(result.status, FieldStatus::Missing);

        let zero = normalize_value(Some("Rs. 0"));
        assert_eq!(zero.value, Some(0));
        assert_eq!(zero.status, FieldStatus::Parsed);
    }
}
