//! Per-block field extraction.

use tracing::trace;

use super::rules::{
    patterns::{
        BUYER_NAME_RULE, DATE_RULE, DISTRICT_RULE, DOCUMENT_NUMBER_RULE, HOUSE_NUMBER_RULE,
        SELLER_NAME_RULE, SURVEY_NUMBER_RULE, VALUE_RULE,
    },
    FieldExtractor, FieldRule,
};
use crate::models::record::{ExtractedFields, RawBlock, UNKNOWN};

/// Extracts [`ExtractedFields`] from a block using the bilingual rule set.
///
/// Extraction is pure: the same text always yields the same fields, and
/// missing fields never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeedExtractor;

impl DeedExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract all fields from a block.
    pub fn extract_block(&self, block: &RawBlock) -> ExtractedFields {
        self.extract_text(&block.text)
    }

    /// Extract all fields from block text.
    pub fn extract_text(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            buyer_name: required(&BUYER_NAME_RULE, text),
            seller_name: required(&SELLER_NAME_RULE, text),
            house_number: optional(&HOUSE_NUMBER_RULE, text),
            survey_number: required(&SURVEY_NUMBER_RULE, text),
            document_number: required(&DOCUMENT_NUMBER_RULE, text),
            raw_date_text: optional(&DATE_RULE, text),
            raw_value_text: optional(&VALUE_RULE, text),
            district: optional(&DISTRICT_RULE, text),
            source_text: text.to_string(),
        }
    }
}

fn optional(rule: &FieldRule, text: &str) -> Option<String> {
    let found = rule.extract(text)?;
    trace!("{} matched {:?} label", rule.name(), found.script);
    Some(found.value)
}

fn required(rule: &FieldRule, text: &str) -> String {
    optional(rule, text).unwrap_or_else(|| UNKNOWN.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_english_block() {
        let text = "Document No: 1234/2020\n\
                    Date: 05/03/2020\n\
                    Buyer: Ravi Kumar\n\
                    Seller: Meena Devi\n\
                    House No: 12A\n\
                    Survey No: 45/2\n\
                    District: Chennai\n\
                    Consideration Rs. 1,00,000";

        let fields = DeedExtractor::new().extract_text(text);

        assert_eq!(
            fields,
            ExtractedFields {
                buyer_name: "Ravi Kumar".to_string(),
                seller_name: "Meena Devi".to_string(),
                house_number: Some("12A".to_string()),
                survey_number: "45/2".to_string(),
                document_number: "1234/2020".to_string(),
                raw_date_text: Some("05/03/2020".to_string()),
                raw_value_text: Some("Rs. 1,00,000".to_string()),
                district: Some("Chennai".to_string()),
                source_text: text.to_string(),
            }
        );
    }

    #[test]
    fn test_extract_tamil_block() {
        let text = "வ.எண். 567/2019\n\
                    தேதி: 12-11-2019\n\
                    வாங்குபவர்: முருகன்\n\
                    விற்பவர்: லட்சுமி\n\
                    வீடு எண். 7\n\
                    சர்வே எண். 101/3B\n\
                    மாவட்டம்: மதுரை\n\
                    மதிப்பு ரூ.2,50,000";

        let fields = DeedExtractor::new().extract_text(text);

        assert_eq!(fields.document_number, "567/2019");
        assert_eq!(fields.raw_date_text.as_deref(), Some("12-11-2019"));
        assert_eq!(fields.buyer_name, "முருகன்");
        assert_eq!(fields.seller_name, "லட்சுமி");
        assert_eq!(fields.house_number.as_deref(), Some("7"));
        assert_eq!(fields.survey_number, "101/3");
        assert_eq!(fields.district.as_deref(), Some("மதுரை"));
        assert_eq!(fields.raw_value_text.as_deref(), Some("ரூ.2,50,000"));
    }

    #[test]
    fn test_missing_required_fields_use_sentinel() {
        let fields = DeedExtractor::new().extract_text("Some unrelated line\nand another");

        assert_eq!(fields.survey_number, UNKNOWN);
        assert_eq!(fields.document_number, UNKNOWN);
        assert_eq!(fields.buyer_name, UNKNOWN);
        assert_eq!(fields.seller_name, UNKNOWN);
        assert_eq!(fields.house_number, None);
        assert_eq!(fields.district, None);
        assert_eq!(fields.raw_date_text, None);
        assert_eq!(fields.raw_value_text, None);
    }

    #[test]
    fn test_survey_label_without_number_is_unknown() {
        let fields = DeedExtractor::new().extract_text("Survey No: pending\nDocument No: -");
        assert_eq!(fields.survey_number, UNKNOWN);
        assert_eq!(fields.document_number, UNKNOWN);
    }

    #[test]
    fn test_value_without_marker_is_absent() {
        let fields = DeedExtractor::new().extract_text("Document No: 1\nValue 1,00,000");
        assert_eq!(fields.raw_value_text, None);
    }

    #[test]
    fn test_unlabeled_date_is_found() {
        let fields = DeedExtractor::new().extract_text("Registered on 5/3/2020 at Salem");
        assert_eq!(fields.raw_date_text.as_deref(), Some("5/3/2020"));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = DeedExtractor::new();
        let block = RawBlock {
            ordinal: 3,
            text: "Document No: 9/2022\nBuyer: Anand".to_string(),
        };
        assert_eq!(extractor.extract_block(&block), extractor.extract_block(&block));
    }
}
