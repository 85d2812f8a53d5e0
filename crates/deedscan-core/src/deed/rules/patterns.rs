//! Regex patterns for bilingual (Tamil / English) deed extraction.
//!
//! `[^\S\n]` is horizontal whitespace: no pattern may cross a line break
//! between a label and its value.

use lazy_static::lazy_static;
use regex::Regex;

use super::{FieldRule, Script};

lazy_static! {
    // Block anchors
    pub static ref ANCHOR_DOC_NO_TA: Regex = Regex::new(r"வ\.எண்").unwrap();
    pub static ref ANCHOR_DOCUMENT_TA: Regex = Regex::new(r"ஆவணம்").unwrap();
    pub static ref ANCHOR_DOCUMENT_EN: Regex = Regex::new(r"(?i)Document\s*No").unwrap();

    // Document number (வ.எண். 1234/2020 or Document No: 1234/2020)
    pub static ref DOCUMENT_NUMBER_TA: Regex = Regex::new(
        r"(?:வ\.[^\S\n]*எண்|ஆவண[^\S\n]*எண்)\.?[^\S\n]*:?[^\S\n]*([0-9][0-9/\-]*)"
    ).unwrap();

    pub static ref DOCUMENT_NUMBER_EN: Regex = Regex::new(
        r"(?i:Document[^\S\n]*No)\.?[^\S\n]*:?[^\S\n]*([0-9][0-9/\-]*)"
    ).unwrap();

    // Survey number (சர்வே எண். 123/4 or Survey No: 123/4)
    pub static ref SURVEY_NUMBER_TA: Regex = Regex::new(
        r"சர்வே[^\S\n]*எண்\.?[^\S\n]*:?[^\S\n]*([0-9][0-9/\-]*)"
    ).unwrap();

    pub static ref SURVEY_NUMBER_EN: Regex = Regex::new(
        r"(?i:Survey[^\S\n]*No)\.?[^\S\n]*:?[^\S\n]*([0-9][0-9/\-]*)"
    ).unwrap();

    // House number; the value itself is case-sensitive (uppercase letters only)
    pub static ref HOUSE_NUMBER_TA: Regex = Regex::new(
        r"வீடு[^\S\n]*எண்\.?[^\S\n]*:?[^\S\n]*([0-9A-Z][0-9A-Z/\-]*)"
    ).unwrap();

    pub static ref HOUSE_NUMBER_EN: Regex = Regex::new(
        r"(?i:House[^\S\n]*No)\.?[^\S\n]*:?[^\S\n]*([0-9A-Z][0-9A-Z/\-]*)"
    ).unwrap();

    // Party names run to the end of the line
    pub static ref BUYER_NAME_TA: Regex = Regex::new(
        r"வாங்குபவர்(?:[^\S\n]*பெயர்)?[^\S\n]*:?([^\n]*)"
    ).unwrap();

    pub static ref BUYER_NAME_EN: Regex = Regex::new(
        r"\b(?i:Buyer(?:[^\S\n]*Name)?)\b[^\S\n]*:?([^\n]*)"
    ).unwrap();

    pub static ref SELLER_NAME_TA: Regex = Regex::new(
        r"விற்பவர்(?:[^\S\n]*பெயர்)?[^\S\n]*:?([^\n]*)"
    ).unwrap();

    pub static ref SELLER_NAME_EN: Regex = Regex::new(
        r"\b(?i:Seller(?:[^\S\n]*Name)?)\b[^\S\n]*:?([^\n]*)"
    ).unwrap();

    // District
    pub static ref DISTRICT_TA: Regex = Regex::new(
        r"மாவட்டம்[^\S\n]*:?([^\n]*)"
    ).unwrap();

    pub static ref DISTRICT_EN: Regex = Regex::new(
        r"\b(?i:District)\b[^\S\n]*:?([^\n]*)"
    ).unwrap();

    // Dates: DD/MM/YYYY or DD-MM-YYYY. Labeled dates keep the whole year
    // digit run so the normalizer can reject wrong-length years.
    pub static ref DATE_TA: Regex = Regex::new(
        r"தேதி[^\S\n]*:?[^\S\n]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]+)"
    ).unwrap();

    pub static ref DATE_EN: Regex = Regex::new(
        r"\b(?i:Date)\b[^\S\n]*:?[^\S\n]*([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]+)"
    ).unwrap();

    pub static ref DATE_ANY: Regex = Regex::new(
        r"(?:^|[^0-9/\-])([0-9]{1,2}[/\-][0-9]{1,2}[/\-][0-9]{4})(?:$|[^0-9])"
    ).unwrap();

    // Date shape accepted by the normalizer
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(?:^|[^0-9])([0-9]{1,2})[/\-]([0-9]{1,2})[/\-]([0-9]{4})(?:$|[^0-9])"
    ).unwrap();

    // Consideration: currency marker followed by digits with grouping commas
    pub static ref VALUE_TA: Regex = Regex::new(
        r"(ரூ\.?[^\S\n]*[0-9][0-9,]*)"
    ).unwrap();

    pub static ref VALUE_EN: Regex = Regex::new(
        r"((?i:\bRs\.?|\bINR|₹)[^\S\n]*[0-9][0-9,]*)"
    ).unwrap();

    // Digit run accepted by the normalizer
    pub static ref AMOUNT_DIGITS: Regex = Regex::new(r"[0-9][0-9,]*").unwrap();

    // Field rules, Tamil label first, then Latin, then unlabeled shapes
    pub static ref BUYER_NAME_RULE: FieldRule = FieldRule::new(
        "buyer_name",
        vec![(Script::Tamil, &*BUYER_NAME_TA), (Script::Latin, &*BUYER_NAME_EN)],
    );

    pub static ref SELLER_NAME_RULE: FieldRule = FieldRule::new(
        "seller_name",
        vec![(Script::Tamil, &*SELLER_NAME_TA), (Script::Latin, &*SELLER_NAME_EN)],
    );

    pub static ref DISTRICT_RULE: FieldRule = FieldRule::new(
        "district",
        vec![(Script::Tamil, &*DISTRICT_TA), (Script::Latin, &*DISTRICT_EN)],
    );

    pub static ref SURVEY_NUMBER_RULE: FieldRule = FieldRule::new(
        "survey_number",
        vec![(Script::Tamil, &*SURVEY_NUMBER_TA), (Script::Latin, &*SURVEY_NUMBER_EN)],
    );

    pub static ref DOCUMENT_NUMBER_RULE: FieldRule = FieldRule::new(
        "document_number",
        vec![(Script::Tamil, &*DOCUMENT_NUMBER_TA), (Script::Latin, &*DOCUMENT_NUMBER_EN)],
    );

    pub static ref HOUSE_NUMBER_RULE: FieldRule = FieldRule::new(
        "house_number",
        vec![(Script::Tamil, &*HOUSE_NUMBER_TA), (Script::Latin, &*HOUSE_NUMBER_EN)],
    );

    pub static ref DATE_RULE: FieldRule = FieldRule::new(
        "transaction_date",
        vec![
            (Script::Tamil, &*DATE_TA),
            (Script::Latin, &*DATE_EN),
            (Script::Any, &*DATE_ANY),
        ],
    );

    pub static ref VALUE_RULE: FieldRule = FieldRule::new(
        "transaction_value",
        vec![(Script::Tamil, &*VALUE_TA), (Script::Latin, &*VALUE_EN)],
    );
}

/// Default block anchors.
pub fn default_anchors() -> Vec<&'static Regex> {
    vec![&*ANCHOR_DOC_NO_TA, &*ANCHOR_DOCUMENT_TA, &*ANCHOR_DOCUMENT_EN]
}
