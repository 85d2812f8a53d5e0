//! Record filters shared by upload-time selection and stored-record search.

use serde::{Deserialize, Serialize};

use super::record::TransactionRecord;

/// Optional, conjunctive record filters.
///
/// Name filters are case-insensitive substrings of the translated names;
/// number filters are exact token matches. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSpec {
    pub buyer_name: Option<String>,
    pub seller_name: Option<String>,
    pub house_number: Option<String>,
    pub survey_number: Option<String>,
    pub document_number: Option<String>,
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl FilterSpec {
    /// Filter that matches every record.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_buyer_name(mut self, name: impl Into<String>) -> Self {
        self.buyer_name = Some(name.into());
        self
    }

    pub fn with_seller_name(mut self, name: impl Into<String>) -> Self {
        self.seller_name = Some(name.into());
        self
    }

    pub fn with_house_number(mut self, number: impl Into<String>) -> Self {
        self.house_number = Some(number.into());
        self
    }

    pub fn with_survey_number(mut self, number: impl Into<String>) -> Self {
        self.survey_number = Some(number.into());
        self
    }

    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    /// True when no filter is set.
    pub fn is_empty(&self) -> bool {
        active(&self.buyer_name).is_none()
            && active(&self.seller_name).is_none()
            && active(&self.house_number).is_none()
            && active(&self.survey_number).is_none()
            && active(&self.document_number).is_none()
    }

    /// Check a record against every set filter.
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        if let Some(buyer) = active(&self.buyer_name) {
            if !contains_ignore_case(&record.buyer_name_translated, buyer) {
                return false;
            }
        }
        if let Some(seller) = active(&self.seller_name) {
            if !contains_ignore_case(&record.seller_name_translated, seller) {
                return false;
            }
        }
        if let Some(house) = active(&self.house_number) {
            if record.fields.house_number.as_deref() != Some(house) {
                return false;
            }
        }
        if let Some(survey) = active(&self.survey_number) {
            if record.fields.survey_number != survey {
                return false;
            }
        }
        if let Some(document) = active(&self.document_number) {
            if record.fields.document_number != document {
                return false;
            }
        }
        true
    }
}
