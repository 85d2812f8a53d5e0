//! Date normalization for deed text.

use chrono::NaiveDate;

use super::patterns::DATE_DMY;
use super::Normalized;
use crate::models::record::FieldStatus;

/// Parse a day-first `DD/MM/YYYY` or `DD-MM-YYYY` date.
///
/// Separators may be mixed. Returns `None` when the shape is absent or the
/// components are not a calendar date.
pub fn parse_day_first(text: &str) -> Option<NaiveDate> {
    let caps = DATE_DMY.captures(text)?;
    let day: u32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Normalize a matched date, substituting `fallback` when it is absent or
/// unparseable.
pub fn normalize_date(raw: Option<&str>, fallback: NaiveDate) -> Normalized<NaiveDate> {
    match raw {
        None => Normalized::new(fallback, FieldStatus::Missing),
        Some(text) => match parse_day_first(text) {
            Some(date) => Normalized::new(date, FieldStatus::Parsed),
            None => Normalized::new(fallback, FieldStatus::Malformed),
        },
    }
}
