//! The fixed string layouts that dates travel in.
//!
//! These two constants are the whole wire contract of the crate: every date
//! accepted or produced by the library conforms to one of them. Deviation is a
//! parse error, not a best-effort recovery.

use chrono::NaiveDate;

use crate::error::DateError;

/// Layout for date-only values, `YYYY-MM-DD` (ISO 8601).
pub const DATE_LAYOUT: &str = "%Y-%m-%d";

/// Layout for timestamp values, `YYYY-MM-DD hh:mm:ss`.
pub const DATETIME_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Parses a date string under [`DATE_LAYOUT`].
///
/// # Errors
///
/// - Returns a [`DateError::UnparseableDate`] carrying the offending input if
///   the string does not match the layout.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(input, DATE_LAYOUT).map_err(|source| {
        log::debug!("failed to parse date `{input}`: {source}");
        DateError::UnparseableDate {
            input: input.to_owned(),
            source,
        }
    })
}

/// Renders a date under [`DATE_LAYOUT`].
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_LAYOUT).to_string()
}
