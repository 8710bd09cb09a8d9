//! Wall-clock accessors, rendered under the crate's fixed layouts.

use chrono::Local;

use crate::latin::to_latin;
use crate::layout::{DATE_LAYOUT, DATETIME_LAYOUT};

/// Returns the current local timestamp as `YYYY-MM-DD hh:mm:ss`.
pub fn now() -> String {
    Local::now().format(DATETIME_LAYOUT).to_string()
}

/// Returns the current local date as `YYYY-MM-DD`.
pub fn today() -> String {
    Local::now().format(DATE_LAYOUT).to_string()
}

/// Returns today's date in the Latin rendering of [`to_latin`].
pub fn latin_today(use_words: bool) -> String {
    // today() always renders a full YYYY-MM-DD, so conversion cannot fail
    to_latin(&today(), use_words).expect("today's date is well-formed")
}
