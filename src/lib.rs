//! # fechas
//!
//! A library for selecting, shifting, and Spanish-formatting dates carried as
//! fixed-layout strings.
//!
//! Dates enter and leave the library as `YYYY-MM-DD` strings and timestamps as
//! `YYYY-MM-DD hh:mm:ss`; the two layouts are published as [`DATE_LAYOUT`] and
//! [`DATETIME_LAYOUT`] and are the crate's whole wire contract. Anything that
//! deviates from them is a parse error, never a best-effort guess.
//!
//! ## Examples
//!
//! Render a date the Latin way, spelled out or slash-separated (the slash form
//! also spells the Spanish month name out):
//!
//! ```
//! use fechas::prelude::*;
//!
//! assert_eq!("16 de junio de 2020", to_latin("2020-06-16", true).unwrap());
//! assert_eq!("16/junio/2020", to_latin("2020-06-16", false).unwrap());
//! ```
//!
//! Pick dates out of a set. Empty strings mark slots already eliminated from
//! consideration and are skipped:
//!
//! ```
//! use fechas::prelude::*;
//!
//! let dates = ["2021-05-01", "2019-12-31", "", "2020-07-04"];
//! let oldest = select_extremal(Extremal::Oldest, &dates).unwrap();
//! assert_eq!(Some("2019-12-31"), oldest.as_deref());
//! ```
//!
//! Shift dates around the calendar:
//!
//! ```
//! use fechas::prelude::*;
//!
//! assert_eq!("2021-02-28", end_of_next_month("2021-01-15").unwrap());
//! assert_eq!("2022-01-01", add_offset("2021-01-15", 1, 0, -14).unwrap());
//! ```
//!
//! ## Errors
//!
//! Every fallible operation returns a [`DateError`]. There are no panics and
//! no silent fallbacks; malformed input, out-of-table months, and unknown
//! operation strings all surface as variants the caller can match on.
#![warn(missing_docs)]

mod arith;
mod clock;
mod error;
mod latin;
mod layout;
mod select;

pub use crate::arith::{add_offset, end_of_next_month};
pub use crate::clock::{latin_today, now, today};
pub use crate::error::DateError;
pub use crate::latin::{month_name, to_latin};
pub use crate::layout::{format_date, parse_date, DATE_LAYOUT, DATETIME_LAYOUT};
pub use crate::select::{
    compare_dates, next_future_after, select_extremal, select_next_future, Extremal, Operation,
};

/// A convenience module appropriate for glob imports (`use fechas::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::add_offset;
    #[doc(no_inline)]
    pub use crate::compare_dates;
    #[doc(no_inline)]
    pub use crate::end_of_next_month;
    #[doc(no_inline)]
    pub use crate::format_date;
    #[doc(no_inline)]
    pub use crate::latin_today;
    #[doc(no_inline)]
    pub use crate::month_name;
    #[doc(no_inline)]
    pub use crate::next_future_after;
    #[doc(no_inline)]
    pub use crate::now;
    #[doc(no_inline)]
    pub use crate::parse_date;
    #[doc(no_inline)]
    pub use crate::select_extremal;
    #[doc(no_inline)]
    pub use crate::select_next_future;
    #[doc(no_inline)]
    pub use crate::to_latin;
    #[doc(no_inline)]
    pub use crate::today;
    #[doc(no_inline)]
    pub use crate::DateError;
    #[doc(no_inline)]
    pub use crate::Extremal;
    #[doc(no_inline)]
    pub use crate::Operation;
    #[doc(no_inline)]
    pub use crate::DATETIME_LAYOUT;
    #[doc(no_inline)]
    pub use crate::DATE_LAYOUT;
}
