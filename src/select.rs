//! Selection of extremal and next-future dates from a set of date strings.
//!
//! A date collection is an ordered sequence of `YYYY-MM-DD` strings in which
//! an empty string marks a slot that has already been eliminated from
//! consideration. Selection skips those slots, borrows the input, and returns
//! only the computed result; the caller's sequence is never touched.

use core::fmt::{self, Display};
use core::str::FromStr;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateError;
use crate::layout::parse_date;

/// Which end of the date ordering [`select_extremal`] keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extremal {
    /// Keep the earliest date.
    Oldest,
    /// Keep the latest date.
    Newest,
}

/// Operations understood by [`compare_dates`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Select the earliest date, as `"oldest"`.
    Oldest,
    /// Select the latest date, as `"newest"`.
    Newest,
    /// Select the nearest date still in the future, as `"next"`.
    NextFuture,
}

impl FromStr for Operation {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "oldest" => Ok(Operation::Oldest),
            "newest" => Ok(Operation::Newest),
            "next" => Ok(Operation::NextFuture),
            other => Err(DateError::InvalidOperation {
                operation: other.to_owned(),
            }),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Oldest => "oldest",
            Operation::Newest => "newest",
            Operation::NextFuture => "next",
        };
        f.write_str(name)
    }
}

/// Returns the oldest or newest date in `dates`, skipping eliminated slots.
///
/// Comparison is strict, so among entries that denote the same calendar date
/// the first one in sequence order wins. Returns `Ok(None)` when every slot is
/// empty; callers must check for this degenerate case.
///
/// # Examples
///
/// ```
/// use fechas::prelude::*;
///
/// let dates = ["2021-05-01", "", "2019-12-31", "2020-07-04"];
/// let oldest = select_extremal(Extremal::Oldest, &dates).unwrap();
/// assert_eq!(Some("2019-12-31"), oldest.as_deref());
/// ```
///
/// # Errors
///
/// - Returns a [`DateError::UnparseableDate`] if any non-empty entry does not
///   match the date layout.
pub fn select_extremal<S: AsRef<str>>(
    extremal: Extremal,
    dates: &[S],
) -> Result<Option<String>, DateError> {
    let mut best: Option<(&str, NaiveDate)> = None;

    for entry in dates {
        let entry = entry.as_ref();
        if entry.is_empty() {
            continue;
        }
        let parsed = parse_date(entry)?;
        let replace = match best {
            None => true,
            Some((_, current)) => match extremal {
                Extremal::Oldest => parsed < current,
                Extremal::Newest => parsed > current,
            },
        };
        if replace {
            best = Some((entry, parsed));
        }
    }

    Ok(best.map(|(winner, _)| winner.to_owned()))
}

/// Returns the earliest date in `dates` whose day has not yet begun at
/// `moment`.
///
/// An entry is eliminated when `moment` lies past its midnight, so a date
/// equal to `moment`'s own day only survives at exactly midnight. The
/// survivors then go through an oldest-selection. Returns `Ok(None)` when
/// nothing lies in the future.
///
/// # Errors
///
/// - Returns a [`DateError::UnparseableDate`] if any non-empty entry does not
///   match the date layout.
pub fn next_future_after<S: AsRef<str>>(
    moment: NaiveDateTime,
    dates: &[S],
) -> Result<Option<String>, DateError> {
    let mut surviving = Vec::with_capacity(dates.len());

    for entry in dates {
        let entry = entry.as_ref();
        if entry.is_empty() {
            continue;
        }
        let start = parse_date(entry)?.and_time(NaiveTime::MIN);
        if moment > start {
            continue;
        }
        surviving.push(entry);
    }

    select_extremal(Extremal::Oldest, &surviving)
}

/// Returns the nearest future date in `dates`, anchored at the current local
/// moment.
///
/// See [`next_future_after`] for the elimination rule and error conditions.
pub fn select_next_future<S: AsRef<str>>(dates: &[S]) -> Result<Option<String>, DateError> {
    next_future_after(Local::now().naive_local(), dates)
}

/// Dispatches to the selection matching `operation`.
///
/// Recognized operation strings are `"oldest"`, `"newest"`, and `"next"`; see
/// [`Operation`].
///
/// # Errors
///
/// - Returns a [`DateError::InvalidOperation`] for any other operation string.
/// - Returns a [`DateError::UnparseableDate`] if any non-empty entry does not
///   match the date layout.
pub fn compare_dates<S: AsRef<str>>(
    operation: &str,
    dates: &[S],
) -> Result<Option<String>, DateError> {
    match operation.parse::<Operation>()? {
        Operation::Oldest => select_extremal(Extremal::Oldest, dates),
        Operation::Newest => select_extremal(Extremal::Newest, dates),
        Operation::NextFuture => select_next_future(dates),
    }
}
