//! Calendar-aware arithmetic over fixed-layout date strings.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::DateError;
use crate::layout::{format_date, parse_date};

/// Moves `date` by a whole number of months, keeping the day-of-month.
///
/// When the day overflows the target month it rolls forward into the
/// following one, e.g. the 31st plus one month from January lands on March
/// 3rd. Returns `None` when the result leaves chrono's representable range.
fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let total = i64::from(date.year()) * 12 + i64::from(date.month0()) + months;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = total.rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(date.day0())))
}

/// Adds signed year, month, and day offsets to a `YYYY-MM-DD` date string.
///
/// Years and months are applied together as whole months, then days. The
/// overflow convention rolls forward: a day-of-month past the target month's
/// end spills into the following month instead of clamping, so
/// `add_offset("2021-01-31", 0, 1, 0)` yields `"2021-03-03"`.
///
/// # Examples
///
/// ```
/// use fechas::prelude::*;
///
/// assert_eq!("2022-01-01", add_offset("2021-01-15", 1, 0, -14).unwrap());
/// assert_eq!("2021-03-03", add_offset("2021-01-31", 0, 1, 0).unwrap());
/// ```
///
/// # Errors
///
/// - Returns a [`DateError::UnparseableDate`] if `date` does not match the
///   date layout.
/// - Returns a [`DateError::OutOfRange`] if the result leaves the supported
///   calendar range.
pub fn add_offset(date: &str, years: i32, months: i32, days: i32) -> Result<String, DateError> {
    let parsed = parse_date(date)?;
    let shifted = shift_months(parsed, i64::from(years) * 12 + i64::from(months))
        .and_then(|d| d.checked_add_signed(Duration::days(i64::from(days))))
        .ok_or(DateError::OutOfRange)?;
    Ok(format_date(shifted))
}

/// Returns the last calendar day of the month following the input's month.
///
/// The day is forced to 1, two months are added, and one day subtracted.
///
/// # Errors
///
/// - Returns a [`DateError::UnparseableDate`] if `date` does not match the
///   date layout.
/// - Returns a [`DateError::OutOfRange`] if the result leaves the supported
///   calendar range.
pub fn end_of_next_month(date: &str) -> Result<String, DateError> {
    let parsed = parse_date(date)?;
    let end = parsed
        .with_day(1)
        .and_then(|first| shift_months(first, 2))
        .and_then(|d| d.pred_opt())
        .ok_or(DateError::OutOfRange)?;
    Ok(format_date(end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_offset_table() {
        let args = [
            ("2021-01-15", 0, 0, 0, "2021-01-15"),
            ("2021-01-15", 0, 0, 17, "2021-02-01"),
            ("2021-01-15", 0, 0, -15, "2020-12-31"),
            ("2021-01-15", 0, 2, 0, "2021-03-15"),
            ("2021-01-15", 0, -1, 0, "2020-12-15"),
            ("2020-11-15", 0, 2, 0, "2021-01-15"),
            ("2021-01-15", 3, 0, 0, "2024-01-15"),
            ("2021-01-15", -1, 0, 0, "2020-01-15"),
            ("2021-01-15", 1, 2, 3, "2022-03-18"),
        ];

        for (date, years, months, days, expected) in args {
            assert_eq!(Ok(expected.to_owned()), add_offset(date, years, months, days));
        }
    }

    /// Day-of-month overflow rolls forward into the following month; it does
    /// not clamp to the month's end.
    #[test]
    fn test_add_offset_rolls_over_month_end() {
        let args = [
            ("2021-01-31", 0, 1, 0, "2021-03-03"),
            ("2020-01-31", 0, 1, 0, "2020-03-02"),
            ("2020-02-29", 1, 0, 0, "2021-03-01"),
            ("2021-03-31", 0, -1, 0, "2021-03-03"),
        ];

        for (date, years, months, days, expected) in args {
            assert_eq!(Ok(expected.to_owned()), add_offset(date, years, months, days));
        }
    }

    #[test]
    fn test_add_offset_bad_input() {
        let inputs = ["", "15/01/2021", "2021-01-32"];

        for input in inputs {
            assert!(matches!(
                add_offset(input, 0, 0, 1),
                Err(DateError::UnparseableDate { .. })
            ));
        }
    }

    #[test]
    fn test_end_of_next_month_table() {
        let args = [
            ("2021-01-15", "2021-02-28"),
            ("2020-01-15", "2020-02-29"),
            ("2021-11-30", "2021-12-31"),
            ("2021-12-10", "2022-01-31"),
            ("2024-01-31", "2024-02-29"),
        ];

        for (date, expected) in args {
            assert_eq!(Ok(expected.to_owned()), end_of_next_month(date));
        }
    }

    #[test]
    fn test_end_of_next_month_bad_input() {
        assert!(matches!(
            end_of_next_month("enero"),
            Err(DateError::UnparseableDate { .. })
        ));
    }

    #[test]
    fn test_shift_months_identity() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
        assert_eq!(Some(date), shift_months(date, 0));
    }

    #[test]
    fn test_shift_months_across_year_boundaries() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 15).unwrap();
        let expected = NaiveDate::from_ymd_opt(2019, 12, 15).unwrap();
        assert_eq!(Some(expected), shift_months(date, -18));
    }
}
