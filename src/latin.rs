//! Latin-style rendering of ISO 8601 dates, with Spanish month names.

use crate::error::DateError;

/// Returns the Spanish name for a zero-padded two-digit month number.
///
/// The lookup is exact: `"01"` maps to `"enero"`, `"12"` to `"diciembre"`, and
/// nothing else matches (`"1"` does not).
///
/// # Errors
///
/// - Returns a [`DateError::InvalidMonth`] for any input outside `"01"`
///   through `"12"`.
pub fn month_name(number: &str) -> Result<&'static str, DateError> {
    let name = match number {
        "01" => "enero",
        "02" => "febrero",
        "03" => "marzo",
        "04" => "abril",
        "05" => "mayo",
        "06" => "junio",
        "07" => "julio",
        "08" => "agosto",
        "09" => "septiembre",
        "10" => "octubre",
        "11" => "noviembre",
        "12" => "diciembre",
        other => {
            return Err(DateError::InvalidMonth {
                month: other.to_owned(),
            })
        }
    };
    Ok(name)
}

/// Converts an ISO 8601 date string to its Latin-style rendering.
///
/// The year, month, and day are taken from the fixed byte offsets of the
/// `YYYY-MM-DD` layout (`0..4`, `5..7`, `8..10`); anything past the tenth
/// character, such as a time-of-day suffix, is ignored. With `use_words` the
/// result reads like `16 de junio de 2020`; without it, `16/junio/2020`.
///
/// Note that the slash form still spells the month out. It never renders a
/// two-digit month numeral.
///
/// # Errors
///
/// - Returns a [`DateError::TruncatedDate`] if the input is too short for the
///   fixed offsets.
/// - Returns a [`DateError::InvalidMonth`] if the month substring is not
///   `01` through `12`.
pub fn to_latin(date: &str, use_words: bool) -> Result<String, DateError> {
    let (year, month, day) = match (date.get(0..4), date.get(5..7), date.get(8..10)) {
        (Some(year), Some(month), Some(day)) => (year, month, day),
        _ => {
            return Err(DateError::TruncatedDate {
                input: date.to_owned(),
            })
        }
    };
    let month = month_name(month)?;

    if use_words {
        Ok(format!("{day} de {month} de {year}"))
    } else {
        Ok(format!("{day}/{month}/{year}"))
    }
}
