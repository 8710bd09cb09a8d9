/// The error type for all fallible operations in this crate.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DateError {
    /// Returned when an input string does not parse under the date layout.
    #[error("date `{input}` does not match the `YYYY-MM-DD` layout: {source}")]
    UnparseableDate {
        /// The offending input string.
        input: String,
        /// The underlying chrono failure.
        source: chrono::ParseError,
    },

    /// Returned when an input string is too short to carry the fixed
    /// year/month/day offsets.
    #[error("date `{input}` is too short for the `YYYY-MM-DD` layout")]
    TruncatedDate {
        /// The offending input string.
        input: String,
    },

    /// Returned when a two-digit month lookup falls outside `01`..=`12`.
    #[error("invalid month number `{month}`, expected `01` through `12`")]
    InvalidMonth {
        /// The string that failed the lookup.
        month: String,
    },

    /// Returned when an operation string is not among the recognized set.
    #[error("unknown operation `{operation}`, expected `oldest`, `newest` or `next`")]
    InvalidOperation {
        /// The unrecognized operation string.
        operation: String,
    },

    /// Returned when date arithmetic leaves the supported calendar range.
    #[error("date arithmetic left the supported calendar range")]
    OutOfRange,
}
