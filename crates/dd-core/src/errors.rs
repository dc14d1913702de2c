//! Error types for datedim.
//!
//! All errors are local validation failures on malformed input.  None of them
//! is transient, so none of them is worth retrying.

use thiserror::Error;

/// The top-level error type used throughout datedim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An integer does not encode a real calendar date or month in the
    /// expected key format.
    #[error("invalid dimension key {key}: expected a valid {format} value")]
    InvalidKey {
        /// The rejected integer.
        key: i64,
        /// The format the key was checked against (`"YYYYMMDD"` or `"YYYYMM"`).
        format: &'static str,
    },

    /// The requested occurrence of a weekday does not exist in the month.
    #[error("only {count} {weekday}s in {month} {year}, cannot take occurrence {requested}")]
    OutOfRange {
        /// The occurrence that was asked for.
        requested: u32,
        /// How many times the weekday actually occurs in the month.
        count: u32,
        /// Weekday name, e.g. `"Thursday"`.
        weekday: String,
        /// Month name, e.g. `"May"`.
        month: String,
        /// Calendar year.
        year: i32,
    },

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),
}

/// Shorthand `Result` type used throughout datedim.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dd_core::{ensure, errors::Error};
/// fn occurrence(n: u32) -> dd_core::errors::Result<u32> {
///     ensure!(n >= 1, "occurrence must be >= 1, got {n}");
///     Ok(n)
/// }
/// assert!(occurrence(1).is_ok());
/// assert!(matches!(occurrence(0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_key_message() {
        let err = Error::InvalidKey {
            key: 20190004,
            format: "YYYYMMDD",
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension key 20190004: expected a valid YYYYMMDD value"
        );
    }

    #[test]
    fn out_of_range_message_reports_count() {
        let err = Error::OutOfRange {
            requested: 5,
            count: 4,
            weekday: "Thursday".into(),
            month: "May".into(),
            year: 2023,
        };
        let msg = err.to_string();
        assert!(msg.contains("only 4 Thursdays in May 2023"), "{msg}");
    }

    fn checked(n: u32) -> Result<u32> {
        crate::ensure!(n > 0, "n must be positive, got {n}");
        Ok(n)
    }

    #[test]
    fn ensure_macro() {
        assert_eq!(checked(3), Ok(3));
        assert_eq!(
            checked(0),
            Err(Error::Precondition("n must be positive, got 0".into()))
        );
    }
}
