//! Conversions between naive date-times and epoch timestamps.
//!
//! All timestamps count from `1970-01-01T00:00:00` and are interpreted as
//! UTC; no local-time conversion happens here.

use chrono::{DateTime, NaiveDateTime};
use dd_core::errors::{Error, Result};

/// Whole seconds since the Unix epoch, truncated toward zero.
pub fn to_unix_timestamp(value: NaiveDateTime) -> i64 {
    // `timestamp()` floors; integer division truncates
    value.and_utc().timestamp_millis() / 1000
}

/// The date-time `seconds` after the Unix epoch.
pub fn from_unix_timestamp(seconds: i64) -> Result<NaiveDateTime> {
    DateTime::from_timestamp(seconds, 0)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::Date(format!("unix timestamp {seconds} out of range")))
}

/// Fractional seconds since the Unix epoch, millisecond precision.
pub fn to_epoch_seconds_f64(value: NaiveDateTime) -> f64 {
    value.and_utc().timestamp_millis() as f64 / 1000.0
}

/// The date-time `seconds` (fractional) after the Unix epoch.
///
/// The value is scaled to whole milliseconds before conversion.
pub fn from_epoch_seconds_f64(seconds: f64) -> Result<NaiveDateTime> {
    if !seconds.is_finite() {
        return Err(Error::InvalidArgument(format!(
            "epoch seconds must be finite, got {seconds}"
        )));
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(Error::Date(format!("epoch seconds {seconds} out of range")));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|dt| dt.naive_utc())
        .ok_or_else(|| Error::Date(format!("epoch seconds {seconds} out of range")))
}
