//! Dimension keys: compact integer encodings of a date (`YYYYMMDD`) and of a
//! year-month (`YYYYMM`).
//!
//! [`DateDimKey`] and [`MonthDimKey`] can only be built through a validating
//! constructor or from a [`Date`], so holding one proves the integer decodes
//! to a real calendar date or month.

use dd_core::errors::{Error, Result};
use dd_time::{Date, TimeUnit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Format name reported by [`Error::InvalidKey`] for date keys.
pub const DATE_KEY_FORMAT: &str = "YYYYMMDD";

/// Format name reported by [`Error::InvalidKey`] for month keys.
pub const MONTH_KEY_FORMAT: &str = "YYYYMM";

// ── Codec ─────────────────────────────────────────────────────────────────────

/// Encode `date` as `YYYYMMDD`.
pub fn encode_date_key(date: Date) -> DateDimKey {
    DateDimKey(encode_month_key(date).0 * 100 + date.day_of_month() as i64)
}

/// Encode the year-month of `date` as `YYYYMM`.
pub fn encode_month_key(date: Date) -> MonthDimKey {
    MonthDimKey(date.year() as i64 * 100 + date.month() as i64)
}

/// Decode a `YYYYMMDD` integer.
///
/// # Errors
/// [`Error::InvalidKey`] if the integer is not a real calendar date, e.g.
/// `20190004` (day 00) or `20191301` (month 13).
pub fn decode_date_key(key: i64) -> Result<Date> {
    let invalid = || Error::InvalidKey {
        key,
        format: DATE_KEY_FORMAT,
    };
    if key < 0 {
        return Err(invalid());
    }
    let year = i32::try_from(key / 10_000).map_err(|_| invalid())?;
    let month = ((key / 100) % 100) as u32;
    let day = (key % 100) as u32;
    Date::from_ymd(year, month, day).map_err(|_| invalid())
}

/// Decode a `YYYYMM` integer to the first day of that month.
///
/// # Errors
/// [`Error::InvalidKey`] if the integer is not a real year-month, e.g.
/// `201900` or `201913`.
pub fn decode_month_key(key: i64) -> Result<Date> {
    let invalid = || Error::InvalidKey {
        key,
        format: MONTH_KEY_FORMAT,
    };
    if key < 0 {
        return Err(invalid());
    }
    let year = i32::try_from(key / 100).map_err(|_| invalid())?;
    let month = (key % 100) as u32;
    Date::from_ymd(year, month, 1).map_err(|_| invalid())
}

// ── DateDimKey ────────────────────────────────────────────────────────────────

/// A validated `YYYYMMDD` date key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct DateDimKey(i64);

impl DateDimKey {
    /// Validate `value` as a `YYYYMMDD` date key.
    ///
    /// ```
    /// use dd_dimensions::DateDimKey;
    /// assert!(DateDimKey::new(20190504).is_ok());
    /// assert!(DateDimKey::new(20190004).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self> {
        decode_date_key(value).map(|_| Self(value))
    }

    /// The raw integer.
    pub fn value(self) -> i64 {
        self.0
    }

    /// The date this key encodes.
    pub fn to_date(self) -> Date {
        decode_date_key(self.0).expect("DateDimKey is validated at construction")
    }

    /// The key of the following day.
    pub fn next(self) -> Result<Self> {
        self.to_date().add_days(1).map(encode_date_key)
    }

    /// The key of the preceding day.
    pub fn previous(self) -> Result<Self> {
        self.to_date().add_days(-1).map(encode_date_key)
    }

    /// The key of the month containing this date (`key / 100`).
    pub fn month_key(self) -> MonthDimKey {
        MonthDimKey(self.0 / 100)
    }
}

impl From<Date> for DateDimKey {
    fn from(date: Date) -> Self {
        encode_date_key(date)
    }
}

impl TryFrom<i64> for DateDimKey {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<DateDimKey> for i64 {
    fn from(key: DateDimKey) -> i64 {
        key.0
    }
}

impl std::fmt::Display for DateDimKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── MonthDimKey ───────────────────────────────────────────────────────────────

/// A validated `YYYYMM` month key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "i64", into = "i64")
)]
pub struct MonthDimKey(i64);

impl MonthDimKey {
    /// Validate `value` as a `YYYYMM` month key.
    pub fn new(value: i64) -> Result<Self> {
        decode_month_key(value).map(|_| Self(value))
    }

    /// The raw integer.
    pub fn value(self) -> i64 {
        self.0
    }

    /// The first day of the month this key encodes.
    pub fn to_date(self) -> Date {
        decode_month_key(self.0).expect("MonthDimKey is validated at construction")
    }

    /// The key of the following month.
    pub fn next(self) -> Result<Self> {
        self.to_date().advance(1, TimeUnit::Months).map(encode_month_key)
    }

    /// The key of the preceding month.
    pub fn previous(self) -> Result<Self> {
        self.to_date().advance(-1, TimeUnit::Months).map(encode_month_key)
    }

    /// Calendar year part.
    pub fn year(self) -> i32 {
        (self.0 / 100) as i32
    }

    /// Month part (1–12).
    pub fn month(self) -> u32 {
        (self.0 % 100) as u32
    }
}

impl From<Date> for MonthDimKey {
    fn from(date: Date) -> Self {
        encode_month_key(date)
    }
}

impl TryFrom<i64> for MonthDimKey {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MonthDimKey> for i64 {
    fn from(key: MonthDimKey) -> i64 {
        key.0
    }
}

impl std::fmt::Display for MonthDimKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
