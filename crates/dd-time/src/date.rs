//! `Date` type.
//!
//! Dates are naive proleptic Gregorian calendar dates stored as a serial day
//! number.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 0001 (a Monday), the same numbering as
//!   [`chrono::Datelike::num_days_from_ce`].
//! * The valid date range is 0001-01-01 to 9999-12-31: exactly the dates
//!   whose `YYYYMMDD` key has a four-digit year.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use dd_core::errors::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "NaiveDate", into = "NaiveDate")
)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(d)
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::Date(format!("year {year} out of range [1, 9999]")));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Convert a `chrono` date, rejecting anything outside `[MIN, MAX]`.
    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        Self::from_serial(date.num_days_from_ce())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// The equivalent `chrono` date.
    pub fn naive(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0).expect("serial within the supported range")
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> i32 {
        self.naive().year()
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u32 {
        self.naive().month()
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::of(*self)
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.naive().day()
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u32 {
        self.naive().ordinal()
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday, ordinal 1.
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    /// Return `true` if this is February 29.
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day_of_month() == 29
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {} + {n} overflows", self.0))
        })?;
        if Date(serial) < Self::MIN || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: {self} + {n} day(s) out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Advance by a period expressed in the given time unit.
    ///
    /// Month and year steps keep the day-of-month, clamped to the length of
    /// the target month (January 31 + 1 month = February 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n * 7),
            TimeUnit::Months => {
                let (y, m, d) = (self.year(), self.month(), self.day_of_month());
                let total_months = m as i32 + n;
                // Normalise months to 1–12
                let full_years = total_months.div_euclid(12);
                let rem_months = total_months.rem_euclid(12);
                let (new_m, extra_y) = if rem_months == 0 {
                    (12u32, full_years - 1)
                } else {
                    (rem_months as u32, full_years)
                };
                let new_y = y + extra_y;
                if !(1..=9999).contains(&new_y) {
                    return Err(Error::Date(format!(
                        "date arithmetic: {self} + {n} month(s) reaches year {new_y}"
                    )));
                }
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(n * 12, TimeUnit::Months),
        }
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// The first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        Date(serial_from_ymd(self.year(), self.month(), 1))
    }

    /// The last day of the month containing this date.
    ///
    /// Same as the first of the next month minus one day, without leaving the
    /// supported range in December 9999.
    pub fn end_of_month(self) -> Self {
        let (y, m) = (self.year(), self.month());
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// The first day of the following month.
    ///
    /// Fails only for dates in December 9999.
    pub fn start_of_next_month(self) -> Result<Self> {
        self.start_of_month().advance(1, TimeUnit::Months)
    }

    /// Midnight at the start of this date.
    pub fn start_of_day(self) -> NaiveDateTime {
        self.naive().and_time(NaiveTime::MIN)
    }

    /// 23:59:59 on this date (whole seconds, no sub-second part).
    pub fn end_of_day(self) -> NaiveDateTime {
        let last_second =
            NaiveTime::from_hms_opt(23, 59, 59).expect("23:59:59 is a valid time of day");
        self.naive().and_time(last_second)
    }

    /// Short display form, `"04 May 2019"`.
    pub fn short_display(self) -> String {
        format!(
            "{:02} {} {:04}",
            self.day_of_month(),
            self.month_of_year().short_name(),
            self.year()
        )
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self> {
        Date::from_naive(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.naive()
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("cannot parse {s:?} as YYYY-MM-DD: {e}")))?;
        Date::from_naive(naive)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.naive();
        write!(f, "{:04}-{:02}-{:02}", n.year(), n.month(), n.day())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Serial number of an already validated (year, month, day).
fn serial_from_ymd(year: i32, month: u32, day: u32) -> i32 {
    NaiveDate::from_ymd_opt(year, month, day)
        .expect("components validated by the caller")
        .num_days_from_ce()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
