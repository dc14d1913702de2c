//! Clock collaborator: where "now" comes from.
//!
//! Nothing in the dimension engine reads the clock; callers combine a
//! [`Clock`] with the pure date functions.  Tests inject a [`FixedClock`]
//! instead of mutating process-wide state.

use chrono::{DateTime, Utc};
use dd_core::errors::Result;

use crate::date::Date;

/// A source of the current instant.
pub trait Clock: std::fmt::Debug + Send + Sync {
    /// The current instant, in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// Today's calendar date (UTC).
    fn today(&self) -> Result<Date> {
        Date::from_naive(self.now().date_naive())
    }

    /// The first day of the current month.
    fn start_of_the_month(&self) -> Result<Date> {
        Ok(self.today()?.start_of_month())
    }

    /// The last day of the current month.
    fn end_of_the_month(&self) -> Result<Date> {
        Ok(self.today()?.end_of_month())
    }

    /// The first day of next month.
    fn start_of_next_month(&self) -> Result<Date> {
        self.today()?.start_of_next_month()
    }

    /// The reference "zero" instant: the Unix epoch.
    fn zero(&self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }
}

/// The system clock, in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Freeze the clock at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Freeze the clock at midnight UTC on `date`.
    pub fn at_date(date: Date) -> Self {
        Self(date.start_of_day().and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_month_boundaries() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2019, 11, 19, 16, 34, 12).unwrap());
        assert_eq!(clock.today().unwrap(), Date::from_ymd(2019, 11, 19).unwrap());
        assert_eq!(
            clock.start_of_the_month().unwrap(),
            Date::from_ymd(2019, 11, 1).unwrap()
        );
        assert_eq!(
            clock.end_of_the_month().unwrap(),
            Date::from_ymd(2019, 11, 30).unwrap()
        );
        assert_eq!(
            clock.start_of_next_month().unwrap(),
            Date::from_ymd(2019, 12, 1).unwrap()
        );
    }

    #[test]
    fn zero_is_unix_epoch() {
        assert_eq!(SystemClock.zero().timestamp(), 0);
        assert_eq!(SystemClock.zero().date_naive().to_string(), "1970-01-01");
    }

    #[test]
    fn at_date_is_midnight() {
        let d = Date::from_ymd(2024, 2, 29).unwrap();
        let clock = FixedClock::at_date(d);
        assert_eq!(clock.today().unwrap(), d);
        assert_eq!(clock.now().to_rfc3339(), "2024-02-29T00:00:00+00:00");
    }
}
