//! Lazy dimension sequences.
//!
//! [`DateDimensions`] and [`MonthDimensions`] walk forward from a start date
//! one day / one month per pull.  They look unbounded but stop before
//! overflowing the supported date range: another item is produced only while
//! the previously produced date plus one month still falls on or before the
//! stop boundary, the last day one month before `Date::MAX`.  The guard is
//! checked on every pull, never ahead of it, and reaching it is not an error;
//! the iterator simply ends and stays ended.

use std::iter::FusedIterator;

use dd_time::{Date, Month, TimeUnit};
use tracing::debug;

use crate::dimension::{DateDimension, MonthDimension};

/// Cursor shared by both sequences.
#[derive(Debug, Clone)]
struct Cursor {
    /// The date one step before the next item; `None` only when the start
    /// is `Date::MIN`.
    previous: Option<Date>,
    /// Next date to yield; `None` once the sequence has ended.
    next: Option<Date>,
    stop: Date,
    step: TimeUnit,
}

impl Cursor {
    fn new(start: Date, step: TimeUnit) -> Self {
        Self {
            previous: start.advance(-1, step).ok(),
            next: Some(start),
            stop: stop_boundary(),
            step,
        }
    }

    /// Take the next date if the previous one passes the termination guard.
    fn advance(&mut self) -> Option<Date> {
        let candidate = self.next?;
        if let Some(previous) = self.previous {
            let within_guard = previous
                .advance(1, TimeUnit::Months)
                .is_ok_and(|ahead| ahead <= self.stop);
            if !within_guard {
                debug!(
                    previous = %previous,
                    stop = %self.stop,
                    "dimension sequence reached its termination guard"
                );
                self.next = None;
                return None;
            }
        }
        self.previous = Some(candidate);
        self.next = candidate.advance(1, self.step).ok();
        Some(candidate)
    }
}

/// One month before the largest supported date.
pub fn stop_boundary() -> Date {
    Date::MAX
        .advance(-1, TimeUnit::Months)
        .expect("Date::MAX minus one month is in range")
}

/// Lazy sequence of [`DateDimension`]s, one calendar day per item.
///
/// Created by [`DateDimensionProvider::date_dimensions`].
///
/// [`DateDimensionProvider::date_dimensions`]: crate::DateDimensionProvider::date_dimensions
#[derive(Debug, Clone)]
pub struct DateDimensions {
    cursor: Cursor,
    fin_start: Month,
}

impl DateDimensions {
    pub(crate) fn new(start: Date, fin_start: Month) -> Self {
        Self {
            cursor: Cursor::new(start, TimeUnit::Days),
            fin_start,
        }
    }
}

impl Iterator for DateDimensions {
    type Item = DateDimension;

    fn next(&mut self) -> Option<DateDimension> {
        let date = self.cursor.advance()?;
        match DateDimension::build(date, self.fin_start) {
            Ok(dim) => Some(dim),
            Err(err) => {
                debug!(%date, %err, "date dimension sequence ended");
                self.cursor.next = None;
                None
            }
        }
    }
}

impl FusedIterator for DateDimensions {}

/// Lazy sequence of [`MonthDimension`]s, one calendar month per item.
///
/// Created by [`DateDimensionProvider::month_dimensions`].
///
/// [`DateDimensionProvider::month_dimensions`]: crate::DateDimensionProvider::month_dimensions
#[derive(Debug, Clone)]
pub struct MonthDimensions {
    cursor: Cursor,
    fin_start: Month,
}

impl MonthDimensions {
    pub(crate) fn new(start: Date, fin_start: Month) -> Self {
        Self {
            cursor: Cursor::new(start.start_of_month(), TimeUnit::Months),
            fin_start,
        }
    }
}

impl Iterator for MonthDimensions {
    type Item = MonthDimension;

    fn next(&mut self) -> Option<MonthDimension> {
        let date = self.cursor.advance()?;
        match MonthDimension::build(date, self.fin_start) {
            Ok(dim) => Some(dim),
            Err(err) => {
                debug!(%date, %err, "month dimension sequence ended");
                self.cursor.next = None;
                None
            }
        }
    }
}

impl FusedIterator for MonthDimensions {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn stop_boundary_is_a_month_before_max() {
        assert_eq!(stop_boundary(), date(9999, 11, 30));
    }

    #[test]
    fn date_sequence_terminates_before_max() {
        let dims: Vec<_> = DateDimensions::new(date(9999, 10, 1), Month::April).collect();
        assert_eq!(dims.len(), 32);
        // 9999-10-31 plus one month clamps onto the stop boundary itself
        assert_eq!(dims[30].date, date(9999, 10, 31));
        assert_eq!(dims.last().unwrap().date, date(9999, 11, 1));
    }

    #[test]
    fn month_sequence_terminates_before_max() {
        let dims: Vec<_> = MonthDimensions::new(date(9999, 8, 17), Month::April).collect();
        let keys: Vec<i64> = dims.iter().map(|m| m.year_month.value()).collect();
        assert_eq!(keys, vec![999908, 999909, 999910, 999911]);
    }

    #[test]
    fn start_past_the_guard_is_empty() {
        assert_eq!(DateDimensions::new(Date::MAX, Month::January).count(), 0);
        assert_eq!(DateDimensions::new(date(9999, 11, 2), Month::January).count(), 0);
        assert_eq!(MonthDimensions::new(Date::MAX, Month::January).count(), 0);
    }

    #[test]
    fn sequences_start_at_the_minimum_date() {
        let first = DateDimensions::new(Date::MIN, Month::January).next().unwrap();
        assert_eq!(first.date, Date::MIN);
        let months: Vec<i64> = MonthDimensions::new(Date::MIN, Month::January)
            .take(2)
            .map(|m| m.year_month.value())
            .collect();
        assert_eq!(months, vec![101, 102]);
    }

    #[test]
    fn fused_after_the_end() {
        let mut seq = MonthDimensions::new(date(9999, 10, 1), Month::January);
        assert!(seq.next().is_some());
        assert!(seq.next().is_some());
        assert!(seq.next().is_none());
        assert!(seq.next().is_none());
    }

    #[test]
    fn month_sequence_starts_at_the_first_of_the_month() {
        let first = MonthDimensions::new(date(2019, 1, 31), Month::May).next().unwrap();
        assert_eq!(first.year_month.value(), 201901);
        let months: Vec<u32> = MonthDimensions::new(date(2019, 1, 31), Month::May)
            .take(3)
            .map(|m| m.month)
            .collect();
        assert_eq!(months, vec![1, 2, 3]);
    }
}
