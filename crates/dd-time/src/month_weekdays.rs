//! Weekday lookups within a month: first, last and *n*-th occurrence, and
//! occurrence counts.
//!
//! Every function works on the month containing the given date; the
//! day-of-month of the argument is irrelevant.

use dd_core::ensure;
use dd_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};
use crate::weekday::Weekday;

/// All days of the month containing `date` that fall on `weekday`, in order.
fn occurrences(date: Date, weekday: Weekday) -> impl Iterator<Item = Date> {
    let first = date.start_of_month();
    let len = days_in_month(date.year(), date.month()) as i32;
    (0..len)
        .filter_map(move |offset| first.add_days(offset).ok())
        .filter(move |d| d.weekday() == weekday)
}

/// The first `weekday` in the month of `date`.
pub fn first_weekday_of_month(date: Date, weekday: Weekday) -> Date {
    occurrences(date, weekday)
        .next()
        .expect("every weekday occurs at least four times a month")
}

/// The last `weekday` in the month of `date`.
pub fn last_weekday_of_month(date: Date, weekday: Weekday) -> Date {
    occurrences(date, weekday)
        .last()
        .expect("every weekday occurs at least four times a month")
}

/// How many times `weekday` occurs in the month of `date` (4 or 5).
pub fn weekday_count_in_month(date: Date, weekday: Weekday) -> u32 {
    occurrences(date, weekday).count() as u32
}

/// The `n`-th (1-based) `weekday` in the month of `date`.
///
/// For example the third Wednesday of March 2024 is 2024-03-20.
///
/// # Errors
/// * [`Error::Precondition`] if `n` is zero.
/// * [`Error::OutOfRange`] if the month has fewer than `n` such weekdays; the
///   error carries the actual count.
pub fn nth_weekday_of_month(date: Date, n: u32, weekday: Weekday) -> Result<Date> {
    ensure!(n >= 1, "nth_weekday_of_month: n must be >= 1, got {n}");
    let count = weekday_count_in_month(date, weekday);
    if count < n {
        return Err(Error::OutOfRange {
            requested: n,
            count,
            weekday: weekday.name().to_string(),
            month: date.month_of_year().long_name().to_string(),
            year: date.year(),
        });
    }
    occurrences(date, weekday)
        .nth(n as usize - 1)
        .ok_or_else(|| Error::Date(format!("no occurrence {n} of {weekday} in {date}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn first_weekdays_april_2023() {
        let april = date(2023, 4, 1);
        assert_eq!(first_weekday_of_month(april, Weekday::Saturday), date(2023, 4, 1));
        assert_eq!(first_weekday_of_month(april, Weekday::Sunday), date(2023, 4, 2));
        assert_eq!(first_weekday_of_month(april, Weekday::Friday), date(2023, 4, 7));
    }

    #[test]
    fn last_weekdays_april_2023() {
        let april = date(2023, 4, 17);
        assert_eq!(last_weekday_of_month(april, Weekday::Sunday), date(2023, 4, 30));
        assert_eq!(last_weekday_of_month(april, Weekday::Monday), date(2023, 4, 24));
        assert_eq!(last_weekday_of_month(april, Weekday::Saturday), date(2023, 4, 29));
    }

    #[test]
    fn nth_weekdays_april_2023() {
        let april = date(2023, 4, 1);
        let cases = [
            (3, Weekday::Sunday, date(2023, 4, 16)),
            (1, Weekday::Monday, date(2023, 4, 3)),
            (1, Weekday::Tuesday, date(2023, 4, 4)),
            (4, Weekday::Wednesday, date(2023, 4, 26)),
            (3, Weekday::Thursday, date(2023, 4, 20)),
            (2, Weekday::Friday, date(2023, 4, 14)),
            (2, Weekday::Saturday, date(2023, 4, 8)),
        ];
        for (n, weekday, want) in cases {
            assert_eq!(nth_weekday_of_month(april, n, weekday).unwrap(), want);
        }
    }

    #[test]
    fn nth_weekday_out_of_range_reports_count() {
        let may = date(2023, 5, 1);
        let err = nth_weekday_of_month(may, 5, Weekday::Thursday).unwrap_err();
        match &err {
            Error::OutOfRange {
                requested,
                count,
                weekday,
                month,
                year,
            } => {
                assert_eq!(*requested, 5);
                assert_eq!(*count, 4);
                assert_eq!(weekday, "Thursday");
                assert_eq!(month, "May");
                assert_eq!(*year, 2023);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(err.to_string().contains("only 4 Thursdays in May 2023"));
    }

    #[test]
    fn nth_weekday_zero_is_rejected() {
        assert!(matches!(
            nth_weekday_of_month(date(2023, 5, 1), 0, Weekday::Monday),
            Err(Error::Precondition(_))
        ));
    }

    #[test]
    fn weekday_counts_may_2023() {
        let may = date(2023, 5, 4);
        // May 2023 starts on a Monday and has 31 days
        assert_eq!(weekday_count_in_month(may, Weekday::Monday), 5);
        assert_eq!(weekday_count_in_month(may, Weekday::Tuesday), 5);
        assert_eq!(weekday_count_in_month(may, Weekday::Wednesday), 5);
        assert_eq!(weekday_count_in_month(may, Weekday::Thursday), 4);
        assert_eq!(weekday_count_in_month(may, Weekday::Sunday), 4);
    }

    #[test]
    fn february_non_leap_has_four_of_each() {
        let feb = date(2023, 2, 10);
        for w in Weekday::ALL {
            assert_eq!(weekday_count_in_month(feb, w), 4);
        }
    }
}
