//! Week arithmetic: ISO-8601 week numbers, week boundaries, and next/previous
//! weekday searches.

use dd_core::errors::Result;

use crate::date::Date;
use crate::weekday::Weekday;

/// ISO-8601 week number of `date` (Monday start, week 1 is the first week
/// containing a Thursday).
///
/// Monday–Wednesday share their week number with the Thursday–Saturday of the
/// same week, so those days probe three days later.  The probe then sits on
/// the Thursday side of its week, where the plain "first four-day week" count
/// never disagrees with ISO-8601 at a year boundary.
pub fn iso_week_of_year(date: Date) -> Result<u32> {
    let probe = match date.weekday() {
        Weekday::Monday | Weekday::Tuesday | Weekday::Wednesday => date.add_days(3)?,
        _ => date,
    };
    week_of_year_first_four_day(probe)
}

/// Week of the year for Monday-start weeks where week 1 is the first week
/// with at least four days in the year.
///
/// Days before week 1 belong to the last week of the previous year.  Unlike
/// ISO-8601 this never wraps late December into week 1 of the next year.
fn week_of_year_first_four_day(date: Date) -> Result<u32> {
    let jan1 = Date::from_ymd(date.year(), 1, 1)?;
    let offset = jan1.weekday().days_from_monday();
    let week_one = if offset <= 3 {
        jan1.add_days(-offset)
    } else {
        jan1.add_days(7 - offset)
    };
    match week_one {
        Ok(start) if date >= start => Ok((start.days_between(date) / 7 + 1) as u32),
        _ => {
            let dec31 = Date::from_ymd(date.year() - 1, 12, 31)?;
            week_of_year_first_four_day(dec31)
        }
    }
}

/// The Monday of the ISO week containing `date`.
pub fn first_day_of_week(date: Date) -> Result<Date> {
    date.add_days(-date.weekday().days_from_monday())
}

/// The Sunday of the ISO week containing `date`.
///
/// The Sunday is located with Sunday-anchored offset arithmetic, which lands
/// on the *preceding* Sunday for Monday–Saturday; in that case it rolls
/// forward a week.
pub fn last_day_of_week(date: Date) -> Result<Date> {
    let sunday = date.add_days(-date.weekday().days_from_sunday())?;
    if sunday < date {
        sunday.add_days(7)
    } else {
        Ok(sunday)
    }
}

/// The first `weekday` strictly after `date`.
pub fn next_day_of_week(date: Date, weekday: Weekday) -> Result<Date> {
    let same_week = same_week_occurrence(date, weekday)?;
    if same_week <= date {
        same_week.add_days(7)
    } else {
        Ok(same_week)
    }
}

/// The last `weekday` strictly before `date`.
pub fn previous_day_of_week(date: Date, weekday: Weekday) -> Result<Date> {
    let same_week = same_week_occurrence(date, weekday)?;
    if same_week >= date {
        same_week.add_days(-7)
    } else {
        Ok(same_week)
    }
}

/// `weekday` within the Sunday-to-Saturday week containing `date`.
fn same_week_occurrence(date: Date, weekday: Weekday) -> Result<Date> {
    date.add_days(weekday.days_from_sunday() - date.weekday().days_from_sunday())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn iso_week_simple() {
        assert_eq!(iso_week_of_year(date(2019, 5, 4)).unwrap(), 18);
        assert_eq!(iso_week_of_year(date(2019, 3, 4)).unwrap(), 10);
        assert_eq!(iso_week_of_year(date(2019, 1, 4)).unwrap(), 1);
    }

    #[test]
    fn iso_week_year_boundaries() {
        // 2018-12-31 is a Monday in ISO week 1 of 2019
        assert_eq!(iso_week_of_year(date(2018, 12, 31)).unwrap(), 1);
        // 2021-01-03 is a Sunday in ISO week 53 of 2020
        assert_eq!(iso_week_of_year(date(2021, 1, 3)).unwrap(), 53);
        // 2020-12-31 is a Thursday in week 53
        assert_eq!(iso_week_of_year(date(2020, 12, 31)).unwrap(), 53);
        // 2023-01-01 is a Sunday in ISO week 52 of 2022
        assert_eq!(iso_week_of_year(date(2023, 1, 1)).unwrap(), 52);
    }

    #[test]
    fn iso_week_matches_chrono_over_a_decade() {
        use chrono::Datelike;
        let mut d = date(2015, 1, 1);
        let end = date(2026, 12, 31);
        while d <= end {
            assert_eq!(
                iso_week_of_year(d).unwrap(),
                d.naive().iso_week().week(),
                "week mismatch for {d}"
            );
            d = d.add_days(1).unwrap();
        }
    }

    #[test]
    fn week_boundaries() {
        // Saturday 2019-05-04
        assert_eq!(first_day_of_week(date(2019, 5, 4)).unwrap(), date(2019, 4, 29));
        assert_eq!(last_day_of_week(date(2019, 5, 4)).unwrap(), date(2019, 5, 5));
        // Monday
        assert_eq!(first_day_of_week(date(2019, 3, 4)).unwrap(), date(2019, 3, 4));
        assert_eq!(last_day_of_week(date(2019, 3, 4)).unwrap(), date(2019, 3, 10));
        // Sunday stays in its own ISO week
        assert_eq!(first_day_of_week(date(2019, 5, 5)).unwrap(), date(2019, 4, 29));
        assert_eq!(last_day_of_week(date(2019, 5, 5)).unwrap(), date(2019, 5, 5));
        // Across the year end
        assert_eq!(first_day_of_week(date(2019, 1, 4)).unwrap(), date(2018, 12, 31));
        assert_eq!(last_day_of_week(date(2019, 1, 4)).unwrap(), date(2019, 1, 6));
    }

    #[test]
    fn next_day_of_week_is_strictly_after() {
        // Wednesday 2019-03-20
        let wed = date(2019, 3, 20);
        let expected = [
            (Weekday::Sunday, date(2019, 3, 24)),
            (Weekday::Monday, date(2019, 3, 25)),
            (Weekday::Tuesday, date(2019, 3, 26)),
            (Weekday::Wednesday, date(2019, 3, 27)),
            (Weekday::Thursday, date(2019, 3, 21)),
            (Weekday::Friday, date(2019, 3, 22)),
            (Weekday::Saturday, date(2019, 3, 23)),
        ];
        for (weekday, want) in expected {
            assert_eq!(next_day_of_week(wed, weekday).unwrap(), want, "{weekday}");
        }
    }

    #[test]
    fn previous_day_of_week_is_strictly_before() {
        let wed = date(2019, 3, 20);
        let expected = [
            (Weekday::Sunday, date(2019, 3, 17)),
            (Weekday::Monday, date(2019, 3, 18)),
            (Weekday::Tuesday, date(2019, 3, 19)),
            (Weekday::Wednesday, date(2019, 3, 13)),
            (Weekday::Thursday, date(2019, 3, 14)),
            (Weekday::Friday, date(2019, 3, 15)),
            (Weekday::Saturday, date(2019, 3, 16)),
        ];
        for (weekday, want) in expected {
            assert_eq!(previous_day_of_week(wed, weekday).unwrap(), want, "{weekday}");
        }
    }

    #[test]
    fn next_day_of_week_across_month_end() {
        // Friday 2019-05-31 → next Monday is 2019-06-03
        assert_eq!(
            next_day_of_week(date(2019, 5, 31), Weekday::Monday).unwrap(),
            date(2019, 6, 3)
        );
        // Wednesday 2019-05-01 → previous Tuesday is 2019-04-30
        assert_eq!(
            previous_day_of_week(date(2019, 5, 1), Weekday::Tuesday).unwrap(),
            date(2019, 4, 30)
        );
    }
}
