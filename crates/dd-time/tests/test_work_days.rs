//! Integration tests for work-day predicates and calendars.

use std::collections::{HashMap, HashSet};

use dd_time::{
    easter_sunday, is_work_day, work_days_between, Calendar, Date, Holiday, WeekendsOnly, Weekday,
    WorkDayCalendar,
};

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn full_week(works: [bool; 7]) -> HashMap<Weekday, bool> {
    Weekday::ALL.into_iter().zip(works).collect()
}

#[test]
fn tuesday_to_saturday_week() {
    // Sun off, Mon off, Tue–Sat on
    let map = full_week([false, true, true, true, true, true, false]);
    // Monday 2019-03-18
    assert!(!is_work_day(date(2019, 3, 18), Some(&map), None));
    // Saturday 2019-03-23
    assert!(is_work_day(date(2019, 3, 23), Some(&map), None));
    // Wednesday 2019-03-20
    assert!(is_work_day(date(2019, 3, 20), Some(&map), None));
}

#[test]
fn holiday_on_a_working_wednesday() {
    let map = full_week([true, true, true, true, true, false, false]);
    let holidays = HashSet::from([date(2019, 5, 1)]);
    assert!(!is_work_day(date(2019, 5, 1), Some(&map), Some(&holidays)));
    assert!(is_work_day(date(2019, 5, 2), Some(&map), Some(&holidays)));
}

#[test]
fn holiday_on_a_day_off_stays_off() {
    let holidays = HashSet::from([date(2019, 5, 4)]);
    assert!(!is_work_day(date(2019, 5, 4), None, Some(&holidays)));
}

#[test]
fn counting_across_easter_weekend() {
    let easter = easter_sunday(2019).unwrap();
    let good_friday = easter.add_days(-2).unwrap();
    let easter_monday = easter.add_days(1).unwrap();
    let holidays = HashSet::from([good_friday, easter_monday]);

    // April 2019: 22 weekdays, two of them Easter holidays
    let (start, end) = (date(2019, 4, 1), date(2019, 4, 30));
    assert_eq!(work_days_between(start, end, None, None), 22);
    assert_eq!(work_days_between(start, end, None, Some(&holidays)), 20);

    let cal = WorkDayCalendar::new("Easter")
        .with_holiday(Holiday::new(good_friday, "Good Friday"))
        .with_holiday(Holiday::new(easter_monday, "Easter Monday"));
    assert_eq!(cal.work_days_between(start, end), 20);
    assert_eq!(cal.next_work_day(good_friday).unwrap(), date(2019, 4, 23));
}

#[test]
fn weekends_only_matches_default_policy() {
    let (start, end) = (date(2024, 1, 1), date(2024, 12, 31));
    assert_eq!(WeekendsOnly.work_days_between(start, end), 262);
    assert_eq!(work_days_between(start, end, None, None), 262);
}

#[test]
fn holiday_weekday() {
    let h = Holiday::new(date(2019, 12, 25), "Christmas Day");
    assert_eq!(h.date.weekday(), Weekday::Wednesday);
    assert_eq!(h.name, "Christmas Day");
}
