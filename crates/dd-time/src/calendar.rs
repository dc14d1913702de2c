//! Work-day calendars.
//!
//! A calendar knows which dates are work days.  The default policy treats
//! Saturday and Sunday as days off; a per-weekday override map can change
//! that for individual weekdays, and a holiday set removes specific dates.

use std::collections::{HashMap, HashSet};

use dd_core::errors::Result;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::date::Date;
use crate::weekday::Weekday;

/// A named public holiday.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Holiday {
    /// The date of the holiday.
    pub date: Date,
    /// Human-readable name, e.g. `"Good Friday"`.
    pub name: String,
}

impl Holiday {
    /// Create a holiday.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
        }
    }
}

/// Return `true` if `date` is a work day.
///
/// * Without `workdays`, Saturday and Sunday are days off and every other
///   weekday works.
/// * A weekday present in `workdays` uses the mapped value instead; weekdays
///   missing from the map fall back to the default policy.
/// * A date that would otherwise work is a day off if it is in `holidays`.
pub fn is_work_day(
    date: Date,
    workdays: Option<&HashMap<Weekday, bool>>,
    holidays: Option<&HashSet<Date>>,
) -> bool {
    let weekday = date.weekday();
    let works = workdays
        .and_then(|map| map.get(&weekday).copied())
        .unwrap_or_else(|| weekday.is_weekday());
    works && !holidays.is_some_and(|h| h.contains(&date))
}

/// Count the work days in the inclusive range `[start, end]`.
///
/// Returns 0 when `end < start`.
pub fn work_days_between(
    start: Date,
    end: Date,
    workdays: Option<&HashMap<Weekday, bool>>,
    holidays: Option<&HashSet<Date>>,
) -> u32 {
    let mut count = 0;
    let mut d = start;
    while d <= end {
        if is_work_day(d, workdays, holidays) {
            count += 1;
        }
        match d.add_days(1) {
            Ok(next) => d = next,
            Err(_) => break,
        }
    }
    count
}

/// A work-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Return `true` if `date` is a work day in this calendar.
    fn is_work_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a day off.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_work_day(date)
    }

    /// Return `true` if `date` falls on Saturday or Sunday.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Count the work days in the inclusive range `[start, end]`; 0 if
    /// `end < start`.
    fn work_days_between(&self, start: Date, end: Date) -> u32 {
        let mut count = 0;
        let mut d = start;
        while d <= end {
            if self.is_work_day(d) {
                count += 1;
            }
            match d.add_days(1) {
                Ok(next) => d = next,
                Err(_) => break,
            }
        }
        count
    }

    /// The first work day on or after `date`.
    fn next_work_day(&self, mut date: Date) -> Result<Date> {
        while !self.is_work_day(date) {
            date = date.add_days(1)?;
        }
        Ok(date)
    }

    /// The last work day on or before `date`.
    fn previous_work_day(&self, mut date: Date) -> Result<Date> {
        while !self.is_work_day(date) {
            date = date.add_days(-1)?;
        }
        Ok(date)
    }
}

/// A calendar that treats only Saturdays and Sundays as days off.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_work_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

/// A calendar with per-weekday overrides and a holiday set.
///
/// ```
/// use dd_time::{Calendar, Date, Holiday, Weekday, WorkDayCalendar};
///
/// let cal = WorkDayCalendar::new("Six-day week")
///     .with_workday(Weekday::Saturday, true)
///     .with_holiday(Holiday::new(Date::from_ymd(2019, 5, 1).unwrap(), "May Day"));
/// assert!(cal.is_work_day(Date::from_ymd(2019, 5, 4).unwrap()));
/// assert!(!cal.is_work_day(Date::from_ymd(2019, 5, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WorkDayCalendar {
    name: String,
    workdays: HashMap<Weekday, bool>,
    holidays: HashSet<Date>,
}

impl WorkDayCalendar {
    /// An empty calendar: default weekend policy, no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Override whether `weekday` is a work day.
    pub fn with_workday(mut self, weekday: Weekday, works: bool) -> Self {
        self.workdays.insert(weekday, works);
        self
    }

    /// Add a holiday.
    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.insert(holiday.date);
        self
    }

    /// Add several holidays.
    pub fn with_holidays<I>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = Holiday>,
    {
        self.holidays.extend(holidays.into_iter().map(|h| h.date));
        self
    }

    /// The per-weekday overrides.
    pub fn workdays(&self) -> &HashMap<Weekday, bool> {
        &self.workdays
    }

    /// The holiday dates.
    pub fn holidays(&self) -> &HashSet<Date> {
        &self.holidays
    }
}

impl Calendar for WorkDayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_work_day(&self, date: Date) -> bool {
        is_work_day(date, Some(&self.workdays), Some(&self.holidays))
    }
}
