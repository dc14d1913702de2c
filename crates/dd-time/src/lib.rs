//! # dd-time
//!
//! Date, weekday, month, and work-day calendar types plus the calendar
//! algorithms the dimension engine is built on: ISO week numbers, week
//! boundaries, weekday searches, Easter Sunday, and work-day counting.
//!
//! Every function here is pure; none of them reads the clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Work-day calendars, holidays, and work-day counting.
pub mod calendar;

/// Injectable clock collaborator.
pub mod clock;

/// `Date` type.
pub mod date;

/// Easter Sunday.
pub mod easter;

/// `Month`: month of the year, calendar quarters.
pub mod month;

/// First / last / n-th weekday of a month.
pub mod month_weekdays;

/// `TimeUnit`: days, weeks, months, years.
pub mod time_unit;

/// Unix and fractional epoch timestamp conversions.
pub mod timestamp;

/// ISO week numbers, week boundaries, next / previous weekday.
pub mod week;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{is_work_day, work_days_between, Calendar, Holiday, WeekendsOnly, WorkDayCalendar};
pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{days_in_month, is_leap_year, Date};
pub use easter::{easter_sunday, next_easter_sunday};
pub use month::{quarter, quarter_of_month, Month};
pub use month_weekdays::{
    first_weekday_of_month, last_weekday_of_month, nth_weekday_of_month, weekday_count_in_month,
};
pub use time_unit::TimeUnit;
pub use week::{
    first_day_of_week, iso_week_of_year, last_day_of_week, next_day_of_week, previous_day_of_week,
};
pub use weekday::Weekday;
