//! Easter Sunday (Gregorian, anonymous "Meeus/Jones/Butcher" algorithm).

use dd_core::errors::Result;

use crate::date::Date;

/// Gregorian Easter Sunday of `year`.
///
/// # Errors
/// Fails only for years outside the supported date range.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    Date::from_ymd(year, month as u32, day as u32)
}

/// The first Easter Sunday on or after `date`: this year's, unless it has
/// already passed, in which case next year's.
pub fn next_easter_sunday(date: Date) -> Result<Date> {
    let easter = easter_sunday(date.year())?;
    if easter < date {
        easter_sunday(date.year() + 1)
    } else {
        Ok(easter)
    }
}
