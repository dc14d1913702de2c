//! `DateDimension` and `MonthDimension` records.
//!
//! A dimension is a denormalised description of one day or one month,
//! computed once from a date and a financial-year start month so reports
//! never recompute calendar attributes at query time.

use dd_core::errors::Result;
use dd_time::{first_day_of_week, iso_week_of_year, last_day_of_week, Date, Month, Weekday};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::financial::FinancialPeriod;
use crate::keys::{encode_date_key, encode_month_key, DateDimKey, MonthDimKey};

/// Calendar and financial attributes of a single day.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DateDimension {
    /// `YYYYMMDD` key.
    pub date_key: DateDimKey,
    /// The date itself.
    pub date: Date,
    /// Display form, `"04 May 2019"`.
    pub short_date: String,

    /// Calendar year.
    pub year: i32,
    /// Calendar month (1–12).
    pub month: u32,
    /// Day of the month (1–31).
    pub day: u32,

    /// ISO-8601 week number.
    pub week_no: u32,
    /// `"Week {week_no}"`.
    pub week_label: String,

    /// Day-of-week number counted from Sunday (Sunday = 0 … Saturday = 6).
    pub day_of_week_no: u32,
    /// Day-of-week name, `"Saturday"`.
    pub day_of_week: String,
    /// Key of the Monday starting this date's ISO week.
    pub first_day_of_week: DateDimKey,
    /// Key of the Sunday ending this date's ISO week.
    pub last_day_of_week: DateDimKey,

    /// Month abbreviation, `"May"`, `"Mar"`.
    pub month_short: String,
    /// Month name, `"March"`.
    pub month_long: String,

    /// Calendar quarter (1–4).
    pub quarter: u32,
    /// `YYYYMM` key of the calendar month.
    pub year_month: MonthDimKey,

    /// Financial year (calendar year the financial year started in).
    pub fin_year: i32,
    /// Financial month (1–12).
    pub fin_month: u32,
    /// `fin_year * 100 + fin_month`.
    pub fin_year_month: i64,
    /// Financial quarter (1–4).
    pub fin_quarter: u32,
}

impl DateDimension {
    /// Build the dimension of `date` for a financial year starting in `fin_start`.
    ///
    /// # Errors
    /// Fails only when a derived date (week bounds, financial-year start)
    /// falls outside the supported date range, i.e. in the first or last week
    /// of years 1 and 9999.
    pub fn build(date: Date, fin_start: Month) -> Result<Self> {
        let fin = FinancialPeriod::of(date, fin_start)?;
        let week_no = iso_week_of_year(date)?;
        let weekday: Weekday = date.weekday();
        let month = date.month_of_year();

        Ok(Self {
            date_key: encode_date_key(date),
            date,
            short_date: date.short_display(),

            year: date.year(),
            month: date.month(),
            day: date.day_of_month(),

            week_no,
            week_label: format!("Week {week_no}"),

            day_of_week_no: weekday.days_from_sunday() as u32,
            day_of_week: weekday.name().to_string(),
            first_day_of_week: encode_date_key(first_day_of_week(date)?),
            last_day_of_week: encode_date_key(last_day_of_week(date)?),

            month_short: month.short_name().to_string(),
            month_long: month.long_name().to_string(),

            quarter: month.quarter(),
            year_month: encode_month_key(date),

            fin_year: fin.year,
            fin_month: fin.month,
            fin_year_month: fin.year_month,
            fin_quarter: fin.quarter,
        })
    }

    /// The financial projection of this day.
    pub fn financial_period(&self) -> FinancialPeriod {
        FinancialPeriod {
            year: self.fin_year,
            month: self.fin_month,
            year_month: self.fin_year_month,
            quarter: self.fin_quarter,
        }
    }
}

/// Calendar and financial attributes of a month.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthDimension {
    /// `YYYYMM` key.
    pub year_month: MonthDimKey,
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1–12).
    pub month: u32,
    /// Calendar quarter (1–4).
    pub quarter: u32,

    /// Month abbreviation, `"Nov"`.
    pub month_short: String,
    /// Month name, `"November"`.
    pub month_long: String,
    /// `"Nov 2019"`.
    pub month_year_short: String,
    /// `"November 2019"`.
    pub month_year_long: String,

    /// Financial year (calendar year the financial year started in).
    pub fin_year: i32,
    /// Financial month (1–12).
    pub fin_month: u32,
    /// `fin_year * 100 + fin_month`.
    pub fin_year_month: i64,
    /// Financial quarter (1–4).
    pub fin_quarter: u32,
}

impl MonthDimension {
    /// Build the dimension of the month containing `date` for a financial
    /// year starting in `fin_start`.
    pub fn build(date: Date, fin_start: Month) -> Result<Self> {
        let fin = FinancialPeriod::of(date, fin_start)?;
        let month = date.month_of_year();
        let year = date.year();

        Ok(Self {
            year_month: encode_month_key(date),
            year,
            month: month.number(),
            quarter: month.quarter(),

            month_short: month.short_name().to_string(),
            month_long: month.long_name().to_string(),
            month_year_short: format!("{} {year:04}", month.short_name()),
            month_year_long: format!("{} {year:04}", month.long_name()),

            fin_year: fin.year,
            fin_month: fin.month,
            fin_year_month: fin.year_month,
            fin_quarter: fin.quarter,
        })
    }

    /// The first day of this month.
    pub fn first_day(&self) -> Date {
        self.year_month.to_date()
    }

    /// The financial projection of this month.
    pub fn financial_period(&self) -> FinancialPeriod {
        FinancialPeriod {
            year: self.fin_year,
            month: self.fin_month,
            year_month: self.fin_year_month,
            quarter: self.fin_quarter,
        }
    }
}

/// Build the [`DateDimension`] of `date`.
pub fn build_date_dimension(date: Date, fin_start: Month) -> Result<DateDimension> {
    DateDimension::build(date, fin_start)
}

/// Build the [`MonthDimension`] of the month containing `date`.
pub fn build_month_dimension(date: Date, fin_start: Month) -> Result<MonthDimension> {
    MonthDimension::build(date, fin_start)
}
