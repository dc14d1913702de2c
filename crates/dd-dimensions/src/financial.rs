//! Financial-year offset arithmetic.
//!
//! A financial year is twelve consecutive calendar months starting at a
//! configurable month.  For a March start, 2019-05-04 falls in financial year
//! 2019, financial month 3; for a September start it falls in financial year
//! 2018, financial month 9.

use dd_core::errors::Result;
use dd_time::{quarter_of_month, Date, Month, TimeUnit};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The financial-year projection of one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancialPeriod {
    /// Calendar year in which the financial year started.
    pub year: i32,
    /// Position of the month within the financial year (1–12).
    pub month: u32,
    /// `year * 100 + month`.
    pub year_month: i64,
    /// Financial quarter (1–4).
    pub quarter: u32,
}

impl FinancialPeriod {
    /// Project `date` onto a financial year starting in `start`.
    pub fn of(date: Date, start: Month) -> Result<Self> {
        let start_no = start.number();

        let mut year_start = Date::from_ymd(date.year(), start_no, 1)?;
        if year_start > date {
            year_start = year_start.advance(-1, TimeUnit::Years)?;
        }

        let factor = 12 - start_no + 1;
        let month = if date.month() >= start_no {
            date.month() - start_no + 1
        } else {
            date.month() + factor
        };

        let year = year_start.year();
        Ok(Self {
            year,
            month,
            year_month: year as i64 * 100 + month as i64,
            quarter: quarter_of_month(month),
        })
    }
}

/// The first calendar month of the financial year containing `date`.
pub fn financial_year_start(date: Date, start: Month) -> Result<Date> {
    let period = FinancialPeriod::of(date, start)?;
    date.start_of_month()
        .advance(1 - period.month as i32, TimeUnit::Months)
}
