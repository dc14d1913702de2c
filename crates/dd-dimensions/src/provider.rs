//! `DateDimensionProvider`: generates dimensions for one financial-year
//! convention.
//!
//! The provider holds a single immutable setting, the month the financial
//! year starts in, and hands out independent lazy sequences and financial
//! years built from it.

use dd_core::errors::{Error, Result};
use dd_time::{Date, Month, TimeUnit};
use tracing::trace;

use crate::dimension::{DateDimension, MonthDimension};
use crate::financial::financial_year_start;
use crate::financial_year::FinancialYear;
use crate::keys::decode_month_key;
use crate::sequence::{DateDimensions, MonthDimensions};

/// Direction for [`DateDimensionProvider::financial_years`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The years *before* the given year, ending with `year - 1`.
    Previous,
    /// The given year and the years after it.
    Next,
}

/// Generates date and month dimensions for a fixed financial-year start
/// month.
///
/// ```
/// use dd_dimensions::DateDimensionProvider;
/// use dd_time::{Date, Month};
///
/// let provider = DateDimensionProvider::new(Month::March);
/// let fy = provider.financial_year_number(2024).unwrap();
/// assert_eq!((fy.start_year(), fy.end_year()), (2024, 2025));
///
/// let first_week: Vec<_> = provider
///     .date_dimensions(Date::from_ymd(2019, 5, 4).unwrap())
///     .take(7)
///     .collect();
/// assert_eq!(first_week[0].fin_month, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateDimensionProvider {
    fin_start_month: Month,
}

impl DateDimensionProvider {
    /// A provider whose financial year starts in `fin_start_month`.
    pub fn new(fin_start_month: Month) -> Self {
        Self { fin_start_month }
    }

    /// A provider from a month number (1–12).
    ///
    /// # Errors
    /// [`Error::InvalidArgument`] for numbers outside 1–12.
    pub fn from_month_number(month: u32) -> Result<Self> {
        Month::try_from(month).map(Self::new)
    }

    /// A provider whose financial year starts in the calendar month of `date`.
    pub fn from_date(date: Date) -> Self {
        Self::new(date.month_of_year())
    }

    /// The financial-year start month.
    pub fn fin_start_month(&self) -> Month {
        self.fin_start_month
    }

    /// Build the dimension of a single day.
    pub fn date_dimension(&self, date: Date) -> Result<DateDimension> {
        DateDimension::build(date, self.fin_start_month)
    }

    /// Build the dimension of the month containing `date`.
    pub fn month_dimension(&self, date: Date) -> Result<MonthDimension> {
        MonthDimension::build(date, self.fin_start_month)
    }

    /// Daily dimensions from `start` (inclusive), one per pull.
    ///
    /// Each call returns a fresh sequence; consuming it has no effect on the
    /// provider or on other sequences.
    pub fn date_dimensions(&self, start: Date) -> DateDimensions {
        DateDimensions::new(start, self.fin_start_month)
    }

    /// Monthly dimensions from the month of `start` (inclusive), one per pull.
    pub fn month_dimensions(&self, start: Date) -> MonthDimensions {
        MonthDimensions::new(start, self.fin_start_month)
    }

    /// The twelve month dimensions of the financial year containing `date`,
    /// financial month 1 first.
    pub fn month_dimensions_for_financial_year(&self, date: Date) -> Result<Vec<MonthDimension>> {
        let first = financial_year_start(date, self.fin_start_month)?;
        let months = (0..12)
            .map(|i| {
                let month = first.advance(i, TimeUnit::Months)?;
                MonthDimension::build(month, self.fin_start_month)
            })
            .collect::<Result<Vec<_>>>()?;
        trace!(first = %first, "built month dimensions for financial year");
        Ok(months)
    }

    /// The twelve month dimensions of financial year `year`.
    ///
    /// The year resolves to the first of the start month in calendar year
    /// `year` (key `year * 100 + start month`).
    pub fn month_dimensions_for_financial_year_number(
        &self,
        year: i32,
    ) -> Result<Vec<MonthDimension>> {
        let date = decode_month_key(year as i64 * 100 + self.fin_start_month.number() as i64)?;
        self.month_dimensions_for_financial_year(date)
    }

    /// The financial year containing `date`.
    pub fn financial_year(&self, date: Date) -> Result<FinancialYear> {
        let months = self.month_dimensions_for_financial_year(date)?;
        Ok(FinancialYear::with_months(self.fin_start_month, months))
    }

    /// Financial year `year`.
    pub fn financial_year_number(&self, year: i32) -> Result<FinancialYear> {
        let months = self.month_dimensions_for_financial_year_number(year)?;
        Ok(FinancialYear::with_months(self.fin_start_month, months))
    }

    /// `count` consecutive financial years relative to `year`.
    ///
    /// * [`Direction::Previous`]: years `year - count ..= year - 1`.
    /// * [`Direction::Next`]: years `year ..= year + count - 1`.
    ///
    /// Years are returned oldest first.
    #[tracing::instrument(skip(self), fields(fin_start = %self.fin_start_month))]
    pub fn financial_years(
        &self,
        year: i32,
        count: u32,
        direction: Direction,
    ) -> Result<Vec<FinancialYear>> {
        let count = i32::try_from(count)
            .map_err(|_| Error::InvalidArgument(format!("year count {count} is too large")))?;
        let first = match direction {
            Direction::Previous => year.checked_sub(count),
            Direction::Next => Some(year),
        }
        .ok_or_else(|| Error::InvalidArgument(format!("{count} years before {year} overflows")))?;

        (0..count)
            .map(|offset| self.financial_year_number(first + offset))
            .collect()
    }
}

impl From<Month> for DateDimensionProvider {
    fn from(month: Month) -> Self {
        Self::new(month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn constructors() {
        for (n, month) in (1..=12).zip(Month::ALL) {
            let provider = DateDimensionProvider::from_month_number(n).unwrap();
            assert_eq!(provider.fin_start_month(), month);
            assert_eq!(provider, DateDimensionProvider::from(month));
        }
        assert_eq!(
            DateDimensionProvider::from_date(date(2019, 1, 1)).fin_start_month(),
            Month::January
        );
        assert!(matches!(
            DateDimensionProvider::from_month_number(0),
            Err(Error::InvalidArgument(_))
        ));
        assert!(DateDimensionProvider::from_month_number(13).is_err());
    }

    #[test]
    fn financial_year_months_are_ordered() {
        let provider = DateDimensionProvider::new(Month::March);
        let months = provider
            .month_dimensions_for_financial_year(date(2025, 2, 1))
            .unwrap();
        let fin_months: Vec<u32> = months.iter().map(|m| m.fin_month).collect();
        assert_eq!(fin_months, (1..=12).collect::<Vec<_>>());
        assert_eq!(months[0].year_month.value(), 202403);
        assert_eq!(months[11].year_month.value(), 202502);
        assert!(months.iter().all(|m| m.fin_year == 2024));
    }

    #[test]
    fn financial_year_from_number() {
        let provider = DateDimensionProvider::new(Month::March);
        let fy = provider.financial_year_number(2024).unwrap();
        assert_eq!(fy.start_year(), 2024);
        assert_eq!(fy.end_year(), 2025);
        assert_eq!(fy.start_month(), Month::March);
        assert_eq!(fy, provider.financial_year(date(2024, 11, 30)).unwrap());
    }

    #[test]
    fn january_financial_year_is_a_calendar_year() {
        let provider = DateDimensionProvider::new(Month::January);
        let fy = provider.financial_year_number(2024).unwrap();
        assert_eq!((fy.start_year(), fy.end_year()), (2024, 2024));
        assert_eq!(fy.months()[0].year_month.value(), 202401);
    }

    #[test]
    fn financial_years_previous_and_next() {
        let provider = DateDimensionProvider::new(Month::March);

        let previous = provider.financial_years(2024, 5, Direction::Previous).unwrap();
        assert_eq!(previous.len(), 5);
        assert_eq!(previous[0].start_year(), 2019);
        assert_eq!(previous[4].end_year(), 2024);

        let next = provider.financial_years(2024, 5, Direction::Next).unwrap();
        assert_eq!(next.len(), 5);
        assert_eq!(next[0].start_year(), 2024);
        assert_eq!(next[4].end_year(), 2029);

        assert!(provider.financial_years(2024, 0, Direction::Next).unwrap().is_empty());
    }

    #[test]
    fn financial_year_number_out_of_range() {
        let provider = DateDimensionProvider::new(Month::March);
        assert!(matches!(
            provider.financial_year_number(10_000),
            Err(Error::InvalidKey { .. })
        ));
        assert!(provider.financial_year_number(9999).is_err());
    }
}
