//! `FinancialYear`: the twelve month dimensions of one financial year.

use dd_time::Month;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dimension::MonthDimension;

/// One financial year: its start month and its month dimensions.
///
/// The start and end calendar years are derived from the months rather than
/// stored, so they can never disagree with them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FinancialYear {
    start_month: Month,
    months: Vec<MonthDimension>,
}

impl FinancialYear {
    /// An empty financial year starting in `start_month`.
    pub fn new(start_month: Month) -> Self {
        Self {
            start_month,
            months: Vec::new(),
        }
    }

    /// A financial year holding `months` as given.
    pub fn with_months(start_month: Month, months: Vec<MonthDimension>) -> Self {
        Self {
            start_month,
            months,
        }
    }

    /// The month the financial year starts in.
    pub fn start_month(&self) -> Month {
        self.start_month
    }

    /// The month dimensions, in the order they were supplied.
    pub fn months(&self) -> &[MonthDimension] {
        &self.months
    }

    /// Calendar year of financial month 1, or 0 with no months.
    pub fn start_year(&self) -> i32 {
        self.ordered().first().map_or(0, |m| m.year)
    }

    /// Calendar year of financial month 12, or 0 with no months.
    pub fn end_year(&self) -> i32 {
        self.ordered().last().map_or(0, |m| m.year)
    }

    /// The financial year number, i.e. the start year.
    pub fn year(&self) -> i32 {
        self.start_year()
    }

    fn ordered(&self) -> Vec<&MonthDimension> {
        let mut months: Vec<&MonthDimension> = self.months.iter().collect();
        months.sort_by_key(|m| m.fin_month);
        months
    }
}

impl std::fmt::Display for FinancialYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.start_year(), self.end_year())
    }
}
