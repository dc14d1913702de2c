//! # datedim
//!
//! Calendar and financial-year dimension records for reporting tables.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `dd-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! datedim = "0.1"
//! ```
//!
//! ```rust
//! use datedim::prelude::*;
//!
//! let provider = DateDimensionProvider::new(Month::March);
//! let day = provider
//!     .date_dimension(Date::from_ymd(2019, 5, 4).unwrap())
//!     .unwrap();
//! assert_eq!(day.date_key.value(), 20190504);
//! assert_eq!((day.fin_year, day.fin_month, day.fin_quarter), (2019, 3, 1));
//!
//! let months: Vec<_> = provider.month_dimensions(day.date).take(12).collect();
//! assert_eq!(months[11].year_month.value(), 202004);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions.
pub use dd_core as core;

/// Date, weekday, month, work-day calendar and clock types.
pub use dd_time as time;

/// Dimension keys, records, sequences and the dimension provider.
pub use dd_dimensions as dimensions;

/// The types most callers need.
pub mod prelude {
    pub use dd_core::{Error, Result};
    pub use dd_dimensions::{
        DateDimKey, DateDimension, DateDimensionProvider, Direction, FinancialYear, MonthDimKey,
        MonthDimension,
    };
    pub use dd_time::{Calendar, Clock, Date, Month, TimeUnit, Weekday};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn facade_reaches_every_crate() {
        let provider = DateDimensionProvider::new(Month::September);
        let fy = provider.financial_year_number(2019).unwrap();
        assert_eq!(fy.to_string(), "2019/2020");

        let d = crate::time::easter_sunday(2024).unwrap();
        assert_eq!(crate::dimensions::encode_date_key(d).value(), 20240331);

        let err = crate::dimensions::decode_date_key(20241301).unwrap_err();
        assert!(matches!(err, crate::core::Error::InvalidKey { .. }));
    }
}
