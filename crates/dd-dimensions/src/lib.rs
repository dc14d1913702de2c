//! # dd-dimensions
//!
//! Date and month dimension records for reporting and analytics.
//!
//! A [`DateDimensionProvider`] is configured once with the month its
//! financial year starts in and then produces:
//!
//! * [`DateDimension`] and [`MonthDimension`] records keyed by
//!   [`DateDimKey`] (`YYYYMMDD`) and [`MonthDimKey`] (`YYYYMM`),
//! * lazy [`DateDimensions`] / [`MonthDimensions`] sequences,
//! * [`FinancialYear`] aggregates of twelve month dimensions.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `DateDimension` and `MonthDimension` builders.
pub mod dimension;

/// Financial-year offset arithmetic.
pub mod financial;

/// `FinancialYear` aggregate.
pub mod financial_year;

/// Integer dimension keys and their codec.
pub mod keys;

/// `DateDimensionProvider` and financial-year generation.
pub mod provider;

/// Lazy date and month dimension sequences.
pub mod sequence;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use dimension::{build_date_dimension, build_month_dimension, DateDimension, MonthDimension};
pub use financial::{financial_year_start, FinancialPeriod};
pub use financial_year::FinancialYear;
pub use keys::{
    decode_date_key, decode_month_key, encode_date_key, encode_month_key, DateDimKey, MonthDimKey,
};
pub use provider::{DateDimensionProvider, Direction};
pub use sequence::{stop_boundary, DateDimensions, MonthDimensions};
