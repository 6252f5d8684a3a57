//! SectorLab Core — fund set, range selection, market data, relative performance.
//!
//! This crate holds everything below the terminal:
//! - The ordered fund set (Select Sector SPDRs plus SPY by default)
//! - Named periods, explicit date windows, strict ISO date parsing
//! - The `DataProvider` trait with a Yahoo Finance implementation
//! - The (symbol × field) performance table aligned on a date index
//! - Percent change relative to the first observed close, and the ranked summary

pub mod data;
pub mod performance;
pub mod range;
pub mod universe;

pub use data::{DataError, DataProvider, Field, PerformanceTable, YahooProvider};
pub use performance::{
    relative_series, PerformanceError, PerformanceSummary, RelativePerformance, SummaryRow,
};
pub use range::{parse_iso_date, Period, RangeError, RangeMode, RangeSelection};
pub use universe::{Fund, SectorSet, UniverseError};
