//! Market data: provider trait, Yahoo Finance provider, aligned table

pub mod provider;
pub mod table;
pub mod yahoo;

pub use provider::{DataError, DataProvider, FetchResult, InMemoryProvider, RawBar};
pub use table::{Field, PerformanceTable};
pub use yahoo::YahooProvider;
