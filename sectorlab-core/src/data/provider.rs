//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over data sources so the session loop can
//! run against Yahoo Finance in production and an in-memory fixture in tests.

use super::table::PerformanceTable;
use crate::range::RangeSelection;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Raw daily OHLCV bar from a data provider.
///
/// Missing quote values are `None`; the provider does not fill them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    pub date: NaiveDate,
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub adj_close: Option<f64>,
    pub volume: Option<u64>,
}

impl RawBar {
    /// Bar with every price field set to `close`, for fixtures.
    pub fn flat(date: NaiveDate, close: f64) -> Self {
        Self {
            date,
            open: Some(close),
            high: Some(close),
            low: Some(close),
            close: Some(close),
            adj_close: Some(close),
            volume: Some(0),
        }
    }
}

/// Structured error types for data operations.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("HTTP {status} for {symbol}")]
    HttpStatus { symbol: String, status: u16 },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("no symbols requested")]
    NoSymbols,

    #[error("data error: {0}")]
    Other(String),
}

/// Result of a successful fetch for a single symbol.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub symbol: String,
    pub bars: Vec<RawBar>,
}

/// Trait for market-data providers.
pub trait DataProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily bars for one symbol over the selected range.
    fn fetch(&self, symbol: &str, range: &RangeSelection) -> Result<FetchResult, DataError>;

    /// Fetch every symbol for one chart and align them into a single table.
    ///
    /// The first failing symbol aborts the whole group.
    fn fetch_group(
        &self,
        symbols: &[&str],
        range: &RangeSelection,
    ) -> Result<PerformanceTable, DataError> {
        if symbols.is_empty() {
            return Err(DataError::NoSymbols);
        }
        log::info!(
            "fetching {} symbols from {} ({range})",
            symbols.len(),
            self.name()
        );
        let mut results = Vec::with_capacity(symbols.len());
        for symbol in symbols {
            let result = self.fetch(symbol, range)?;
            log::info!("  {symbol}: {} bars", result.bars.len());
            results.push(result);
        }
        Ok(PerformanceTable::from_fetches(results))
    }
}

/// Provider serving fixed bars from memory. Range selection is ignored.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProvider {
    bars: HashMap<String, Vec<RawBar>>,
}

impl InMemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register bars for a symbol, replacing any previous bars.
    pub fn with_bars(mut self, symbol: &str, bars: Vec<RawBar>) -> Self {
        self.bars.insert(symbol.to_string(), bars);
        self
    }

    /// Register a close-only series on consecutive calendar days from `start`.
    pub fn with_closes(self, symbol: &str, start: NaiveDate, closes: &[f64]) -> Self {
        let bars = closes
            .iter()
            .zip(start.iter_days())
            .map(|(&close, date)| RawBar::flat(date, close))
            .collect();
        self.with_bars(symbol, bars)
    }
}

impl DataProvider for InMemoryProvider {
    fn name(&self) -> &str {
        "in_memory"
    }

    fn fetch(&self, symbol: &str, _range: &RangeSelection) -> Result<FetchResult, DataError> {
        let bars = self
            .bars
            .get(symbol)
            .cloned()
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
        })
    }
}
