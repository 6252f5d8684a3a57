//! Performance table — fetched bars aligned on a shared date index.
//!
//! Columns are two-level (symbol × field). Rows are the union of every
//! symbol's trading dates, sorted ascending; a symbol with no bar on a date
//! has missing cells for that row.

use super::provider::{FetchResult, RawBar};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};

/// Second column level of the performance table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Open,
    High,
    Low,
    Close,
    AdjClose,
    Volume,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Open,
        Field::High,
        Field::Low,
        Field::Close,
        Field::AdjClose,
        Field::Volume,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Field::Open => "Open",
            Field::High => "High",
            Field::Low => "Low",
            Field::Close => "Close",
            Field::AdjClose => "Adj Close",
            Field::Volume => "Volume",
        }
    }

    fn extract(self, bar: &RawBar) -> Option<f64> {
        match self {
            Field::Open => bar.open,
            Field::High => bar.high,
            Field::Low => bar.low,
            Field::Close => bar.close,
            Field::AdjClose => bar.adj_close,
            Field::Volume => bar.volume.map(|v| v as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceTable {
    symbols: Vec<String>,
    dates: Vec<NaiveDate>,
    /// Per symbol, one slot per row of `dates`.
    rows: HashMap<String, Vec<Option<RawBar>>>,
}

impl PerformanceTable {
    /// Align per-symbol fetches on the union of their dates.
    ///
    /// Symbol order follows `fetches`. If a symbol reports the same date
    /// twice, the later bar wins.
    pub fn from_fetches(fetches: Vec<FetchResult>) -> Self {
        let dates: Vec<NaiveDate> = fetches
            .iter()
            .flat_map(|f| f.bars.iter().map(|b| b.date))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let index: HashMap<NaiveDate, usize> =
            dates.iter().enumerate().map(|(i, d)| (*d, i)).collect();

        let mut symbols = Vec::with_capacity(fetches.len());
        let mut rows = HashMap::with_capacity(fetches.len());
        for fetch in fetches {
            let mut column = vec![None; dates.len()];
            for bar in fetch.bars {
                let i = index[&bar.date];
                column[i] = Some(bar);
            }
            symbols.push(fetch.symbol.clone());
            rows.insert(fetch.symbol, column);
        }

        Self {
            symbols,
            dates,
            rows,
        }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Row index, ascending.
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Single cell; `None` when missing or the symbol is unknown.
    pub fn value(&self, symbol: &str, field: Field, row: usize) -> Option<f64> {
        self.rows
            .get(symbol)?
            .get(row)?
            .as_ref()
            .and_then(|bar| field.extract(bar))
    }

    /// Whole column for one (symbol, field) pair, aligned to `dates()`.
    pub fn column(&self, symbol: &str, field: Field) -> Vec<Option<f64>> {
        (0..self.dates.len())
            .map(|row| self.value(symbol, field, row))
            .collect()
    }

    pub fn closes(&self, symbol: &str) -> Vec<Option<f64>> {
        self.column(symbol, Field::Close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn fetch(symbol: &str, bars: Vec<RawBar>) -> FetchResult {
        FetchResult {
            symbol: symbol.to_string(),
            bars,
        }
    }

    #[test]
    fn union_of_dates_sorted_ascending() {
        let table = PerformanceTable::from_fetches(vec![
            fetch("SPY", vec![RawBar::flat(day(3), 3.0), RawBar::flat(day(2), 2.0)]),
            fetch("XLC", vec![RawBar::flat(day(4), 4.0)]),
        ]);
        assert_eq!(table.dates(), &[day(2), day(3), day(4)]);
        assert_eq!(table.closes("SPY"), vec![Some(2.0), Some(3.0), None]);
        assert_eq!(table.closes("XLC"), vec![None, None, Some(4.0)]);
    }

    #[test]
    fn symbol_order_follows_fetch_order() {
        let table = PerformanceTable::from_fetches(vec![
            fetch("XLU", vec![RawBar::flat(day(2), 1.0)]),
            fetch("SPY", vec![RawBar::flat(day(2), 1.0)]),
        ]);
        assert_eq!(table.symbols(), &["XLU".to_string(), "SPY".to_string()]);
    }

    #[test]
    fn volume_is_exposed_as_float() {
        let mut bar = RawBar::flat(day(2), 10.0);
        bar.volume = Some(1_500);
        let table = PerformanceTable::from_fetches(vec![fetch("SPY", vec![bar])]);
        assert_eq!(table.value("SPY", Field::Volume, 0), Some(1_500.0));
        assert_eq!(table.value("SPY", Field::Volume, 1), None);
        assert_eq!(table.value("QQQ", Field::Close, 0), None);
    }

    #[test]
    fn duplicate_date_keeps_later_bar() {
        let table = PerformanceTable::from_fetches(vec![fetch(
            "SPY",
            vec![RawBar::flat(day(2), 1.0), RawBar::flat(day(2), 9.0)],
        )]);
        assert_eq!(table.row_count(), 1);
        assert_eq!(table.closes("SPY"), vec![Some(9.0)]);
    }
}
