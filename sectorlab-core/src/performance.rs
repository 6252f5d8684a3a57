//! Relative performance and the ranked summary.
//!
//! relative[i] = (close[i] - base) / base * 100, where base is the close on
//! the first row of the window. When a fund has no close on the first row it
//! is measured from its first observed close and earlier rows stay missing.

use crate::data::PerformanceTable;
use crate::universe::SectorSet;
use chrono::NaiveDate;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PerformanceError {
    #[error("base price for {symbol} is zero, percent change is undefined")]
    ZeroBasePrice { symbol: String },
}

/// Percent-change series for one symbol's closes.
///
/// An all-missing input yields an all-missing output.
pub fn relative_series(
    symbol: &str,
    closes: &[Option<f64>],
) -> Result<Vec<Option<f64>>, PerformanceError> {
    let Some(first) = closes.iter().position(Option::is_some) else {
        return Ok(vec![None; closes.len()]);
    };
    let base = closes[first].unwrap_or_default();
    if base == 0.0 {
        return Err(PerformanceError::ZeroBasePrice {
            symbol: symbol.to_string(),
        });
    }

    Ok(closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            if i < first {
                None
            } else {
                close.map(|c| (c - base) / base * 100.0)
            }
        })
        .collect())
}

/// One percent-change column per symbol, aligned to the fetched date index.
#[derive(Debug, Clone, PartialEq)]
pub struct RelativePerformance {
    dates: Vec<NaiveDate>,
    columns: Vec<(String, Vec<Option<f64>>)>,
}

impl RelativePerformance {
    pub fn compute(table: &PerformanceTable) -> Result<Self, PerformanceError> {
        let columns = table
            .symbols()
            .iter()
            .map(|symbol| {
                relative_series(symbol, &table.closes(symbol)).map(|s| (symbol.clone(), s))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            dates: table.dates().to_vec(),
            columns,
        })
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// `(symbol, series)` pairs in table order.
    pub fn columns(&self) -> &[(String, Vec<Option<f64>>)] {
        &self.columns
    }

    pub fn series(&self, symbol: &str) -> Option<&[Option<f64>]> {
        self.columns
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, series)| series.as_slice())
    }

    /// Value on the last row. Rows are ascending, so this is the latest date.
    pub fn latest(&self, symbol: &str) -> Option<f64> {
        self.series(symbol)?.last().copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub symbol: String,
    pub description: String,
    pub percent_change: Option<f64>,
}

/// Funds ranked by final percent change, best first; missing values last.
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceSummary {
    rows: Vec<SummaryRow>,
}

impl PerformanceSummary {
    pub fn build(funds: &SectorSet, relative: &RelativePerformance) -> Self {
        let mut rows: Vec<SummaryRow> = funds
            .funds()
            .iter()
            .map(|fund| SummaryRow {
                symbol: fund.symbol.clone(),
                description: fund.description.clone(),
                percent_change: relative.latest(&fund.symbol),
            })
            .collect();
        rows.sort_by(|a, b| descending_missing_last(a.percent_change, b.percent_change));
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }
}

fn descending_missing_last(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.total_cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
