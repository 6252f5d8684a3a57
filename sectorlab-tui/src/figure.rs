//! Figures — one relative-performance chart per prompt round.
//!
//! A figure is plain data: the date axis plus one series per fund. The
//! session loop returns them and the viewer renders the whole list once.

use chrono::NaiveDate;
use sectorlab_core::RelativePerformance;

#[derive(Debug, Clone, PartialEq)]
pub struct FigureSeries {
    pub label: String,
    /// Percent change per row, aligned to `ChartFigure::dates`.
    pub values: Vec<Option<f64>>,
}

impl FigureSeries {
    /// Plot points `(row, value)`; missing rows are skipped.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.values
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
            .collect()
    }

    pub fn last_value(&self) -> Option<f64> {
        self.values.iter().rev().find_map(|v| *v)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFigure {
    pub title: String,
    pub dates: Vec<NaiveDate>,
    pub series: Vec<FigureSeries>,
}

impl ChartFigure {
    pub fn from_relative(title: impl Into<String>, relative: &RelativePerformance) -> Self {
        Self {
            title: title.into(),
            dates: relative.dates().to_vec(),
            series: relative
                .columns()
                .iter()
                .map(|(symbol, values)| FigureSeries {
                    label: symbol.clone(),
                    values: values.clone(),
                })
                .collect(),
        }
    }

    /// `(min, max)` over every present value, or `None` if nothing is plotted.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().flatten().copied())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    pub fn is_empty(&self) -> bool {
        self.value_bounds().is_none()
    }
}
