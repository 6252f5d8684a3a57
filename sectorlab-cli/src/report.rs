//! Reporting — CSV tables on disk and the ranked summary on stdout.
//!
//! Two files per chart:
//! - `Sector SPDRs Performance` — the fetched (symbol × field) table
//! - `Sector SPDRs Relative Performance` — percent change per symbol
//!
//! With a fixed target the same two files are overwritten by every chart and
//! every run. A timestamped target gives each chart its own pair.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use sectorlab_core::{Field, PerformanceSummary, PerformanceTable, RelativePerformance};

pub const RAW_BASENAME: &str = "Sector SPDRs Performance";
pub const RELATIVE_BASENAME: &str = "Sector SPDRs Relative Performance";

/// Where the chart tables go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    dir: PathBuf,
    stamp: Option<String>,
}

impl OutputTarget {
    /// Fixed names in `dir`; later charts overwrite earlier ones.
    pub fn fixed(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            stamp: None,
        }
    }

    /// Names carry the run timestamp and chart number.
    pub fn timestamped(dir: impl Into<PathBuf>, started: NaiveDateTime) -> Self {
        Self {
            dir: dir.into(),
            stamp: Some(started.format("%Y%m%d-%H%M%S").to_string()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, base: &str, chart: usize) -> PathBuf {
        match &self.stamp {
            None => self.dir.join(base),
            Some(stamp) => self.dir.join(format!("{base} {stamp} chart{chart}.csv")),
        }
    }

    /// `chart` is 1-based.
    pub fn raw_path(&self, chart: usize) -> PathBuf {
        self.path_for(RAW_BASENAME, chart)
    }

    pub fn relative_path(&self, chart: usize) -> PathBuf {
        self.path_for(RELATIVE_BASENAME, chart)
    }
}

/// Paths written for one chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFiles {
    pub raw: PathBuf,
    pub relative: PathBuf,
}

fn cell(value: Option<f64>, field: Field) -> String {
    match (value, field) {
        (None, _) => String::new(),
        (Some(v), Field::Volume) => format!("{v:.0}"),
        (Some(v), _) => v.to_string(),
    }
}

/// Raw table as CSV: two header rows (ticker, field), then one row per date.
pub fn performance_csv(table: &PerformanceTable) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut tickers = vec!["Ticker".to_string()];
    let mut fields = vec!["Price".to_string()];
    for symbol in table.symbols() {
        for field in Field::ALL {
            tickers.push(symbol.clone());
            fields.push(field.label().to_string());
        }
    }
    wtr.write_record(&tickers)?;
    wtr.write_record(&fields)?;

    for (row, date) in table.dates().iter().enumerate() {
        let mut record = vec![date.to_string()];
        for symbol in table.symbols() {
            for field in Field::ALL {
                record.push(cell(table.value(symbol, field, row), field));
            }
        }
        wtr.write_record(&record)?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Relative table as CSV: `Date,<symbol>...`, then one row per date.
pub fn relative_csv(relative: &RelativePerformance) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["Date".to_string()];
    header.extend(relative.columns().iter().map(|(s, _)| s.clone()));
    wtr.write_record(&header)?;

    for (row, date) in relative.dates().iter().enumerate() {
        let mut record = vec![date.to_string()];
        for (_, series) in relative.columns() {
            record.push(cell(series.get(row).copied().flatten(), Field::Close));
        }
        wtr.write_record(&record)?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// Write both tables for one chart, replacing whatever was there.
pub fn write_tables(
    target: &OutputTarget,
    chart: usize,
    table: &PerformanceTable,
    relative: &RelativePerformance,
) -> Result<WrittenFiles> {
    std::fs::create_dir_all(target.dir())
        .with_context(|| format!("failed to create {}", target.dir().display()))?;

    let raw = target.raw_path(chart);
    std::fs::write(&raw, performance_csv(table)?)
        .with_context(|| format!("failed to write {}", raw.display()))?;

    let relative_path = target.relative_path(chart);
    std::fs::write(&relative_path, relative_csv(relative)?)
        .with_context(|| format!("failed to write {}", relative_path.display()))?;

    Ok(WrittenFiles {
        raw,
        relative: relative_path,
    })
}

/// Aligned text table, best performer first.
pub fn format_summary(summary: &PerformanceSummary) -> String {
    let desc_width = summary
        .rows()
        .iter()
        .map(|r| r.description.len())
        .max()
        .unwrap_or(0)
        .max("Description".len());
    let sym_width = summary
        .rows()
        .iter()
        .map(|r| r.symbol.len())
        .max()
        .unwrap_or(0)
        .max("Symbol".len());

    let mut out = format!(
        "{:<sym_width$}  {:<desc_width$}  {:>14}\n",
        "Symbol", "Description", "Percent Change"
    );
    for row in summary.rows() {
        let change = match row.percent_change {
            Some(v) => format!("{v:.6}"),
            None => "NaN".to_string(),
        };
        out.push_str(&format!(
            "{:<sym_width$}  {:<desc_width$}  {:>14}\n",
            row.symbol, row.description, change
        ));
    }
    out
}

pub fn print_summary(out: &mut impl Write, title: &str, summary: &PerformanceSummary) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "=== {title} ===")?;
    write!(out, "{}", format_summary(summary))?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use sectorlab_core::data::{FetchResult, RawBar};
    use sectorlab_core::SectorSet;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, d).unwrap()
    }

    fn table() -> PerformanceTable {
        let mut bar = RawBar::flat(day(1), 100.0);
        bar.volume = Some(12_345);
        PerformanceTable::from_fetches(vec![
            FetchResult {
                symbol: "SPY".into(),
                bars: vec![bar, RawBar::flat(day(2), 110.0)],
            },
            FetchResult {
                symbol: "XLK".into(),
                bars: vec![RawBar::flat(day(2), 50.0)],
            },
        ])
    }

    #[test]
    fn fixed_target_uses_bare_names() {
        let target = OutputTarget::fixed("out");
        assert_eq!(target.raw_path(1), PathBuf::from("out/Sector SPDRs Performance"));
        assert_eq!(target.raw_path(2), target.raw_path(1));
        assert_eq!(
            target.relative_path(1),
            PathBuf::from("out/Sector SPDRs Relative Performance")
        );
    }

    #[test]
    fn timestamped_target_is_unique_per_chart() {
        let started = day(9).and_hms_opt(14, 5, 30).unwrap();
        let target = OutputTarget::timestamped("out", started);
        assert_eq!(
            target.raw_path(2),
            PathBuf::from("out/Sector SPDRs Performance 20240709-140530 chart2.csv")
        );
        assert_ne!(target.raw_path(1), target.raw_path(2));
        assert_ne!(target.relative_path(1), target.relative_path(2));
    }

    #[test]
    fn write_tables_reports_the_paths_it_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let target = OutputTarget::fixed(dir.path().join("nested"));
        let t = table();
        let rel = RelativePerformance::compute(&t).unwrap();

        let files = write_tables(&target, 1, &t, &rel).unwrap();
        assert_eq!(files.raw, target.raw_path(1));
        assert_eq!(files.relative, target.relative_path(1));
        assert_eq!(
            std::fs::read_to_string(&files.relative).unwrap(),
            relative_csv(&rel).unwrap()
        );
    }

    #[test]
    fn performance_csv_layout() {
        let csv = performance_csv(&table()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Ticker,SPY,SPY,SPY,SPY,SPY,SPY,XLK"));
        assert!(lines[1].starts_with("Price,Open,High,Low,Close,Adj Close,Volume,Open"));
        assert_eq!(lines[2], "2024-07-01,100,100,100,100,100,12345,,,,,,");
        assert_eq!(lines[3], "2024-07-02,110,110,110,110,110,0,50,50,50,50,50,0");
    }

    #[test]
    fn relative_csv_layout() {
        let rel = RelativePerformance::compute(&table()).unwrap();
        let csv = relative_csv(&rel).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines, vec!["Date,SPY,XLK", "2024-07-01,0,", "2024-07-02,10,0"]);
    }

    #[test]
    fn summary_text_is_ranked() {
        let rel = RelativePerformance::compute(&table()).unwrap();
        let funds = SectorSet::new(vec![
            sectorlab_core::Fund {
                symbol: "XLK".into(),
                description: "TECHNOLOGY".into(),
            },
            sectorlab_core::Fund {
                symbol: "SPY".into(),
                description: "S&P 500 INDEX".into(),
            },
        ])
        .unwrap();
        let text = format_summary(&PerformanceSummary::build(&funds, &rel));
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("Percent Change"));
        assert!(lines[1].starts_with("SPY"));
        assert!(lines[1].ends_with("10.000000"));
        assert!(lines[2].starts_with("XLK"));
        assert!(lines[2].ends_with("0.000000"));
    }
}
