//! End-to-end session tests: scripted stdin, in-memory market data, temp dirs.

use std::io::Cursor;

use chrono::NaiveDate;
use sectorlab_cli::report::{RAW_BASENAME, RELATIVE_BASENAME};
use sectorlab_cli::{OutputTarget, PromptError, Prompter, Session};
use sectorlab_core::data::{DataError, DataProvider, FetchResult, InMemoryProvider, RawBar};
use sectorlab_core::{Period, RangeSelection, SectorSet};

/// Serves a different price level per requested period, so successive charts
/// produce distinguishable files.
struct PeriodPriced;

impl PeriodPriced {
    fn level(range: &RangeSelection) -> f64 {
        match range {
            RangeSelection::Period(Period::OneMonth) => 111.25,
            RangeSelection::Period(_) => 222.75,
            RangeSelection::Dates { .. } => 333.5,
        }
    }
}

impl DataProvider for PeriodPriced {
    fn name(&self) -> &str {
        "period_priced"
    }

    fn fetch(&self, symbol: &str, range: &RangeSelection) -> Result<FetchResult, DataError> {
        let level = Self::level(range);
        // Give each symbol its own slope so the summary has a strict order.
        let slope = symbol.len() as f64 + symbol.bytes().map(f64::from).sum::<f64>() / 1000.0;
        let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let bars = (0..3)
            .zip(start.iter_days())
            .map(|(i, date)| RawBar::flat(date, level + slope * i as f64))
            .collect();
        Ok(FetchResult {
            symbol: symbol.to_string(),
            bars,
        })
    }
}

fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

#[test]
fn second_chart_overwrites_fixed_files() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("2\nperiod\n1mo\nperiod\nytd\n");
    let figures = session.run(&mut p).unwrap();
    assert_eq!(figures.len(), 2);
    assert_eq!(figures[0].title, "Chart 1 | period 1mo");
    assert_eq!(figures[1].title, "Chart 2 | period ytd");

    let raw = std::fs::read_to_string(dir.path().join(RAW_BASENAME)).unwrap();
    assert!(raw.contains("222.75"));
    assert!(!raw.contains("111.25"), "first chart's prices must be gone");

    let relative = std::fs::read_to_string(dir.path().join(RELATIVE_BASENAME)).unwrap();
    assert!(relative.starts_with("Date,SPY,XLI,XLV,XLK,XLF,XLB,XLE,XLU,XLY,XLP,XLC,XLRE"));
    assert_eq!(relative.lines().count(), 4);

    // Only the two fixed files exist.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[test]
fn timestamped_target_keeps_every_chart() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let started = NaiveDate::from_ymd_opt(2024, 8, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let target = OutputTarget::timestamped(dir.path(), started);
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("2\nperiod\n1mo\nperiod\n5y\n");
    session.run(&mut p).unwrap();

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 4);
    let first = std::fs::read_to_string(target.raw_path(1)).unwrap();
    let second = std::fs::read_to_string(target.raw_path(2)).unwrap();
    assert!(first.contains("111.25"));
    assert!(second.contains("222.75"));
}

#[test]
fn summary_printed_best_first() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("1\nperiod\nmax\n");
    session.run(&mut p).unwrap();
    let out = String::from_utf8(p.into_output()).unwrap();

    let changes: Vec<f64> = out
        .lines()
        .skip_while(|l| !l.starts_with("Symbol"))
        .skip(1)
        .take_while(|l| !l.is_empty())
        .map(|l| l.split_whitespace().last().unwrap().parse().unwrap())
        .collect();
    assert_eq!(changes.len(), 12);
    assert!(changes.windows(2).all(|w| w[0] >= w[1]));
    assert!(out.contains("=== Chart 1 | period max ==="));
}

#[test]
fn bad_dates_print_one_hint_each() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("1\ndates\n2023-02-30\n23-01-01\n2023-1-1\n2023-01-03\n2023-12-29\n");
    let figures = session.run(&mut p).unwrap();
    assert_eq!(figures.len(), 1);
    assert_eq!(p.hints_printed(), 3);
    let out = String::from_utf8(p.into_output()).unwrap();
    assert_eq!(out.matches("is not a date in YYYY-MM-DD format").count(), 3);
    assert!(out.contains("Chart 1 | 2023-01-03 to 2023-12-29"));
}

#[test]
fn zero_base_price_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::new(vec![sectorlab_core::Fund {
        symbol: "XLE".into(),
        description: "ENERGY".into(),
    }])
    .unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let provider = InMemoryProvider::new().with_closes("XLE", start, &[0.0, 1.0]);
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&provider, &funds, &target);

    let mut p = prompter("1\nperiod\n1y\n");
    let err = session.run(&mut p).unwrap_err();
    assert!(format!("{err:#}").contains("base price for XLE is zero"));
}

#[test]
fn non_numeric_chart_count_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("many\n");
    let err = session.run(&mut p).unwrap_err();
    assert!(err.to_string().contains("whole number"));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn huge_chart_count_waits_for_input() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("1000000000000000\n");
    let err = session.run(&mut p).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PromptError>(),
        Some(PromptError::EndOfInput)
    ));
}

#[test]
fn negative_chart_count_runs_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let session = Session::new(&PeriodPriced, &funds, &target);

    let mut p = prompter("-2\n");
    let figures = session.run(&mut p).unwrap();
    assert!(figures.is_empty());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    sectorlab_tui::show_figures(&figures).unwrap();
}

#[test]
fn fetch_failure_aborts_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let funds = SectorSet::sector_spdrs();
    let target = OutputTarget::fixed(dir.path());
    let provider = InMemoryProvider::new();
    let session = Session::new(&provider, &funds, &target);

    let mut p = prompter("1\nperiod\n3mo\n");
    let err = session.run(&mut p).unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("chart 1: fetching period 3mo"));
    assert!(msg.contains("symbol not found: SPY"));
}
