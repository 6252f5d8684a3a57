//! Session loop: prompt → fetch → compute → report, once per chart.
//!
//! Nothing carries over between charts except the returned figures, which
//! the caller renders once after the last chart.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sectorlab_core::{
    DataProvider, PerformanceSummary, RangeSelection, RelativePerformance, SectorSet,
};
use sectorlab_tui::ChartFigure;

use crate::prompt::Prompter;
use crate::report::{print_summary, write_tables, OutputTarget};

pub struct Session<'a> {
    provider: &'a dyn DataProvider,
    funds: &'a SectorSet,
    target: &'a OutputTarget,
}

impl<'a> Session<'a> {
    pub fn new(
        provider: &'a dyn DataProvider,
        funds: &'a SectorSet,
        target: &'a OutputTarget,
    ) -> Self {
        Self {
            provider,
            funds,
            target,
        }
    }

    /// Build one chart for an already chosen range. `chart` is 1-based.
    pub fn run_chart(
        &self,
        chart: usize,
        range: &RangeSelection,
        out: &mut impl Write,
    ) -> Result<ChartFigure> {
        let symbols = self.funds.symbols();
        let table = self
            .provider
            .fetch_group(&symbols, range)
            .with_context(|| format!("chart {chart}: fetching {range}"))?;

        let relative = RelativePerformance::compute(&table)
            .with_context(|| format!("chart {chart}: computing relative performance"))?;

        let files = write_tables(self.target, chart, &table, &relative)?;
        log::info!(
            "chart {chart}: wrote {} and {}",
            files.raw.display(),
            files.relative.display()
        );

        let title = format!("Chart {chart} | {range}");
        let summary = PerformanceSummary::build(self.funds, &relative);
        print_summary(out, &title, &summary)?;

        Ok(ChartFigure::from_relative(title, &relative))
    }

    /// Ask for the chart count, then run every chart in turn.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<Vec<ChartFigure>> {
        let charts = prompter.chart_count()?;
        // The count is user input; grow as charts complete.
        let mut figures = Vec::new();
        for chart in 1..=charts {
            let range = prompter.range_selection()?;
            log::info!("chart {chart}/{charts}: {range}");
            let figure = self.run_chart(chart, &range, prompter.output())?;
            figures.push(figure);
        }
        Ok(figures)
    }
}
