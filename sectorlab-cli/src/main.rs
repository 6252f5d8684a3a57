//! SectorLab — interactive relative-performance report for the Sector SPDRs.
//!
//! Prompts for a chart count, then per chart for a named period or a date
//! window. Each chart fetches all funds, writes two CSV tables, prints the
//! ranked summary and adds a figure; all figures are shown at the end.

use std::io;

use anyhow::Result;
use clap::Parser;
use sectorlab_cli::config::Cli;
use sectorlab_cli::{logger, Prompter, Session};
use sectorlab_core::YahooProvider;

fn main() -> Result<()> {
    logger::log_init();
    let cli = Cli::parse();

    let funds = cli.load_funds()?;
    let target = cli.output_target();
    let provider = YahooProvider::with_endpoint(&cli.endpoint)?;

    let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
    let session = Session::new(&provider, &funds, &target);
    let figures = session.run(&mut prompter)?;

    if cli.no_plot {
        println!("Built {} chart(s); viewer skipped.", figures.len());
        return Ok(());
    }
    sectorlab_tui::show_figures(&figures)
}
