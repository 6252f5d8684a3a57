//! Command-line flags and fund-set resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use sectorlab_core::SectorSet;

use crate::report::OutputTarget;

#[derive(Debug, Parser)]
#[command(
    name = "sectorlab",
    about = "SectorLab — relative performance of the Sector SPDR funds"
)]
pub struct Cli {
    /// Directory the CSV tables are written to.
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Add the run timestamp and chart number to output file names.
    #[arg(long, default_value_t = false)]
    pub timestamped: bool,

    /// TOML file with `[[funds]]` entries replacing the default fund set.
    #[arg(long)]
    pub funds: Option<PathBuf>,

    /// Skip the chart viewer after the last prompt round.
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Yahoo Finance chart endpoint.
    #[arg(long, default_value = sectorlab_core::data::yahoo::DEFAULT_ENDPOINT)]
    pub endpoint: String,
}

impl Cli {
    pub fn output_target(&self) -> OutputTarget {
        if self.timestamped {
            OutputTarget::timestamped(&self.output_dir, chrono::Local::now().naive_local())
        } else {
            OutputTarget::fixed(&self.output_dir)
        }
    }

    /// `--funds` if given, else the user config file if present, else the
    /// built-in Sector SPDR set.
    pub fn load_funds(&self) -> Result<SectorSet> {
        let path = self.funds.clone().or_else(|| {
            default_funds_path().filter(|p| p.exists())
        });
        match path {
            Some(path) => load_funds_file(&path),
            None => Ok(SectorSet::sector_spdrs()),
        }
    }
}

/// `<config dir>/sectorlab/funds.toml`
pub fn default_funds_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sectorlab").join("funds.toml"))
}

fn load_funds_file(path: &Path) -> Result<SectorSet> {
    let funds = SectorSet::from_file(path)
        .with_context(|| format!("failed to load fund set from {}", path.display()))?;
    log::info!("loaded {} funds from {}", funds.len(), path.display());
    Ok(funds)
}
