//! Fund set — the ordered list of sector funds and their descriptions.
//!
//! The default set is the eleven Select Sector SPDRs plus SPY as the
//! broad-market reference. A replacement set can be loaded from a TOML file:
//!
//! ```toml
//! [[funds]]
//! symbol = "SPY"
//! description = "S&P 500 INDEX"
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// One tracked fund.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fund {
    pub symbol: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum UniverseError {
    #[error("read fund file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse fund TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("fund set is empty")]
    Empty,

    #[error("duplicate symbol in fund set: {0}")]
    DuplicateSymbol(String),
}

/// Ordered set of funds. Order is display order; symbols are unique.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectorSet {
    funds: Vec<Fund>,
}

const SECTOR_SPDRS: [(&str, &str); 12] = [
    ("SPY", "S&P 500 INDEX"),
    ("XLI", "INDUSTRIAL"),
    ("XLV", "HEALTH CARE"),
    ("XLK", "TECHNOLOGY"),
    ("XLF", "FINANCIAL"),
    ("XLB", "MATERIALS"),
    ("XLE", "ENERGY"),
    ("XLU", "UTILITIES"),
    ("XLY", "CONSUMER DISCRETIONARY"),
    ("XLP", "CONSUMER STAPLES"),
    ("XLC", "COMMUNICATION SERVICES"),
    ("XLRE", "REAL ESTATE"),
];

impl SectorSet {
    /// Build a set, rejecting empty lists and duplicate symbols.
    pub fn new(funds: Vec<Fund>) -> Result<Self, UniverseError> {
        if funds.is_empty() {
            return Err(UniverseError::Empty);
        }
        let mut seen = HashSet::new();
        for fund in &funds {
            if !seen.insert(fund.symbol.as_str()) {
                return Err(UniverseError::DuplicateSymbol(fund.symbol.clone()));
            }
        }
        Ok(Self { funds })
    }

    /// SPY plus the eleven Select Sector SPDR funds.
    pub fn sector_spdrs() -> Self {
        Self {
            funds: SECTOR_SPDRS
                .iter()
                .map(|(symbol, description)| Fund {
                    symbol: (*symbol).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
        }
    }

    /// Load a fund set from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, UniverseError> {
        let content = std::fs::read_to_string(path).map_err(|source| UniverseError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a fund set from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, UniverseError> {
        let parsed: SectorSet = toml::from_str(content)?;
        Self::new(parsed.funds)
    }

    pub fn funds(&self) -> &[Fund] {
        &self.funds
    }

    /// Tickers in display order.
    pub fn symbols(&self) -> Vec<&str> {
        self.funds.iter().map(|f| f.symbol.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.funds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funds.is_empty()
    }
}

impl Default for SectorSet {
    fn default() -> Self {
        Self::sector_spdrs()
    }
}
