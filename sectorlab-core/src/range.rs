//! Range selection: named lookback periods, explicit date windows, and the
//! strict `YYYY-MM-DD` date check used by the prompts.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("unknown period '{0}'")]
    UnknownPeriod(String),

    #[error("unknown range mode '{0}' (expected 'dates' or 'period')")]
    UnknownMode(String),

    #[error("'{0}' is not a date in YYYY-MM-DD format")]
    InvalidDate(String),
}

/// Named lookback window, resolved by the data provider into dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    OneDay,
    FiveDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    TwoYears,
    FiveYears,
    TenYears,
    YearToDate,
    Max,
}

impl Period {
    pub const ALL: [Period; 11] = [
        Period::OneDay,
        Period::FiveDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::OneYear,
        Period::TwoYears,
        Period::FiveYears,
        Period::TenYears,
        Period::YearToDate,
        Period::Max,
    ];

    /// Provider code, e.g. `1mo`.
    pub fn code(self) -> &'static str {
        match self {
            Period::OneDay => "1d",
            Period::FiveDays => "5d",
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
            Period::TwoYears => "2y",
            Period::FiveYears => "5y",
            Period::TenYears => "10y",
            Period::YearToDate => "ytd",
            Period::Max => "max",
        }
    }

    /// Comma-separated list of every valid code, for prompt hints.
    pub fn valid_codes() -> String {
        Self::ALL
            .iter()
            .map(|p| p.code())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Period {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.code() == s)
            .ok_or_else(|| RangeError::UnknownPeriod(s.to_string()))
    }
}

/// How the user wants to pick the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    Dates,
    Period,
}

impl FromStr for RangeMode {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dates" => Ok(RangeMode::Dates),
            "period" => Ok(RangeMode::Period),
            other => Err(RangeError::UnknownMode(other.to_string())),
        }
    }
}

/// The window one chart covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSelection {
    Period(Period),
    /// `end` is exclusive, matching the provider's convention.
    Dates { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for RangeSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeSelection::Period(p) => write!(f, "period {p}"),
            RangeSelection::Dates { start, end } => write!(f, "{start} to {end}"),
        }
    }
}

/// Parse a date that strictly matches `YYYY-MM-DD` and exists on the calendar.
///
/// chrono alone accepts single-digit months and days, so the shape is checked
/// byte by byte before parsing.
pub fn parse_iso_date(text: &str) -> Result<NaiveDate, RangeError> {
    let bytes = text.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(RangeError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| RangeError::InvalidDate(text.to_string()))
}
