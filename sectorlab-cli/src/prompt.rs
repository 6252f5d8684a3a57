//! Interactive prompts.
//!
//! Each prompt loops until its input is valid, printing a hint after every
//! rejected attempt. Answers are taken as typed, minus the line terminator.
//! The chart count is the exception: it tolerates surrounding whitespace,
//! and non-numeric input is returned as an error for the caller to abort on.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use sectorlab_core::{parse_iso_date, Period, RangeMode, RangeSelection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("chart count must be a whole number, got '{0}'")]
    InvalidChartCount(String),

    #[error("input ended before a valid value was entered")]
    EndOfInput,

    #[error("prompt I/O: {0}")]
    Io(#[from] io::Error),
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
    hints_printed: usize,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            hints_printed: 0,
        }
    }

    /// Print `question`, read one line, return it without its line terminator.
    fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        write!(self.output, "{question} ")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    fn hint(&mut self, text: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{text}")?;
        self.hints_printed += 1;
        Ok(())
    }

    fn period_hint(&mut self) -> Result<(), PromptError> {
        self.hint(&format!("Valid periods: {}", Period::valid_codes()))
    }

    /// Number of charts to build. `0` asks again; a negative count means
    /// no charts at all.
    pub fn chart_count(&mut self) -> Result<usize, PromptError> {
        loop {
            let answer = self.ask("Enter the number of charts you would like to generate.")?;
            let count: i64 = answer
                .trim()
                .parse()
                .map_err(|_| PromptError::InvalidChartCount(answer.clone()))?;
            if count != 0 {
                return Ok(usize::try_from(count).unwrap_or(0));
            }
        }
    }

    pub fn range_mode(&mut self) -> Result<RangeMode, PromptError> {
        loop {
            let answer = self.ask(
                "Enter 'dates' to use specific dates or 'period' to use a pre-defined period.",
            )?;
            match answer.parse() {
                Ok(mode) => return Ok(mode),
                Err(_) => self.period_hint()?,
            }
        }
    }

    pub fn period(&mut self) -> Result<Period, PromptError> {
        loop {
            let answer = self.ask("Enter the period you would like to consider.")?;
            match answer.parse() {
                Ok(period) => return Ok(period),
                Err(_) => self.period_hint()?,
            }
        }
    }

    /// One `YYYY-MM-DD` date; `which` is "start" or "end".
    pub fn date(&mut self, which: &str) -> Result<NaiveDate, PromptError> {
        loop {
            let answer = self.ask(&format!("Enter the {which} date in YYYY-MM-DD format."))?;
            match parse_iso_date(&answer) {
                Ok(date) => return Ok(date),
                Err(e) => self.hint(&format!("{e}."))?,
            }
        }
    }

    /// Range mode followed by either a period or a start and end date.
    ///
    /// Start and end are not compared; the provider decides what an inverted
    /// window means.
    pub fn range_selection(&mut self) -> Result<RangeSelection, PromptError> {
        match self.range_mode()? {
            RangeMode::Period => Ok(RangeSelection::Period(self.period()?)),
            RangeMode::Dates => {
                let start = self.date("start")?;
                let end = self.date("end")?;
                Ok(RangeSelection::Dates { start, end })
            }
        }
    }

    pub fn hints_printed(&self) -> usize {
        self.hints_printed
    }

    /// Writer the prompts go to; reports print through it too.
    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
