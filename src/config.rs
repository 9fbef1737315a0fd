//! Run configuration.
//!
//! Options arrive as named string values (see [`OptionMap`]), the same way a generic option
//! registry would hand them over. They are parsed and validated exactly once, by
//! [`HistogramOptions::from_options`], and everything downstream works with the typed struct.

use crate::error::{HistogramError, Result};
use std::path::PathBuf;

pub const INPUT_FILE: &str = "INPUTFILE";
pub const OUTPUT_FILE: &str = "OUTPUTFILE";
pub const BLOCK_SIZE: &str = "BLOCKSIZE";
pub const CHARSET_SIZE: &str = "CHARSETSIZE";
pub const SORTED: &str = "SORTED";
pub const SHOW_FREQUENCY: &str = "SHOWFREQUENCY";
pub const PRECISION: &str = "PRECISION";

/// Largest accepted `PRECISION`. Anything past this is noise for an `f64` percentage.
pub const MAX_PRECISION: usize = 100;

/// Declared options and their default values, in display order.
const DECLARED: [(&str, &str); 7] = [
    (INPUT_FILE, ""),
    (OUTPUT_FILE, "histogram"),
    (BLOCK_SIZE, "1"),
    (CHARSET_SIZE, "256"),
    (SORTED, "0"),
    (SHOW_FREQUENCY, "0"),
    (PRECISION, "4"),
];

/// Named string options, pre-populated with defaults.
///
/// Names are stored upper case and matched case-insensitively.
/// Only declared options can be assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionMap {
    values: Vec<(&'static str, String)>,
}

impl Default for OptionMap {
    fn default() -> Self {
        Self {
            values: DECLARED
                .iter()
                .map(|(name, value)| (*name, (*value).to_string()))
                .collect(),
        }
    }
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns `value` to the declared option `name`.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let slot = self
            .values
            .iter_mut()
            .find(|(declared, _)| declared.eq_ignore_ascii_case(name))
            .ok_or_else(|| HistogramError::UnknownOption(name.to_string()))?;

        slot.1 = value.into();
        Ok(())
    }

    /// Parses a `NAME=VALUE` assignment and applies it.
    pub fn set_assignment(&mut self, assignment: &str) -> Result<()> {
        match assignment.split_once('=') {
            Some((name, value)) => self.set(name.trim(), value.trim()),
            None => Err(HistogramError::UnknownOption(assignment.to_string())),
        }
    }

    /// Current value of option `name`, if it is declared.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(declared, _)| declared.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All options in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.values.iter().map(|(name, value)| (*name, value.as_str()))
    }

    fn value(&self, name: &'static str) -> &str {
        // All names passed here come from DECLARED.
        self.get(name).unwrap_or_default()
    }

    fn integer(&self, name: &'static str) -> Result<i64> {
        let value = self.value(name);
        value
            .trim()
            .parse::<i64>()
            .map_err(|source| HistogramError::InvalidNumber {
                option: name,
                value: value.to_string(),
                source,
            })
    }
}

/// How each histogram column is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportMode {
    /// Raw occurrence counts, right aligned per block.
    Counts,
    /// Percentage of the block total, with `precision` decimals.
    Frequency { precision: usize },
}

/// Validated settings for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Number of positions in a block; each position gets its own histogram.
    pub block_size: usize,
    /// Number of byte values tracked per position.
    pub charset_size: usize,
    pub sorted: bool,
    pub mode: ReportMode,
}

impl HistogramOptions {
    /// Options for `input` -> `output` with every other setting at its default.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            block_size: 1,
            charset_size: 256,
            sorted: false,
            mode: ReportMode::Counts,
        }
    }

    /// Validates and converts the string options.
    ///
    /// Checks run in a fixed order: input, output, block size, charset size, then the flags.
    pub fn from_options(options: &OptionMap) -> Result<Self> {
        let input = options.value(INPUT_FILE);
        if input.is_empty() {
            return Err(HistogramError::MissingInput);
        }

        let output = options.value(OUTPUT_FILE);
        if output.is_empty() {
            return Err(HistogramError::MissingOutput);
        }

        let block_size = options.integer(BLOCK_SIZE)?;
        if block_size < 1 {
            return Err(HistogramError::InvalidBlockSize(block_size));
        }

        let charset_size = options.integer(CHARSET_SIZE)?;
        if charset_size < 1 {
            return Err(HistogramError::InvalidCharsetSize(charset_size));
        }

        let sorted = options.integer(SORTED)? != 0;
        let show_frequency = options.integer(SHOW_FREQUENCY)? != 0;
        let precision = options.integer(PRECISION)?;
        if !(0..=MAX_PRECISION as i64).contains(&precision) {
            return Err(HistogramError::InvalidPrecision {
                value: precision,
                max: MAX_PRECISION,
            });
        }
        let precision = precision as usize;

        Ok(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            block_size: block_size as usize,
            charset_size: charset_size as usize,
            sorted,
            mode: if show_frequency {
                ReportMode::Frequency { precision }
            } else {
                ReportMode::Counts
            },
        })
    }
}
