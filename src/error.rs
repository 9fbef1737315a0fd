//! Errors produced while configuring, tallying or reporting a positional histogram.
//!
//! Every error is terminal for a run. Callers that need a process style status
//! (the CLI, the C exports) use [`HistogramError::exit_code`], which maps each
//! variant to a distinct non-zero value.

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during a histogram run.
#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("Please specify an input file")]
    MissingInput,

    #[error("Please specify an output file")]
    MissingOutput,

    #[error("Block size should be greater than 0, got {0}")]
    InvalidBlockSize(i64),

    #[error("Character set size should be greater than 0, got {0}")]
    InvalidCharsetSize(i64),

    #[error("Precision should be between 0 and {max}, got {value}")]
    InvalidPrecision { value: i64, max: usize },

    /// `block_size * charset_size` counters do not fit in memory.
    #[error("Histogram table of {block_size} blocks x {charset_size} values is too large to allocate")]
    TableTooLarge {
        block_size: usize,
        charset_size: usize,
    },

    #[error("Option {option} has non-integer value '{value}': {source}")]
    InvalidNumber {
        option: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Byte at `offset` did not map into `[0, charset_size)`.
    #[error("Character set size option ({charset_size}) is smaller than actual size: byte {byte:#04x} at offset {offset}")]
    AlphabetTooSmall {
        byte: u8,
        offset: u64,
        charset_size: usize,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistogramError {
    /// Status code handed back to whoever invoked the run. `0` is reserved for success.
    pub fn exit_code(&self) -> i32 {
        match self {
            HistogramError::MissingInput => 1,
            HistogramError::MissingOutput => 2,
            HistogramError::InvalidBlockSize(_) => 3,
            HistogramError::AlphabetTooSmall { .. } => 4,
            HistogramError::InvalidCharsetSize(_) => 5,
            HistogramError::InvalidNumber { .. } => 6,
            HistogramError::UnknownOption(_) => 7,
            HistogramError::Io { .. } => 8,
            HistogramError::TableTooLarge { .. } => 9,
            HistogramError::InvalidPrecision { .. } => 10,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        HistogramError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = core::result::Result<T, HistogramError>;
