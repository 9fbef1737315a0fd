#![doc = include_str!("../README.MD")]

#[cfg(feature = "c-exports")]
pub mod exports;

pub mod config;
pub mod error;
pub mod histogram;
pub mod report;
pub mod run;
pub mod sort;
pub mod summary;

pub use config::{HistogramOptions, OptionMap, ReportMode};
pub use error::HistogramError;
pub use histogram::PositionalHistogram;
pub use run::{run, run_with_options, RunSummary};
