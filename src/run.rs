//! End to end driver: validate, tally, summarise, report.

use crate::config::{HistogramOptions, OptionMap};
use crate::error::{HistogramError, Result};
use crate::histogram::PositionalHistogram;
use crate::report::write_report;
use crate::summary::summarize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use tracing::{debug, info, warn};

/// What a successful run processed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RunSummary {
    pub bytes_read: u64,
    pub blocks: usize,
}

/// Validates the string options, then performs [`run`].
pub fn run_with_options(options: &OptionMap) -> Result<RunSummary> {
    let options = HistogramOptions::from_options(options)?;
    run(&options)
}

/// Tallies `options.input` and writes the report to `options.output`.
///
/// The output file is only created once the input has been fully tallied. If writing the
/// report fails, the partially written file is removed.
pub fn run(options: &HistogramOptions) -> Result<RunSummary> {
    info!(path = %options.input.display(), "Opening file");
    let mut input =
        File::open(&options.input).map_err(|e| HistogramError::io(&options.input, e))?;

    info!("Processing input file...");
    let histogram = PositionalHistogram::tally_reader(
        &mut input,
        &options.input,
        options.block_size,
        options.charset_size,
    )?;
    drop(input);
    let bytes_read = histogram.total();
    debug!(bytes_read, block_size = options.block_size, "Tally complete");

    info!("Analyzing input...");
    let summaries = summarize(&histogram);

    info!(path = %options.output.display(), "Opening file");
    let output =
        File::create(&options.output).map_err(|e| HistogramError::io(&options.output, e))?;

    info!("Writing output...");
    let mut writer = BufWriter::new(output);
    let written = write_report(
        &mut writer,
        &histogram,
        &summaries,
        options.sorted,
        options.mode,
    )
    .and_then(|_| writer.flush());
    drop(writer);

    if let Err(e) = written {
        if let Err(remove_error) = fs::remove_file(&options.output) {
            warn!(path = %options.output.display(), %remove_error, "Failed to remove partial output");
        }
        return Err(HistogramError::io(&options.output, e));
    }

    info!("Closing files");
    Ok(RunSummary {
        bytes_read,
        blocks: summaries.len(),
    })
}

/// Collapses a run result into a status code, `0` on success.
pub fn exit_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => 0,
        Err(e) => e.exit_code(),
    }
}
