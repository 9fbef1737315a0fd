//! Text rendering of a [`PositionalHistogram`].
//!
//! One section per block position, in order:
//!
//! ```text
//! Histogram for block index 0: 
//! 65, 3; 
//! 66, 1; 
//! ```
//!
//! Every line, header included, ends with a single space before the newline.
//!
//! In [`ReportMode::Counts`] the count column is right aligned to the widest count in the block
//! plus one space. In [`ReportMode::Frequency`] each line holds the percentage of the block total
//! instead, and a block that saw no bytes reports `0` for every value.

use crate::config::{ReportMode, MAX_PRECISION};
use crate::histogram::PositionalHistogram;
use crate::sort::{columns, sort_by_count_descending, Column};
use crate::summary::BlockSummary;
use std::io::{self, Write};

/// Percentage of `total` that `count` represents, `0` for an empty block.
#[inline]
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }

    count as f64 / total as f64 * 100.0
}

/// Writes the whole report for `histogram` into `out`.
///
/// `summaries` must hold one entry per block position, as produced by
/// [`crate::summary::summarize`].
pub fn write_report<W: Write>(
    out: &mut W,
    histogram: &PositionalHistogram,
    summaries: &[BlockSummary],
    sorted: bool,
    mode: ReportMode,
) -> io::Result<()> {
    debug_assert_eq!(summaries.len(), histogram.block_size());

    for (block_index, (row, summary)) in histogram.rows().zip(summaries).enumerate() {
        let mut block = columns(row);
        if sorted {
            sort_by_count_descending(&mut block);
        }

        write_block(out, block_index, &block, summary, mode)?;
    }

    Ok(())
}

fn write_block<W: Write>(
    out: &mut W,
    block_index: usize,
    block: &[Column],
    summary: &BlockSummary,
    mode: ReportMode,
) -> io::Result<()> {
    writeln!(out, "Histogram for block index {block_index}: ")?;

    match mode {
        ReportMode::Counts => {
            // Widest count is `max_digits + 1` characters, plus one separating space.
            let width = summary.max_digits + 2;
            for column in block {
                writeln!(out, "{},{:>width$}; ", column.label, column.count)?;
            }
        }
        ReportMode::Frequency { precision } => {
            let precision = precision.min(MAX_PRECISION);
            for column in block {
                let percent = percentage(column.count, summary.total);
                writeln!(out, "{}, {percent:.precision$}; ", column.label)?;
            }
        }
    }

    Ok(())
}
