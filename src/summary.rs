//! Per-block aggregates used by the report: totals for percentages and the width of the
//! largest count for column alignment.

use crate::histogram::PositionalHistogram;

/// Aggregate figures for a single block position.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct BlockSummary {
    /// Sum of every count in the row.
    pub total: u64,
    /// Largest single count in the row.
    pub max_count: u64,
    /// [`decimal_digit_count`] of `max_count`.
    pub max_digits: usize,
}

impl BlockSummary {
    pub fn from_row(row: &[u64]) -> Self {
        let total = row.iter().sum();
        let max_count = row.iter().copied().max().unwrap_or(0);

        Self {
            total,
            max_count,
            max_digits: decimal_digit_count(max_count),
        }
    }
}

/// Number of times `value` can be divided by 10 before reaching zero.
///
/// This is one less than the number of printed digits for anything above zero:
/// `0..=9` gives 0, `10..=99` gives 1 and so on. Report column widths are built on top of it.
pub fn decimal_digit_count(mut value: u64) -> usize {
    let mut digits = 0;
    loop {
        value /= 10;
        if value == 0 {
            return digits;
        }
        digits += 1;
    }
}

/// Summarises every row of `histogram`, in block position order.
pub fn summarize(histogram: &PositionalHistogram) -> Vec<BlockSummary> {
    histogram.rows().map(BlockSummary::from_row).collect()
}
