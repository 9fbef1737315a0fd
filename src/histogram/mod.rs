//! This module contains the implementation of a 'positional histogram'.
//!
//! A regular histogram counts how many times each byte value appears in a dataset.
//! A positional histogram splits the data into fixed size blocks and keeps one such
//! histogram for every offset within a block.
//!
//! For example, given the bytes `[0, 1, 0, 2]` and a block size of `2`, position `0` sees
//! the bytes `[0, 0]` and position `1` sees `[1, 2]`, so the rows are `[2, 0, 0, ..]` and
//! `[0, 1, 1, ..]` respectively.
//!
//! A block size of `1` degenerates into a single, global histogram.

use crate::error::{HistogramError, Result};
use core::mem::size_of;

pub mod tally;
pub use tally::*;

#[cfg(any(test, feature = "bench"))]
pub mod tally_private;
#[cfg(any(test, feature = "bench"))]
pub use tally_private::*;

/// Count table with one row per block position and one column per byte value.
///
/// Rows are stored back to back in a single buffer; `row(p)[v]` is the number of times
/// value `v` was seen at block position `p`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PositionalHistogram {
    counts: Vec<u64>,
    block_size: usize,
    charset_size: usize,
}

impl PositionalHistogram {
    /// Creates a zero'd table.
    ///
    /// Fails if either dimension is zero, or if the table cannot be allocated: its size in
    /// bytes overflows, exceeds `isize::MAX`, or the allocator refuses it.
    pub fn new(block_size: usize, charset_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(HistogramError::InvalidBlockSize(0));
        }
        if charset_size == 0 {
            return Err(HistogramError::InvalidCharsetSize(0));
        }

        let too_large = HistogramError::TableTooLarge {
            block_size,
            charset_size,
        };
        let len = match block_size.checked_mul(charset_size) {
            Some(len) => len,
            None => return Err(too_large),
        };
        match len.checked_mul(size_of::<u64>()) {
            Some(bytes) if bytes <= isize::MAX as usize => {}
            _ => return Err(too_large),
        }

        let mut counts = Vec::new();
        if counts.try_reserve_exact(len).is_err() {
            return Err(too_large);
        }
        counts.resize(len, 0);

        Ok(Self {
            counts,
            block_size,
            charset_size,
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn charset_size(&self) -> usize {
        self.charset_size
    }

    /// Counts for block position `position`, indexed by byte value.
    ///
    /// # Panics
    ///
    /// If `position >= block_size`.
    pub fn row(&self, position: usize) -> &[u64] {
        let start = position * self.charset_size;
        &self.counts[start..start + self.charset_size]
    }

    /// Iterates rows in block position order.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u64]> {
        self.counts.chunks_exact(self.charset_size)
    }

    /// Sum of every cell, i.e. the number of bytes tallied.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[inline(always)]
    pub(crate) fn increment(&mut self, position: usize, index: usize) {
        self.counts[position * self.charset_size + index] += 1;
    }
}
