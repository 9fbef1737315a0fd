//! This contains implementations that don't ship to the public API, for testing and
//! benchmarking.

use crate::error::{HistogramError, Result};

/// Slow, obvious version of the tally pass: one `Vec` per block position, indexed directly.
/// This is the reference implementation to run other tests against.
pub fn tally_bytes_reference(
    bytes: &[u8],
    block_size: usize,
    charset_size: usize,
) -> Result<Vec<Vec<u64>>> {
    let mut rows = vec![vec![0u64; charset_size]; block_size];

    for (offset, &byte) in bytes.iter().enumerate() {
        let value = byte as i8 as i64;
        let index = if value < 0 {
            charset_size as i64 + value
        } else {
            value
        };

        if index < 0 || index >= charset_size as i64 {
            return Err(HistogramError::AlphabetTooSmall {
                byte,
                offset: offset as u64,
                charset_size,
            });
        }

        rows[offset % block_size][index as usize] += 1;
    }

    Ok(rows)
}
