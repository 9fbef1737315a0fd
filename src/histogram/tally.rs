use super::PositionalHistogram;
use crate::error::{HistogramError, Result};
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read granularity of [`PositionalHistogram::tally_reader`].
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Column a byte falls into for an alphabet of `charset_size` values.
///
/// Bytes are read as signed 8-bit values; negative ones wrap around from the top of the
/// alphabet, so `0xFF` lands at `charset_size - 1`. With the default alphabet of 256 this is
/// the plain unsigned byte value. Returns [`None`] if the result is outside `[0, charset_size)`.
#[inline(always)]
pub fn alphabet_index(byte: u8, charset_size: usize) -> Option<usize> {
    let signed = byte as i8;
    let index = if signed < 0 {
        charset_size.checked_sub(signed.unsigned_abs() as usize)?
    } else {
        signed as usize
    };

    (index < charset_size).then_some(index)
}

/// Running state of a tally pass: the table being filled plus the cursor into the block.
pub(crate) struct Tally {
    histogram: PositionalHistogram,
    position: usize,
    offset: u64,
}

impl Tally {
    pub(crate) fn new(histogram: PositionalHistogram) -> Self {
        Self {
            histogram,
            position: 0,
            offset: 0,
        }
    }

    /// Adds `bytes` to the table, continuing from wherever the previous call stopped.
    ///
    /// Fails on the first byte that falls outside the alphabet; bytes before it stay counted.
    pub(crate) fn feed(&mut self, bytes: &[u8]) -> Result<()> {
        let block_size = self.histogram.block_size();
        let charset_size = self.histogram.charset_size();

        for &byte in bytes {
            let index = alphabet_index(byte, charset_size).ok_or(HistogramError::AlphabetTooSmall {
                byte,
                offset: self.offset,
                charset_size,
            })?;

            self.histogram.increment(self.position, index);
            self.position += 1;
            if self.position == block_size {
                self.position = 0;
            }
            self.offset += 1;
        }

        Ok(())
    }

    pub(crate) fn finish(self) -> PositionalHistogram {
        self.histogram
    }
}

impl PositionalHistogram {
    /// Calculates a new positional histogram from an in-memory buffer.
    pub fn from_bytes(bytes: &[u8], block_size: usize, charset_size: usize) -> Result<Self> {
        let mut tally = Tally::new(PositionalHistogram::new(block_size, charset_size)?);
        tally.feed(bytes)?;
        Ok(tally.finish())
    }

    /// Streams `reader` to the end and tallies every byte.
    ///
    /// `path` is only used to label I/O errors.
    pub fn tally_reader<R: Read>(
        reader: &mut R,
        path: &Path,
        block_size: usize,
        charset_size: usize,
    ) -> Result<Self> {
        let mut tally = Tally::new(PositionalHistogram::new(block_size, charset_size)?);
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(read) => read,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(HistogramError::io(path, e)),
            };

            tally.feed(&buffer[..read])?;
        }

        Ok(tally.finish())
    }
}
