//! Bounded pseudo-random byte stream.

use std::io;
use std::io::{Read, Seek, SeekFrom};

use crate::fill::fill_bytes;
use crate::lcg::DEFAULT_SEED;

/// A generator of not-crypto-strong random bytes.
///
/// The sequence carries a total size and a read offset so it can be
/// consumed through [`io::Read`] (e.g. with [`io::copy`]); reads return
/// `Ok(0)` once the size is exhausted. The generator state advances only
/// when bytes are produced, so seeking changes the position within the
/// stream without touching the seed: reading, seeking back to zero, and
/// re-reading yields different data.
#[derive(Debug, Clone)]
pub struct ByteSequence {
    size: u64,
    offset: u64,
    next: u64,
}

impl ByteSequence {
    /// Creates a sequence of the given size with the default seed.
    pub const fn new(size: u64) -> Self {
        Self::with_seed(size, DEFAULT_SEED)
    }

    /// Creates a sequence of the given size starting from `seed`.
    pub const fn with_seed(size: u64, seed: u64) -> Self {
        Self {
            size,
            offset: 0,
            next: seed,
        }
    }

    /// Resets the generator state to `seed`. The stream position is
    /// unaffected.
    pub fn reseed(&mut self, seed: u64) {
        self.next = seed;
    }

    /// Returns the current generator state.
    ///
    /// Passing it to [`ByteSequence::with_seed`] or a fill primitive
    /// continues the sequence where this one left off.
    pub const fn state(&self) -> u64 {
        self.next
    }

    /// Total size of the stream in bytes.
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Current position within the stream.
    pub const fn position(&self) -> u64 {
        self.offset
    }

    /// Fills `buf` without paying attention to the sequence size.
    ///
    /// The generator state advances as usual but the read offset stays
    /// where it is.
    pub fn fill(&mut self, buf: &mut [u8]) {
        self.next = fill_bytes(buf, self.next);
    }
}

impl Read for ByteSequence {
    /// Fills the buffer until the sequence's size is exhausted, after which
    /// reads return `Ok(0)`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.offset >= self.size {
            return Ok(0);
        }

        let remaining = self.size - self.offset;
        let len = match usize::try_from(remaining) {
            Ok(remaining) => buf.len().min(remaining),
            Err(_) => buf.len(),
        };

        self.next = fill_bytes(&mut buf[..len], self.next);
        self.offset += len as u64;
        Ok(len)
    }
}

impl Seek for ByteSequence {
    /// Moves the read position; the generator state is left alone.
    ///
    /// Positions outside `0..=size` are rejected with
    /// [`io::ErrorKind::InvalidInput`].
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::Current(delta) => self.offset.checked_add_signed(delta),
            SeekFrom::End(delta) => self.size.checked_add_signed(delta),
        };

        let Some(target) = target else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "cannot seek to a negative offset",
            ));
        };

        if target > self.size {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "cannot seek past end of sequence to offset {target} (size {})",
                    self.size
                ),
            ));
        }

        self.offset = target;
        Ok(target)
    }
}
