//! Compressible pattern fill.

use crate::error::{Error, Result};

use super::bytes::ByteSequence;
use super::numbers::NumberSequence;

/// Size of one pattern block.
const PATTERN_BLOCK_SIZE: usize = 65536;

/// A run of a single printable byte; maximally compressible.
static PATTERN_BLOCK: [u8; PATTERN_BLOCK_SIZE] = [b'A'; PATTERN_BLOCK_SIZE];

/// Requested compressibility of a pattern fill, as a percentage.
///
/// 0 produces purely pseudo-random data, 100 turns every full block into
/// pattern data. Values above 100 are rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compressibility(u8);

impl Compressibility {
    /// No compressible padding at all.
    pub const NONE: Self = Self(0);

    /// Returns the percentage value.
    pub const fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Compressibility {
    type Error = Error;

    fn try_from(percent: u8) -> Result<Self> {
        if percent > 100 {
            return Err(Error::InvalidCompressibility { requested: percent });
        }
        Ok(Self(percent))
    }
}

impl ByteSequence {
    /// Fills `buf` with a chosen amount of compressibility, ranging from 0
    /// (not compressible) to 100 (completely compressible).
    ///
    /// The buffer is split into 64 KiB blocks and the requested percentage
    /// of them holds pattern data, the rest pseudo-random data. Which block
    /// is which is decided by a coin flip drawn from a [`NumberSequence`]
    /// seeded with the current generator state, until one kind runs out; a
    /// final partial block gets one more flip. The generator state advances
    /// only for the random blocks, and the read offset is not touched.
    pub fn pattern_fill(&mut self, buf: &mut [u8], compressibility: Compressibility) {
        if buf.is_empty() {
            return;
        }

        if compressibility.percent() == 0 {
            self.fill(buf);
            return;
        }

        let blocks = buf.len() / PATTERN_BLOCK_SIZE;

        // Single-precision block split, same as the original tool.
        let mut pattern_blocks =
            (blocks as f32 * f32::from(compressibility.percent()) / 100.0) as usize;
        let mut random_blocks = blocks - pattern_blocks;

        let mut coin = NumberSequence::new();
        coin.set(self.state() as i64);

        let mut chunks = buf.chunks_exact_mut(PATTERN_BLOCK_SIZE);
        for block in &mut chunks {
            if random_blocks == 0 {
                block.copy_from_slice(&PATTERN_BLOCK);
                pattern_blocks -= 1;
            } else if pattern_blocks == 0 {
                self.fill(block);
                random_blocks -= 1;
            } else if coin.next() > 0 {
                block.copy_from_slice(&PATTERN_BLOCK);
                pattern_blocks -= 1;
            } else {
                self.fill(block);
                random_blocks -= 1;
            }
        }

        let leftover = chunks.into_remainder();
        if leftover.is_empty() {
            return;
        }

        if coin.next() > 0 {
            leftover.copy_from_slice(&PATTERN_BLOCK[..leftover.len()]);
        } else {
            self.fill(leftover);
        }
    }
}
