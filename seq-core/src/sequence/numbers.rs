//! Signed pseudo-random number stream.

use crate::lcg;

/// A generator of not-crypto-strong random numbers.
///
/// This is the signed-integer view of the same linear congruential
/// generator that backs [`ByteSequence`](crate::ByteSequence): stepping
/// either from the same seed produces bit-identical states.
#[derive(Debug, Clone)]
pub struct NumberSequence {
    next: i64,
}

impl NumberSequence {
    /// Creates a sequence with the default seed.
    pub const fn new() -> Self {
        Self {
            next: lcg::DEFAULT_SEED as i64,
        }
    }

    /// Returns the next number in the sequence.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> i64 {
        self.next = lcg::next_state(self.next as u64) as i64;
        self.next
    }

    /// Reseeds the sequence to the given value.
    pub fn set(&mut self, seed: i64) {
        self.next = seed;
    }
}

impl Default for NumberSequence {
    fn default() -> Self {
        Self::new()
    }
}
