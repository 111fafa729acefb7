//! Linear congruential generator core.
//!
//! Algorithm and constants borrowed from Numerical Recipes in C (2nd ed),
//! section 7.1.

/// Multiplier of the linear congruential step.
pub const MULTIPLIER: u64 = 1_664_525;

/// Increment of the linear congruential step.
pub const INCREMENT: u64 = 1_013_904_223;

/// Seed used by sequences constructed without an explicit one.
///
/// An arbitrary start value pushed through a couple rounds of the
/// generator.
pub const DEFAULT_SEED: u64 = 0x490c_734a_d1cc_f6e9;

/// Advances the generator by one step.
///
/// The arithmetic wraps modulo 2^64; the wraparound is what gives the
/// generator its period, not an overflow to guard against. Total over all
/// 64-bit inputs, no error conditions.
pub const fn next_state(state: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}
