//! # seq-core
//!
//! Deterministic pseudo-random sequence generation for test data.
//!
//! Everything in this crate is built around a 64-bit linear congruential
//! generator with explicit state: the fill primitives in [`fill`] take a
//! seed and return the follow-up seed, and the wrappers in [`sequence`]
//! thread that state through [`std::io`]-style streams. Given the same seed
//! and the same sequence of calls, the output is reproducible
//! byte-for-byte on every platform.
//!
//! Statistical quality is deliberately modest and nothing here is suitable
//! for cryptographic or simulation use; reproducibility is the point.

pub mod error;
pub mod fill;
pub mod lcg;
pub mod sequence;


pub use error::{Error, Result};
pub use fill::{fill_bytes, fill_letters};
pub use lcg::DEFAULT_SEED;
pub use sequence::{ByteSequence, Compressibility, NumberSequence};
