//! Stateful sequence wrappers over the fill primitives.

mod bytes;
mod numbers;
mod pattern;


pub use bytes::ByteSequence;
pub use numbers::NumberSequence;
pub use pattern::Compressibility;
