//! Error types for sequence configuration.

use std::fmt;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced when configuring a sequence.
///
/// The fill primitives themselves are total functions and never fail; only
/// configuration values can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Compressibility percentage outside the 0-100 range.
    InvalidCompressibility {
        /// Percentage requested by the caller
        requested: u8,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCompressibility { requested } => {
                write!(f, "compressibility {requested} exceeds 100 percent")
            }
        }
    }
}

impl std::error::Error for Error {}
