//! Error types for the sequence generator CLI.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Specialized `Result` type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to create output file
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Output file already exists
    #[error("{}: Output file already exists; use --force to overwrite", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Requested size does not fit in memory on this platform
    #[error("size {requested} exceeds this platform's addressable range")]
    SizeTooLarge {
        /// The size requested by the caller
        requested: u64,
    },

    /// Invalid compressibility percentage
    #[error(transparent)]
    InvalidCompressibility(#[from] seq_core::Error),

    /// I/O failure while writing output
    #[error(transparent)]
    Io(#[from] io::Error),
}
