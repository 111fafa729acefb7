//! Configuration types and constants for the sequence generator CLI.

use std::path::PathBuf;

use seq_core::{Compressibility, DEFAULT_SEED};

/// Default buffer size for streaming output.
pub const DEFAULT_BUFFER_SIZE: usize = 512 * 1024;

/// Default number of sample lines printed by the demo modes.
pub const DEFAULT_SAMPLE_COUNT: u64 = 10;

/// Default length of one sample line.
pub const DEFAULT_SAMPLE_SIZE: u64 = 32;

/// Represents different modes of operation for the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print sample lines of lowercase letters
    Letters,
    /// Print sample lines of hex-encoded bytes
    Bytes,
    /// Write a raw byte stream to the output
    Stream,
}

/// Configuration for one driver invocation
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Initial generator seed
    pub seed: u64,
    /// Length of one sample line, or of the raw stream, in bytes
    pub size: u64,
    /// Number of sample lines; ignored by the stream mode
    pub count: u64,
    /// Compressibility of the raw stream
    pub compressibility: Compressibility,
    /// Output file; stdout when absent
    pub output: Option<PathBuf>,
    /// Force overwrite of an existing output file
    pub force: bool,
    /// Report the final seed on stderr
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Letters,
            seed: DEFAULT_SEED,
            size: DEFAULT_SAMPLE_SIZE,
            count: DEFAULT_SAMPLE_COUNT,
            compressibility: Compressibility::NONE,
            output: None,
            force: false,
            verbose: false,
        }
    }
}
