//! Command line argument parsing for the seqgen utility.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use seq_cli::{parse_seed, parse_size, CliConfig, OperationMode, Result};
use seq_core::Compressibility;

/// Output flavor selected with `--mode`.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Sample lines of lowercase letters
    Letters,
    /// Sample lines of hex-encoded bytes
    Bytes,
    /// Raw byte stream
    Stream,
}

/// Deterministic test-data generator.
#[derive(Parser, Debug)]
#[command(
    name = "seqgen",
    version = "0.1.0",
    about = "Generate reproducible pseudo-random letters and bytes",
    long_about = "seqgen fills buffers from a seeded linear congruential \
                  generator. The same seed always produces the same output, \
                  which makes the streams usable as reproducible test data. \
                  The final seed reported by --verbose continues the \
                  sequence in a later invocation."
)]
pub struct SeqgenOpts {
    /// Output mode
    #[arg(short = 'm', long = "mode", value_enum, default_value = "letters")]
    pub mode: Mode,

    /// Initial seed, decimal or 0x-prefixed hex
    #[arg(
        short = 's',
        long = "seed",
        value_name = "SEED",
        value_parser = parse_seed,
        default_value = "0x490c734ad1ccf6e9"
    )]
    pub seed: u64,

    /// Sample line length, or raw stream size (K/M/G suffixes allowed)
    #[arg(
        short = 'n',
        long = "size",
        value_name = "SIZE",
        value_parser = parse_size,
        default_value = "32"
    )]
    pub size: u64,

    /// Number of sample lines (ignored by --mode stream)
    #[arg(short = 'c', long = "count", value_name = "NUM", default_value_t = 10)]
    pub count: u64,

    /// Compressibility percentage for --mode stream
    #[arg(long = "compressibility", value_name = "PERCENT", default_value_t = 0)]
    pub compressibility: u8,

    /// Write to FILE instead of standard output
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short = 'f', long = "force")]
    pub force: bool,

    /// Report the final seed on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl SeqgenOpts {
    /// Parse command line arguments.
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Build CLI configuration from the parsed options.
    ///
    /// # Errors
    ///
    /// Returns an error when the compressibility percentage is out of
    /// range.
    pub fn config(&self) -> Result<CliConfig> {
        Ok(CliConfig {
            mode: match self.mode {
                Mode::Letters => OperationMode::Letters,
                Mode::Bytes => OperationMode::Bytes,
                Mode::Stream => OperationMode::Stream,
            },
            seed: self.seed,
            size: self.size,
            count: self.count,
            compressibility: Compressibility::try_from(self.compressibility)?,
            output: self.output.clone(),
            force: self.force,
            verbose: self.verbose,
        })
    }
}
