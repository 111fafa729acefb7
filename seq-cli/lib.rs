//! Common utilities for the sequence generator command-line driver.
//!
//! The driver is a thin illustrative wrapper around `seq-core`: it prints
//! reproducible sample lines of letters or hex-encoded bytes, or streams a
//! raw pseudo-random byte stream to a file or stdout. All output is fully
//! determined by the seed, the sizes, and the mode.

pub mod config;
pub mod error;
pub mod operations;


use std::fs::File;
use std::io;
use std::path::Path;

pub use config::{CliConfig, OperationMode};
pub use error::{Error, Result};

use config::DEFAULT_BUFFER_SIZE;

/// Opens the output writer for the run: the given file, or stdout when no
/// path was configured.
///
/// # Errors
///
/// Refuses to overwrite an existing file unless `force` is set, and reports
/// creation failures together with the offending path.
fn open_output(path: Option<&Path>, force: bool) -> Result<Box<dyn io::Write>> {
    let Some(path) = path else {
        return Ok(Box::new(io::BufWriter::with_capacity(
            DEFAULT_BUFFER_SIZE,
            io::stdout(),
        )));
    };

    if path.exists() && !force {
        return Err(Error::OutputExists {
            path: path.to_path_buf(),
        });
    }

    let file = File::create(path).map_err(|source| Error::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(io::BufWriter::with_capacity(
        DEFAULT_BUFFER_SIZE,
        file,
    )))
}

/// Converts a sample size into an in-memory buffer length.
fn sample_size(size: u64) -> Result<usize> {
    usize::try_from(size).map_err(|_| Error::SizeTooLarge { requested: size })
}

/// Runs one driver invocation described by `config`.
///
/// # Errors
///
/// Returns an [`Error`] when the output cannot be opened or written, or
/// when a sample size does not fit in memory on this platform.
pub fn run_cli(config: &CliConfig) -> Result<()> {
    let mut output = open_output(config.output.as_deref(), config.force)?;

    let final_seed = match config.mode {
        OperationMode::Letters => {
            let size = sample_size(config.size)?;
            operations::write_letter_samples(&mut output, config.count, size, config.seed)?
        }
        OperationMode::Bytes => {
            let size = sample_size(config.size)?;
            operations::write_byte_samples(&mut output, config.count, size, config.seed)?
        }
        OperationMode::Stream => {
            if config.compressibility.percent() == 0 {
                operations::stream_bytes(&mut output, config.size, config.seed)?
            } else {
                operations::stream_pattern(
                    &mut output,
                    config.size,
                    config.seed,
                    config.compressibility,
                )?
            }
        }
    };

    output.flush()?;

    if config.verbose {
        eprintln!("final seed: {final_seed:#018x}");
    }

    Ok(())
}

/// Parses a 64-bit seed given as decimal or `0x`-prefixed hex.
///
/// # Errors
///
/// Returns an error for empty input or anything that does not parse as a
/// 64-bit unsigned integer in the detected base.
pub fn parse_seed(s: &str) -> std::result::Result<u64, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("Empty seed".to_string());
    }

    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).map_err(|_| format!("Invalid hex seed: {s}"))
    } else {
        s.parse().map_err(|_| format!("Invalid seed: {s}"))
    }
}

/// Parses a size string with an optional suffix.
///
/// Accepts numeric values with optional suffixes: `K` (KiB), `M` (MiB), or
/// `G` (GiB). Suffixes are case-insensitive; values without a suffix are
/// interpreted as bytes.
///
/// # Errors
///
/// Returns an error in the following cases:
///
/// - The input string is empty
/// - The numeric part cannot be parsed as a valid [`u64`]
/// - The suffix is not one of K, M, G, or a digit
/// - The result would overflow [`u64`] after applying the multiplier
pub fn parse_size(s: &str) -> std::result::Result<u64, String> {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    let s = s.trim();
    if s.is_empty() {
        return Err("Empty size".to_string());
    }

    let (number_part, multiplier) = if let Some(last_char) = s.chars().last() {
        match last_char.to_ascii_uppercase() {
            'K' => (&s[..s.len() - 1], KB),
            'M' => (&s[..s.len() - 1], MB),
            'G' => (&s[..s.len() - 1], GB),
            _ if last_char.is_ascii_digit() => (s, 1),
            _ => return Err(format!("Invalid size suffix: {last_char}")),
        }
    } else {
        (s, 1)
    };

    let number: u64 = number_part
        .parse()
        .map_err(|_| format!("Invalid size number: {number_part}"))?;

    number
        .checked_mul(multiplier)
        .ok_or_else(|| "Size too large".to_string())
}
