//! Sample rendering and stream operations for the sequence generator CLI.

use std::io;
use std::io::Write;

use seq_core::{fill_bytes, fill_letters, ByteSequence, Compressibility};

use crate::config::DEFAULT_BUFFER_SIZE;

/// Writes `count` lines of `size` lowercase letters, chaining the seed
/// across lines like the original demo driver.
///
/// # Returns
///
/// The generator state left after the last line.
///
/// # Errors
///
/// Returns an [`io::Error`] if writing to `output` fails.
pub fn write_letter_samples(
    output: &mut impl Write,
    count: u64,
    size: usize,
    seed: u64,
) -> io::Result<u64> {
    let mut line = vec![0u8; size];
    let mut next = seed;

    for _ in 0..count {
        next = fill_letters(&mut line, next);
        output.write_all(&line)?;
        output.write_all(b"\n")?;
    }

    Ok(next)
}

/// Writes `count` lines of `size` hex-encoded pseudo-random bytes, chaining
/// the seed across lines.
///
/// # Returns
///
/// The generator state left after the last line.
///
/// # Errors
///
/// Returns an [`io::Error`] if writing to `output` fails.
pub fn write_byte_samples(
    output: &mut impl Write,
    count: u64,
    size: usize,
    seed: u64,
) -> io::Result<u64> {
    let mut line = vec![0u8; size];
    let mut next = seed;

    for _ in 0..count {
        next = fill_bytes(&mut line, next);
        for byte in &line {
            write!(output, "{byte:02x}")?;
        }
        output.write_all(b"\n")?;
    }

    Ok(next)
}

/// Streams `size` raw pseudo-random bytes into `output` through the
/// [`ByteSequence`] reader.
///
/// # Returns
///
/// The generator state left after the stream is exhausted.
///
/// # Errors
///
/// Returns an [`io::Error`] if the copy fails.
pub fn stream_bytes(output: &mut impl Write, size: u64, seed: u64) -> io::Result<u64> {
    let mut sequence = ByteSequence::with_seed(size, seed);
    io::copy(&mut sequence, output)?;
    Ok(sequence.state())
}

/// Streams `size` bytes with the requested compressibility.
///
/// Pattern selection works per [`DEFAULT_BUFFER_SIZE`] chunk, so a given
/// size and seed always produce the same stream.
///
/// # Returns
///
/// The generator state left after the stream is exhausted.
///
/// # Errors
///
/// Returns an [`io::Error`] if writing to `output` fails.
pub fn stream_pattern(
    output: &mut impl Write,
    size: u64,
    seed: u64,
    compressibility: Compressibility,
) -> io::Result<u64> {
    let mut sequence = ByteSequence::with_seed(size, seed);
    let mut chunk = vec![0u8; DEFAULT_BUFFER_SIZE];
    let mut remaining = size;

    while remaining > 0 {
        let len = match usize::try_from(remaining) {
            Ok(remaining) => chunk.len().min(remaining),
            Err(_) => chunk.len(),
        };
        sequence.pattern_fill(&mut chunk[..len], compressibility);
        output.write_all(&chunk[..len])?;
        remaining -= len as u64;
    }

    Ok(sequence.state())
}
