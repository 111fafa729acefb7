//! Buffer-filling encodings over the generator.
//!
//! Both fills are pure functions of `(destination length, seed)`: they
//! overwrite the destination, advance the generator once per chunk (or once
//! per leftover element), and hand the final state back to the caller. The
//! slice length *is* the fill size, so the capacity precondition is
//! enforced by the interface rather than checked at runtime.

use crate::lcg;

/// Bytes written per generator step by [`fill_bytes`].
const BYTE_CHUNK: usize = 8;

/// Letters derived per generator step by [`fill_letters`].
const LETTER_CHUNK: usize = 12;

/// Size of the lowercase alphabet.
const ALPHABET: u64 = 26;

/// Fills `dest` with pseudo-random bytes derived from `seed`.
///
/// The buffer is processed in 8-byte chunks, one generator step per chunk,
/// with each stepped value stored little-endian. The fixed byte order keeps
/// output identical across platforms. The final 0-7 bytes take one step per
/// byte, keeping only the low 8 bits of each stepped value.
///
/// # Parameters
///
/// * `dest` - Destination buffer; fully overwritten
/// * `seed` - Generator state to start from
///
/// # Returns
///
/// The generator state after the last step performed. Feeding it into the
/// next call continues the sequence without repeating. When `dest` is empty
/// no steps occur and `seed` is returned unchanged.
pub fn fill_bytes(dest: &mut [u8], seed: u64) -> u64 {
    let mut next = seed;

    let mut chunks = dest.chunks_exact_mut(BYTE_CHUNK);
    for chunk in &mut chunks {
        next = lcg::next_state(next);
        chunk.copy_from_slice(&next.to_le_bytes());
    }

    // Leftover bytes, one step each.
    for byte in chunks.into_remainder() {
        next = lcg::next_state(next);
        *byte = next as u8;
    }

    next
}

/// Fills `dest` with pseudo-random lowercase ASCII letters.
///
/// The buffer is processed in 12-letter chunks: one generator step yields
/// twelve consecutive 5-bit fields (bits 0-59, least-significant field
/// first; the top four bits go unused), each reduced modulo 26 and offset
/// from `'a'`. The final 0-11 letters take one step per letter, reducing
/// the whole 64-bit value modulo 26 instead of a 5-bit slice. The two
/// reductions differ on purpose; unifying them would change output for any
/// size that is not a multiple of 12.
///
/// # Parameters
///
/// * `dest` - Destination buffer; fully overwritten with bytes in
///   `b'a'..=b'z'`
/// * `seed` - Generator state to start from
///
/// # Returns
///
/// The generator state after the last step performed, or `seed` unchanged
/// when `dest` is empty.
pub fn fill_letters(dest: &mut [u8], seed: u64) -> u64 {
    let mut next = seed;

    let mut chunks = dest.chunks_exact_mut(LETTER_CHUNK);
    for chunk in &mut chunks {
        next = lcg::next_state(next);
        for (i, slot) in chunk.iter_mut().enumerate() {
            let field = (next >> (5 * i)) & 0x1f;
            *slot = b'a' + (field % ALPHABET) as u8;
        }
    }

    // Leftover letters, one step each, whole value reduced directly.
    for slot in chunks.into_remainder() {
        next = lcg::next_state(next);
        *slot = b'a' + (next % ALPHABET) as u8;
    }

    next
}
