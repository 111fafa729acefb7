//! Stream-mode behaviors of the seqgen binary.

use seq_core::{fill_bytes, DEFAULT_SEED};

use crate::common::Fixture;

#[test]
/// Streaming to a file writes exactly the requested bytes, matching the
/// fill primitive for sub-buffer sizes.
fn stream_writes_exact_size() {
    let fixture = Fixture::new();
    let output = fixture.run_seqgen(&["--mode", "stream", "--size", "512", "-o", "out.bin"]);

    assert!(output.status.success(), "seqgen failed: {}", output.stderr);

    let mut expected = vec![0u8; 512];
    fill_bytes(&mut expected, DEFAULT_SEED);
    assert_eq!(fixture.read_file("out.bin"), expected);
}

#[test]
/// Streaming to stdout emits raw bytes.
fn stream_to_stdout_is_raw() {
    let fixture = Fixture::new();
    let output = fixture.run_seqgen(&["--mode", "stream", "--size", "64"]);

    assert!(output.status.success());
    assert_eq!(output.stdout_raw.len(), 64);
}

#[test]
/// Size suffixes apply to the stream size.
fn stream_accepts_size_suffixes() {
    let fixture = Fixture::new();
    let output = fixture.run_seqgen(&["--mode", "stream", "--size", "4K", "-o", "out.bin"]);

    assert!(output.status.success());
    assert_eq!(fixture.read_file("out.bin").len(), 4096);
}

#[test]
/// Large streams are reproducible run-to-run.
fn stream_is_reproducible() {
    let fixture = Fixture::new();
    let first = fixture.run_seqgen(&["--mode", "stream", "--size", "1M", "-o", "a.bin"]);
    let second = fixture.run_seqgen(&["--mode", "stream", "--size", "1M", "-o", "b.bin"]);

    assert!(first.status.success());
    assert!(second.status.success());
    assert_eq!(fixture.read_file("a.bin"), fixture.read_file("b.bin"));
}

#[test]
/// An existing output file is preserved unless `--force` is given.
fn stream_respects_force() {
    let fixture = Fixture::new();
    fixture.write_file("out.bin", b"precious");

    let refused = fixture.run_seqgen(&["--mode", "stream", "--size", "64", "-o", "out.bin"]);
    assert!(!refused.status.success());
    assert!(refused.stderr.contains("already exists"));
    assert_eq!(fixture.read_file("out.bin"), b"precious");

    let forced = fixture.run_seqgen(&[
        "--mode", "stream", "--size", "64", "-o", "out.bin", "--force",
    ]);
    assert!(forced.status.success(), "seqgen failed: {}", forced.stderr);
    assert_eq!(fixture.read_file("out.bin").len(), 64);
}

#[test]
/// A fully compressible single-block stream is all pattern bytes.
fn stream_pattern_full_block() {
    let fixture = Fixture::new();
    let output = fixture.run_seqgen(&[
        "--mode",
        "stream",
        "--size",
        "64K",
        "--compressibility",
        "100",
        "-o",
        "out.bin",
    ]);

    assert!(output.status.success(), "seqgen failed: {}", output.stderr);

    let contents = fixture.read_file("out.bin");
    assert_eq!(contents.len(), 65536);
    assert!(contents.iter().all(|&b| b == b'A'));
}

#[test]
/// Compressibility percentages above 100 are rejected up front.
fn stream_rejects_bad_compressibility() {
    let fixture = Fixture::new();
    let output = fixture.run_seqgen(&[
        "--mode",
        "stream",
        "--size",
        "64K",
        "--compressibility",
        "150",
        "-o",
        "out.bin",
    ]);

    assert!(!output.status.success());
    assert!(output.stderr.contains("150"));
    assert!(!fixture.file_exists("out.bin"));
}
