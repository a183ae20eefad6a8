// e2e/cli_integration.rs — black-box tests for the two command-line tools.
//
// Drives the `lzs-compress` and `lzs-decompress` binaries with
// std::process::Command and checks file contents and exit codes.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Locate a binary produced by Cargo for this package.
fn bin(env_path: &str, name: &str) -> PathBuf {
    // CARGO_BIN_EXE_* is set by Cargo when running integration tests.
    // Fall back to walking up from the test binary location.
    if let Ok(p) = std::env::var(env_path) {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push(name);
    p
}

fn compress_bin() -> PathBuf {
    bin("CARGO_BIN_EXE_lzs-compress", "lzs-compress")
}

fn decompress_bin() -> PathBuf {
    bin("CARGO_BIN_EXE_lzs-decompress", "lzs-decompress")
}

fn run(binary: &Path, input: &Path, output: &Path) -> std::process::ExitStatus {
    Command::new(binary)
        .arg(input)
        .arg(output)
        .status()
        .expect("spawning the tool")
}

// ── 1. Compress / decompress round trip ──────────────────────────────────────

#[test]
fn file_round_trip_restores_the_original() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.txt");
    let packed = dir.path().join("input.lzs");
    let restored = dir.path().join("restored.txt");

    let content = "Hello, sliding windows!\n".repeat(170);
    fs::write(&input, &content).unwrap();

    assert!(run(&compress_bin(), &input, &packed).success());
    let packed_len = fs::metadata(&packed).unwrap().len();
    assert!(packed_len > 0);
    assert!(packed_len < content.len() as u64);

    assert!(run(&decompress_bin(), &packed, &restored).success());
    assert_eq!(fs::read(&restored).unwrap(), content.as_bytes());
}

#[test]
fn empty_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty");
    let packed = dir.path().join("empty.lzs");
    let restored = dir.path().join("empty.out");
    fs::write(&input, b"").unwrap();

    assert!(run(&compress_bin(), &input, &packed).success());
    assert!(run(&decompress_bin(), &packed, &restored).success());
    assert_eq!(fs::read(&restored).unwrap(), b"");
}

#[test]
fn binary_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("blob");
    let packed = dir.path().join("blob.lzs");
    let restored = dir.path().join("blob.out");

    let content: Vec<u8> = (0u32..4096).map(|i| (i * 31 % 251) as u8).collect();
    fs::write(&input, &content).unwrap();

    assert!(run(&compress_bin(), &input, &packed).success());
    assert!(run(&decompress_bin(), &packed, &restored).success());
    assert_eq!(fs::read(&restored).unwrap(), content);
}

// ── 2. Exit codes on failure ─────────────────────────────────────────────────

#[test]
fn missing_input_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let status = run(
        &compress_bin(),
        &dir.path().join("no-such-file"),
        &dir.path().join("out"),
    );
    assert!(!status.success());

    let status = run(
        &decompress_bin(),
        &dir.path().join("no-such-file"),
        &dir.path().join("out"),
    );
    assert!(!status.success());
}

#[test]
fn malformed_stream_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let garbage = dir.path().join("garbage.lzs");
    let out = dir.path().join("out");
    // Decodes as a saturated match whose continuation fields run off the
    // end of the input.
    fs::write(&garbage, [0xFFu8, 0xFF, 0xFF]).unwrap();

    let status = run(&decompress_bin(), &garbage, &out);
    assert!(!status.success());
}
