// e2e/cli_integration.rs: black-box tests of the `unlz5` binary
//
// Runs the built executable with std::process::Command: file-to-file and
// pipe decoding, multiple-file mode, test mode, exit codes and help/version.

#[path = "../tests/support/encoder.rs"]
mod encoder;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn unlz5_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_unlz5") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("unlz5");
    p
}

fn sample_text() -> Vec<u8> {
    "The quick brown fox jumps over the lazy dog.\n".repeat(120).into_bytes()
}

fn write_archive(dir: &Path, name: &str, plain: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, encoder::encode(plain)).unwrap();
    path
}

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(unlz5_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn unlz5");
    child.stdin.take().unwrap().write_all(stdin).unwrap();
    child.wait_with_output().expect("failed to wait for unlz5")
}

// ── 1. file to file ──────────────────────────────────────────────────────────

#[test]
fn cli_decodes_file_next_to_input() {
    let dir = TempDir::new().unwrap();
    let plain = sample_text();
    let archive = write_archive(dir.path(), "fox.txt.lz5", &plain);

    let status = Command::new(unlz5_bin())
        .arg(archive.to_str().unwrap())
        .status()
        .expect("failed to run unlz5");
    assert!(status.success(), "status: {status}");
    assert_eq!(fs::read(dir.path().join("fox.txt")).unwrap(), plain);
}

#[test]
fn cli_explicit_output_and_overwrite() {
    let dir = TempDir::new().unwrap();
    let archive = write_archive(dir.path(), "in.lz5", b"fresh bytes");
    let out = dir.path().join("out.bin");
    fs::write(&out, b"stale").unwrap();

    let refused = Command::new(unlz5_bin())
        .args([archive.to_str().unwrap(), out.to_str().unwrap()])
        .output()
        .unwrap();
    assert_eq!(refused.status.code(), Some(1));
    assert_eq!(fs::read(&out).unwrap(), b"stale");

    let forced = Command::new(unlz5_bin())
        .args(["-f", archive.to_str().unwrap(), out.to_str().unwrap()])
        .status()
        .unwrap();
    assert!(forced.success());
    assert_eq!(fs::read(&out).unwrap(), b"fresh bytes");
}

// ── 2. pipes ─────────────────────────────────────────────────────────────────

#[test]
fn cli_stdin_to_stdout() {
    let plain = sample_text();
    let output = run_with_stdin(&[], &encoder::encode(&plain));
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(output.stdout, plain);
}

#[test]
fn cli_size_option_trims_padding() {
    // "hello" followed by a stray copy of 18 filler bytes.
    let input = [0b0001_1111, b'h', b'e', b'l', b'l', b'o', 0x00, 0x0F];
    let padded = run_with_stdin(&[], &input);
    assert_eq!(padded.stdout.len(), 23);

    let trimmed = run_with_stdin(&["-s", "5"], &input);
    assert!(trimmed.status.success());
    assert_eq!(trimmed.stdout, b"hello");
}

#[test]
fn cli_truncated_stream_fails() {
    let output = run_with_stdin(&["-s", "1K"], &encoder::encode(b"not a kilobyte"));
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("truncated"), "stderr: {stderr}");
}

// ── 3. modes ─────────────────────────────────────────────────────────────────

#[test]
fn cli_multiple_files() {
    let dir = TempDir::new().unwrap();
    let names = ["one", "two", "three"];
    let archives: Vec<String> = names
        .iter()
        .map(|n| {
            let plain = format!("{n} {n} {n} {n}");
            write_archive(dir.path(), &format!("{n}.lz5"), plain.as_bytes())
                .to_str()
                .unwrap()
                .to_owned()
        })
        .collect();

    let status = Command::new(unlz5_bin())
        .args(["-m", "-T", "2"])
        .args(&archives)
        .status()
        .unwrap();
    assert!(status.success());
    for n in names {
        assert_eq!(fs::read_to_string(dir.path().join(n)).unwrap(), format!("{n} {n} {n} {n}"));
    }
}

#[test]
fn cli_test_mode_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let archive = write_archive(dir.path(), "check.lz5", &sample_text());

    let output = Command::new(unlz5_bin())
        .args(["-t", archive.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(!dir.path().join("check").exists());
}

#[test]
fn cli_nonexistent_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("ghost.lz5");
    let output = Command::new(unlz5_bin())
        .arg(missing.to_str().unwrap())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("ghost").exists());
}

#[test]
fn cli_unknown_method_is_usage_error() {
    let output = Command::new(unlz5_bin())
        .args(["--method", "-lh5-", "x.lz5"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-lh5-"), "stderr: {stderr}");
}

// ── 4. --help / --version ────────────────────────────────────────────────────

#[test]
fn cli_help_and_version() {
    let help = Command::new(unlz5_bin()).arg("--help").output().unwrap();
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).to_lowercase().contains("usage"));

    let version = Command::new(unlz5_bin()).arg("--version").output().unwrap();
    assert!(version.status.success());
    assert!(String::from_utf8_lossy(&version.stdout).contains(env!("CARGO_PKG_VERSION")));
}
