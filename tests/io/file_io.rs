// Tests for src/io/file_io.rs: source/destination resolution
//
//   - sentinel constants
//   - open_src_file: missing path → Err; directory → InvalidInput; file → readable
//   - open_dst_file: stdout / null sentinels; overwrite policy; truncation

use std::fs;
use std::io::{self, Read, Write};

use lz5::io::file_io::{is_special_path, open_dst_file, open_src_file, NUL_MARK, STDIN_MARK, STDOUT_MARK};
use lz5::io::Prefs;
use tempfile::TempDir;

fn quiet() {
    lz5::cli::constants::set_display_level(0);
}

#[test]
fn sentinel_values() {
    assert_eq!(STDIN_MARK, "stdin");
    assert_eq!(STDOUT_MARK, "stdout");
    #[cfg(not(windows))]
    assert_eq!(NUL_MARK, "/dev/null");
    assert!(is_special_path(STDIN_MARK));
    assert!(is_special_path(NUL_MARK));
    assert!(!is_special_path("archive.lz5"));
}

#[test]
fn open_src_missing_file_fails() {
    quiet();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.lz5");
    let err = open_src_file(path.to_str().unwrap()).err().expect("must fail");
    assert_eq!(err.kind(), io::ErrorKind::NotFound);
}

#[test]
fn open_src_directory_is_invalid_input() {
    quiet();
    let dir = TempDir::new().unwrap();
    let err = open_src_file(dir.path().to_str().unwrap()).err().expect("must fail");
    assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
}

#[test]
fn open_src_regular_file_reads_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("in.lz5");
    fs::write(&path, b"compressed bytes").unwrap();
    let mut r = open_src_file(path.to_str().unwrap()).unwrap();
    let mut s = Vec::new();
    r.read_to_end(&mut s).unwrap();
    assert_eq!(s, b"compressed bytes");
}

#[test]
fn open_dst_sentinels_are_not_regular() {
    let prefs = Prefs::default();
    assert!(!open_dst_file(STDOUT_MARK, &prefs).unwrap().is_regular);
    let mut nul = open_dst_file(NUL_MARK, &prefs).unwrap();
    assert!(!nul.is_regular);
    nul.write_all(b"gone").unwrap();
}

#[test]
fn open_dst_creates_new_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.bin");
    let mut dst = open_dst_file(path.to_str().unwrap(), &Prefs::default()).unwrap();
    assert!(dst.is_regular);
    dst.write_all(b"decoded").unwrap();
    dst.flush().unwrap();
    drop(dst);
    assert_eq!(fs::read(&path).unwrap(), b"decoded");
}

#[test]
fn open_dst_refuses_existing_file_without_overwrite() {
    quiet();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exists.bin");
    fs::write(&path, b"keep me").unwrap();
    let err = open_dst_file(path.to_str().unwrap(), &Prefs::default()).err().expect("must fail");
    assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    assert_eq!(fs::read(&path).unwrap(), b"keep me");
}

#[test]
fn open_dst_overwrite_truncates_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("exists.bin");
    fs::write(&path, b"a much longer previous content").unwrap();
    let mut prefs = Prefs::default();
    prefs.set_overwrite(true);
    let mut dst = open_dst_file(path.to_str().unwrap(), &prefs).unwrap();
    dst.write_all(b"new").unwrap();
    dst.flush().unwrap();
    drop(dst);
    assert_eq!(fs::read(&path).unwrap(), b"new");
}
