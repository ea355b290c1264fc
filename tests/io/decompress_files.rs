// Tests for src/io/decompress_files.rs: file-level decompression
//
//   - decompress_filename: output content, mtime propagation, test mode,
//     overwrite refusal, cleanup of a failed destination
//   - decompress_multiple_filenames: suffix stripping, skipped inputs,
//     sequential and parallel paths

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use filetime::FileTime;
use lz5::io::decompress_files::{decompress_filename, decompress_multiple_filenames, DecompressStats};
use lz5::io::Prefs;
use tempfile::TempDir;

use crate::encoder;

fn quiet() {
    lz5::cli::constants::set_display_level(0);
}

fn path_str(p: &Path) -> &str {
    p.to_str().unwrap()
}

/// Writes `encode(plain)` to `dir/name` and returns its path.
fn write_compressed(dir: &TempDir, name: &str, plain: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, encoder::encode(plain)).unwrap();
    path
}

#[test]
fn decodes_file_and_reports_size() {
    quiet();
    let dir = TempDir::new().unwrap();
    let plain = b"file contents, file contents, file contents".repeat(30);
    let src = write_compressed(&dir, "doc.txt.lz5", &plain);
    let dst = dir.path().join("doc.txt");

    let stats = decompress_filename(path_str(&src), path_str(&dst), &Prefs::default()).unwrap();
    assert_eq!(stats, DecompressStats { decompressed_bytes: plain.len() as u64 });
    assert_eq!(fs::read(&dst).unwrap(), plain);
}

#[test]
fn copies_source_mtime_unless_disabled() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = write_compressed(&dir, "old.lz5", b"vintage");
    let past = SystemTime::now() - Duration::from_secs(3 * 24 * 3600);
    filetime::set_file_mtime(&src, FileTime::from_system_time(past)).unwrap();
    let src_mtime = FileTime::from_last_modification_time(&fs::metadata(&src).unwrap());

    let kept = dir.path().join("kept");
    decompress_filename(path_str(&src), path_str(&kept), &Prefs::default()).unwrap();
    let kept_mtime = FileTime::from_last_modification_time(&fs::metadata(&kept).unwrap());
    assert_eq!(kept_mtime.unix_seconds(), src_mtime.unix_seconds());

    let mut prefs = Prefs::default();
    prefs.set_keep_mtime(false);
    let fresh = dir.path().join("fresh");
    decompress_filename(path_str(&src), path_str(&fresh), &prefs).unwrap();
    let fresh_mtime = FileTime::from_last_modification_time(&fs::metadata(&fresh).unwrap());
    assert!(fresh_mtime.unix_seconds() > src_mtime.unix_seconds());
}

#[test]
fn test_mode_writes_nothing() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = write_compressed(&dir, "t.lz5", b"checked, not written");
    let dst = dir.path().join("t");
    let mut prefs = Prefs::default();
    prefs.set_test_mode(true);

    let stats = decompress_filename(path_str(&src), path_str(&dst), &prefs).unwrap();
    assert_eq!(stats.decompressed_bytes, 20);
    assert!(!dst.exists());
}

#[test]
fn existing_destination_is_kept_without_overwrite() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = write_compressed(&dir, "a.lz5", b"new data");
    let dst = dir.path().join("a");
    fs::write(&dst, b"old data").unwrap();

    assert!(decompress_filename(path_str(&src), path_str(&dst), &Prefs::default()).is_err());
    assert_eq!(fs::read(&dst).unwrap(), b"old data");

    let mut prefs = Prefs::default();
    prefs.set_overwrite(true);
    decompress_filename(path_str(&src), path_str(&dst), &prefs).unwrap();
    assert_eq!(fs::read(&dst).unwrap(), b"new data");
}

#[test]
fn failed_destination_is_removed() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = write_compressed(&dir, "short.lz5", b"too short for the header");
    let dst = dir.path().join("short");
    let mut prefs = Prefs::default();
    prefs.set_expected_size(Some(1_000));

    assert!(decompress_filename(path_str(&src), path_str(&dst), &prefs).is_err());
    assert!(!dst.exists());
}

#[test]
fn missing_source_fails_without_creating_destination() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("nowhere.lz5");
    let dst = dir.path().join("nowhere");
    assert!(decompress_filename(path_str(&src), path_str(&dst), &Prefs::default()).is_err());
    assert!(!dst.exists());
}

fn multiple_files_round_trip(workers: usize) {
    quiet();
    let dir = TempDir::new().unwrap();
    let plains: Vec<Vec<u8>> = (0..5)
        .map(|i| format!("member {} ", i).repeat(40 + i).into_bytes())
        .collect();
    let srcs: Vec<String> = plains
        .iter()
        .enumerate()
        .map(|(i, p)| path_str(&write_compressed(&dir, &format!("m{}.lz5", i), p)).to_owned())
        .collect();

    let mut prefs = Prefs::default();
    prefs.set_nb_workers(workers);
    assert_eq!(decompress_multiple_filenames(&srcs, ".lz5", &prefs).unwrap(), 0);
    for (i, plain) in plains.iter().enumerate() {
        assert_eq!(&fs::read(dir.path().join(format!("m{}", i))).unwrap(), plain);
    }
}

#[test]
fn multiple_files_sequential() {
    multiple_files_round_trip(1);
}

#[test]
fn multiple_files_parallel() {
    multiple_files_round_trip(3);
}

#[test]
fn multiple_files_counts_skipped_and_failed() {
    quiet();
    let dir = TempDir::new().unwrap();
    let good = write_compressed(&dir, "good.lz5", b"fine");
    let unsuffixed = write_compressed(&dir, "plain.bin", b"no suffix");
    let missing = dir.path().join("missing.lz5");
    let srcs = vec![
        path_str(&good).to_owned(),
        path_str(&unsuffixed).to_owned(),
        path_str(&missing).to_owned(),
    ];

    let failed = decompress_multiple_filenames(&srcs, ".lz5", &Prefs::default()).unwrap();
    assert_eq!(failed, 2);
    assert_eq!(fs::read(dir.path().join("good")).unwrap(), b"fine");
}

#[test]
fn multiple_files_test_mode_needs_no_suffix() {
    quiet();
    let dir = TempDir::new().unwrap();
    let src = write_compressed(&dir, "raw.bin", b"any name works");
    let mut prefs = Prefs::default();
    prefs.set_test_mode(true);
    let failed = decompress_multiple_filenames(&[path_str(&src).to_owned()], ".lz5", &prefs).unwrap();
    assert_eq!(failed, 0);
}
