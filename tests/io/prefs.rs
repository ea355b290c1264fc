// Tests for src/io/prefs.rs: Prefs defaults and chaining setters

use lz5::config::{init_nb_workers_from, NB_WORKERS_DEFAULT};
use lz5::dispatch::DEFAULT_METHOD;
use lz5::io::Prefs;

#[test]
fn defaults() {
    let p = Prefs::default();
    assert_eq!(p.method, DEFAULT_METHOD);
    assert_eq!(p.expected_size, None);
    assert!(!p.overwrite);
    assert!(!p.test_mode);
    assert!(p.keep_mtime);
    assert!(p.nb_workers >= 1);
}

#[test]
fn default_workers_without_env_override() {
    assert_eq!(init_nb_workers_from(None), NB_WORKERS_DEFAULT);
}

#[test]
fn setters_chain() {
    let mut p = Prefs::default();
    p.set_method("-lz5-")
        .set_expected_size(Some(4096))
        .set_overwrite(true)
        .set_test_mode(true)
        .set_keep_mtime(false)
        .set_nb_workers(3);
    assert_eq!(p.expected_size, Some(4096));
    assert!(p.overwrite);
    assert!(p.test_mode);
    assert!(!p.keep_mtime);
    assert_eq!(p.nb_workers, 3);
}

#[test]
fn clones_compare_equal() {
    let mut p = Prefs::default();
    p.set_expected_size(Some(1));
    let q = p.clone();
    assert_eq!(p, q);
    p.set_expected_size(None);
    assert_ne!(p, q);
}
