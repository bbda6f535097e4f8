use std::fs;

use soundrom_extract::{absolutize, sha256_bytes};
use tempfile::tempdir;

#[test]
fn absolutize_keeps_existing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let result = absolutize(tmp.path()).expect("absolutize");
    assert_eq!(result, tmp.path().canonicalize().expect("canon tmp"));
}

#[test]
fn absolutize_resolves_missing_path_against_cwd() {
    let result = absolutize(std::path::Path::new("not-created-yet/sounds")).expect("absolutize");
    assert!(result.is_absolute());
    assert!(result.ends_with("not-created-yet/sounds"));
}

#[test]
fn absolutize_canonicalizes_existing_nested_dir() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");
    let result = absolutize(&nested.join("..").join("nested")).expect("absolutize");
    assert_eq!(result, nested.canonicalize().expect("canon nested"));
}

#[test]
fn sha256_bytes_matches_known_hash() {
    let hash = sha256_bytes(b"abc");
    assert_eq!(hash, "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}
