use std::fs;

use soundrom_core::{ExtractError, SourceImage};
use tempfile::tempdir;

#[test]
fn open_reads_whole_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("rom.bin");
    fs::write(&path, [0u8, 1, 2, 3, 4]).expect("write rom");

    let image = SourceImage::open(&path).expect("open rom");
    assert_eq!(image.len(), 5);
    assert_eq!(image.as_bytes(), [0u8, 1, 2, 3, 4].as_slice());
    assert!(!image.is_empty());
}

#[test]
fn open_reports_unreadable_input() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing.bin");

    match SourceImage::open(&path) {
        Err(ExtractError::InputUnreadable { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected InputUnreadable, got {other:?}"),
    }
}

#[test]
fn window_returns_none_past_the_end() {
    let image = SourceImage::from(vec![1u8, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(image.window::<8>(1), Some(&[2u8, 3, 4, 5, 6, 7, 8, 9]));
    assert_eq!(image.window::<8>(2), None);
    assert_eq!(image.window::<8>(usize::MAX), None);
}
