#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Write an MSM6295 ROM with one sound at 0x400..0x410 and return its path
/// together with the 16 payload bytes.
pub fn write_msm6295_rom(dir: &Path) -> (PathBuf, Vec<u8>) {
    let payload: Vec<u8> = (0x40u8..0x50).collect();
    let mut rom = vec![0u8; 0x400];
    rom[8..16].copy_from_slice(&[0x00, 0x04, 0x00, 0x00, 0x04, 0x10, 0x00, 0x00]);
    rom.extend_from_slice(&payload);

    let path = dir.join("sound_rom.bin");
    fs::write(&path, rom).expect("write rom");
    (path, payload)
}

/// Write a TT6297 ROM holding three sounds back to back from 0x1000.
pub fn write_tt6297_rom(dir: &Path) -> PathBuf {
    let mut rom = vec![0u8; 0x1000];
    let records: [[u8; 8]; 3] = [
        [0x00, 0x10, 0x00, 0x00, 0x10, 0x20, 0x00, 0x00],
        [0x00, 0x10, 0x20, 0x00, 0x10, 0x28, 0x00, 0x00],
        [0x00, 0x10, 0x28, 0x00, 0x10, 0x40, 0x00, 0x00],
    ];
    for (slot, record) in records.iter().enumerate() {
        let offset = 8 + slot * 8;
        rom[offset..offset + 8].copy_from_slice(record);
    }
    rom.extend((0..0x40u32).map(|i| (i * 3 + 1) as u8));

    let path = dir.join("tt6297_rom.bin");
    fs::write(&path, rom).expect("write rom");
    path
}

/// Write a file that is big enough but has junk in the reserved header.
pub fn write_bad_header_rom(dir: &Path) -> PathBuf {
    let mut rom = vec![0u8; 0x400];
    rom[0] = 0xFF;
    let path = dir.join("bad_header.bin");
    fs::write(&path, rom).expect("write rom");
    path
}
