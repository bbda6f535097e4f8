#![allow(dead_code)]

use soundrom_core::chip::{ChipType, ADDRESS_SECTION_START, RECORD_STRIDE};
use soundrom_core::{AddressRecord, ChipProfile, SourceImage};

/// Builds synthetic ROM images: zeroed header, a table, and payload bytes.
pub struct RomBuilder {
    pub profile: ChipProfile,
    bytes: Vec<u8>,
}

impl RomBuilder {
    /// Zeroed image just large enough to hold the whole table region.
    pub fn new(chip: ChipType) -> Self {
        let profile = chip.profile();
        let len = profile.address_section_end.next_multiple_of(RECORD_STRIDE);
        Self { profile, bytes: vec![0; len] }
    }

    /// Image of exactly `len` zero bytes.
    pub fn with_len(chip: ChipType, len: usize) -> Self {
        Self { profile: chip.profile(), bytes: vec![0; len] }
    }

    /// Put a (start, end) record into table slot `slot` (0-based).
    pub fn record(mut self, slot: usize, start: u32, end: u32) -> Self {
        let offset = ADDRESS_SECTION_START + slot * RECORD_STRIDE;
        self.bytes[offset..offset + RECORD_STRIDE]
            .copy_from_slice(&AddressRecord::encode(start, end));
        self
    }

    /// Overwrite raw bytes at `offset`, growing the image when needed.
    pub fn bytes_at(mut self, offset: usize, data: &[u8]) -> Self {
        let end = offset + data.len();
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        self.bytes[offset..end].copy_from_slice(data);
        self
    }

    pub fn build(self) -> SourceImage {
        SourceImage::new(self.bytes)
    }
}

/// Deterministic, non-zero payload of `len` bytes.
pub fn payload(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(31).wrapping_add(seed) | 1).collect()
}
