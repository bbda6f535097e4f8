//! Address table decoding.
//!
//! The table starts right after the reserved header and is made of 8-byte
//! records:
//!
//! ```text
//! offset  0  1  2 | 3  4  5 | 6  7
//!         start   | end     | reserved (zero)
//! ```
//!
//! Both addresses are 24-bit big-endian byte offsets into the same image.
//! An all-zero record terminates the table early.

use std::iter::FusedIterator;

use serde::Serialize;
use tracing::debug;

use crate::chip::{ChipProfile, RECORD_STRIDE};
use crate::image::SourceImage;

/// Byte range of the start address inside a record.
pub const START_FIELD: std::ops::Range<usize> = 0..3;
/// Byte range of the end address inside a record.
pub const END_FIELD: std::ops::Range<usize> = 3..6;
/// Byte range of the reserved field that must be zero in a genuine table.
pub const RESERVED_FIELD: std::ops::Range<usize> = 6..8;

/// Read a 24-bit big-endian value from the first three bytes of `bytes`.
pub fn read_be24(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([0, bytes[0], bytes[1], bytes[2]])
}

/// Read a 16-bit big-endian value from the first two bytes of `bytes`.
pub fn read_be16(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// One decoded table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddressRecord {
    /// Offset of the record inside the image.
    pub offset: usize,
    pub start_address: u32,
    pub end_address: u32,
}

impl AddressRecord {
    /// Decode a raw record found at `offset`.
    pub fn decode(offset: usize, raw: &[u8; RECORD_STRIDE]) -> Self {
        Self {
            offset,
            start_address: read_be24(&raw[START_FIELD]),
            end_address: read_be24(&raw[END_FIELD]),
        }
    }

    /// Encode back into the on-ROM layout (reserved field zeroed).
    pub fn encode(start_address: u32, end_address: u32) -> [u8; RECORD_STRIDE] {
        let start = start_address.to_be_bytes();
        let end = end_address.to_be_bytes();
        [start[1], start[2], start[3], end[1], end[2], end[3], 0, 0]
    }
}

/// Offsets of every record in the table region of an image `image_len`
/// bytes long.
pub(crate) fn record_offsets(
    profile: &ChipProfile,
    image_len: usize,
) -> impl Iterator<Item = usize> {
    (profile.address_section_start..profile.address_section_end)
        .step_by(RECORD_STRIDE)
        .take_while(move |&offset| offset < image_len)
}

/// Copy the record at `offset` out of the image.
///
/// The table bound is not a multiple of the stride, so the last record of an
/// image cut at the bound is one byte short; missing bytes read as zero.
pub fn read_record(image: &SourceImage, offset: usize) -> Option<[u8; RECORD_STRIDE]> {
    let available = image.as_bytes().get(offset..)?;
    if available.is_empty() {
        return None;
    }
    let mut raw = [0u8; RECORD_STRIDE];
    let len = available.len().min(RECORD_STRIDE);
    raw[..len].copy_from_slice(&available[..len]);
    Some(raw)
}

/// Lazy walk over the address table of a validated image.
///
/// Yields records in table order and stops at the first all-zero record or
/// at the profile's address bound. Once exhausted it stays exhausted.
pub struct AddressTable<'a> {
    image: &'a SourceImage,
    offset: usize,
    bound: usize,
    done: bool,
}

impl<'a> AddressTable<'a> {
    pub fn new(image: &'a SourceImage, profile: &ChipProfile) -> Self {
        Self {
            image,
            offset: profile.address_section_start,
            bound: profile.address_section_end,
            done: false,
        }
    }
}

impl Iterator for AddressTable<'_> {
    type Item = AddressRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.bound {
            self.done = true;
            return None;
        }
        let offset = self.offset;
        let Some(raw) = read_record(self.image, offset) else {
            self.done = true;
            return None;
        };
        if raw.iter().all(|&b| b == 0) {
            debug!(offset, "terminator record");
            self.done = true;
            return None;
        }

        self.offset += RECORD_STRIDE;
        let record = AddressRecord::decode(offset, &raw);
        debug!(
            offset,
            start = record.start_address,
            end = record.end_address,
            "decoded address record"
        );
        Some(record)
    }
}

impl FusedIterator for AddressTable<'_> {}
