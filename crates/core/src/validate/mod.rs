//! Structural checks run before anything is decoded.

use tracing::{debug, info};

use crate::chip::ChipProfile;
use crate::error::{ExtractError, ExtractResult};
use crate::image::SourceImage;
use crate::table::{read_be16, read_record, record_offsets, RESERVED_FIELD};

/// Confirm `image` looks like an external ROM for `profile`.
///
/// Checks, in order: minimum size, maximum size, empty reserved header, and
/// an empty reserved field in every record of the table region (not only the
/// ones before the terminator).
pub fn validate(image: &SourceImage, profile: &ChipProfile) -> ExtractResult<()> {
    let chip = profile.name();
    let len = image.len();

    if len < profile.address_section_end {
        return Err(ExtractError::TooSmallForAddressTable {
            chip,
            len,
            required: profile.address_section_end,
        });
    }

    if len > profile.max_image_len() {
        return Err(ExtractError::ExceedsCapacity { chip, len, max: profile.max_image_len() });
    }

    let header = &image.as_bytes()[..profile.address_section_start];
    if header.iter().any(|&b| b != 0) {
        return Err(ExtractError::MalformedHeader { chip });
    }

    let mut records = 0usize;
    for offset in record_offsets(profile, len) {
        let Some(raw) = read_record(image, offset) else {
            break;
        };
        if read_be16(&raw[RESERVED_FIELD]) != 0 {
            debug!(offset, "nonzero reserved field");
            return Err(ExtractError::MalformedAddressRecord { chip, offset });
        }
        records += 1;
    }

    info!(chip, len, records, "address data section identified");
    Ok(())
}
