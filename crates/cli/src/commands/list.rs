use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use soundrom_core::{plan, ChipProfile, Segment, SourceImage};

/// Decoded address table of one image, without anything written.
#[derive(Debug, Clone, Serialize)]
pub struct TableListing {
    pub profile: ChipProfile,
    pub input: String,
    pub image_len: usize,
    pub segments: Vec<Segment>,
}

/// Validate the input image and print the sounds it addresses.
pub fn list_command(chip: &str, input: &Path, json: bool) -> Result<TableListing> {
    let profile = ChipProfile::resolve(chip)?;
    let image = SourceImage::open(input)?;
    let segments = plan(&image, &profile)?;

    let listing = TableListing {
        profile,
        input: input.display().to_string(),
        image_len: image.len(),
        segments,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(listing);
    }

    println!("{} ROM, {} bytes", profile.name(), listing.image_len);
    println!("Sounds ({}):", listing.segments.len());
    if listing.segments.is_empty() {
        println!("  (none)");
        return Ok(listing);
    }

    for segment in &listing.segments {
        println!(
            "  - {} [record {:#06x}] start={:#08x} end={:#08x} ({} bytes)",
            segment.file_name(),
            segment.record_offset,
            segment.start,
            segment.end,
            segment.len()
        );
    }

    Ok(listing)
}
