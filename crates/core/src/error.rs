use std::path::PathBuf;

use thiserror::Error;

/// Error type for every stage of the extraction pipeline.
///
/// All variants are fatal: the pipeline stops at the first one it hits and
/// the caller is expected to abort the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Chip selector was neither `1`/`2` nor a known chip name.
    #[error("Unknown chip type '{0}'. Allowed: 1 (msm6295), 2 (tt6297)")]
    UnknownChipType(String),

    /// Input image could not be opened or read.
    #[error("Failed to open the input binary file {}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Input binary file does not correspond to an external {chip} ROM: {len} bytes is too small \
         for the address data section (needs at least {required})"
    )]
    TooSmallForAddressTable { chip: &'static str, len: usize, required: usize },

    #[error(
        "Input binary file does not correspond to an external {chip} ROM: {len} bytes is over the \
         max capacity of {max} bytes"
    )]
    ExceedsCapacity { chip: &'static str, len: usize, max: usize },

    /// Something is written in the reserved bytes in front of the address table.
    #[error(
        "Input binary file does not correspond to an external {chip} ROM: reserved header is not \
         empty, address data section not identified"
    )]
    MalformedHeader { chip: &'static str },

    /// The reserved trailing field of a table record is nonzero.
    #[error(
        "Input binary file does not correspond to an external {chip} ROM: address record at \
         {offset:#06x} has a nonzero reserved field, address data section not identified"
    )]
    MalformedAddressRecord { chip: &'static str, offset: usize },

    #[error(
        "Address record at {offset:#06x} ends before it starts (start {start:#08x}, end {end:#08x})"
    )]
    InvalidAddressOrdering { offset: usize, start: u32, end: u32 },

    #[error(
        "Address record at {offset:#06x} leads to out of bounds memory ({len} bytes, max {max}). \
         File is corrupted or not a {chip} ROM"
    )]
    SegmentOutOfCapacity { chip: &'static str, offset: usize, len: usize, max: usize },

    /// Segment points past the end of the loaded image.
    #[error(
        "Address record at {offset:#06x} points past the end of the image (end {end:#08x}, image \
         is {image_len} bytes)"
    )]
    SegmentOutOfBounds { offset: usize, end: u32, image_len: usize },

    /// The output collaborator failed to store an artifact.
    #[error("Failed to write sound artifact {}", path.display())]
    ArtifactWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
