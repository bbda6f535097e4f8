//! soundrom-core
//!
//! Core library for pulling ADPCM sounds out of MSM6295 / TT6297 external ROM
//! images.
//!
//! A ROM image starts with a small reserved header followed by a table of
//! (start, end) address pairs. This crate validates that table, decodes it,
//! and cuts every addressed range out of the image. Everything that touches
//! the outside world beyond reading the input lives in the frontends, which
//! plug in through [`extract::ArtifactSink`].

pub mod chip;
pub mod error;
pub mod extract;
pub mod image;
pub mod output;
pub mod table;
pub mod validate;

pub use chip::{ChipProfile, ChipType};
pub use error::{ExtractError, ExtractResult};
pub use extract::{
    extract, extract_validated, plan, ArtifactSink, CollectingSink, ExtractOptions,
    ExtractedArtifact, ExtractionSummary, Segment,
};
pub use image::SourceImage;
pub use table::{AddressRecord, AddressTable};

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
