//! Segment extraction.
//!
//! Turns decoded address records into checked [`Segment`]s and hands the
//! matching byte ranges to an [`ArtifactSink`]. Writing files is the sink's
//! business; this module never touches the filesystem.

use serde::Serialize;
use tracing::{info, warn};

use crate::chip::{ChipProfile, ChipType};
use crate::error::{ExtractError, ExtractResult};
use crate::image::SourceImage;
use crate::table::{AddressRecord, AddressTable};
use crate::validate::validate;

/// Knobs for how artifacts are cut out of the image.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Drop the last byte of every segment when emitting it.
    ///
    /// Dumps produced by the original tooling are one byte short per sound;
    /// this stays on by default so output matches them.
    pub trim_trailing_byte: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self { trim_trailing_byte: true }
    }
}

/// A checked `[start, end)` range of the image holding one sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    /// 1-based position in the address table.
    pub index: usize,
    /// Offset of the table record this segment was decoded from.
    pub record_offset: usize,
    pub start: u32,
    pub end: u32,
}

impl Segment {
    /// Check a decoded record against the profile and the loaded image.
    pub fn from_record(
        index: usize,
        record: AddressRecord,
        profile: &ChipProfile,
        image_len: usize,
    ) -> ExtractResult<Self> {
        let AddressRecord { offset, start_address: start, end_address: end } = record;

        let len = end.checked_sub(start).ok_or(ExtractError::InvalidAddressOrdering {
            offset,
            start,
            end,
        })? as usize;

        if len > profile.max_sample_section_size {
            return Err(ExtractError::SegmentOutOfCapacity {
                chip: profile.name(),
                offset,
                len,
                max: profile.max_sample_section_size,
            });
        }

        if end as usize > image_len {
            return Err(ExtractError::SegmentOutOfBounds { offset, end, image_len });
        }

        Ok(Self { index, record_offset: offset, start, end })
    }

    /// Length of the range; a hand-built segment with `end < start` is empty.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes actually emitted for this segment.
    pub fn emitted_len(&self, options: &ExtractOptions) -> usize {
        if options.trim_trailing_byte {
            self.len().saturating_sub(1)
        } else {
            self.len()
        }
    }

    /// Deterministic artifact name derived from the index.
    pub fn file_name(&self) -> String {
        artifact_file_name(self.index)
    }
}

/// `sound<index>.bin`
pub fn artifact_file_name(index: usize) -> String {
    format!("sound{index}.bin")
}

/// Bytes of one sound, ready to be stored by the output collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedArtifact<'a> {
    pub segment: Segment,
    pub data: &'a [u8],
}

impl ExtractedArtifact<'_> {
    pub fn index(&self) -> usize {
        self.segment.index
    }

    pub fn file_name(&self) -> String {
        self.segment.file_name()
    }
}

/// Destination for extracted artifacts.
///
/// Called once per segment, in table order. An error aborts the run.
pub trait ArtifactSink {
    fn accept(&mut self, artifact: &ExtractedArtifact<'_>) -> ExtractResult<()>;
}

/// Sink keeping owned copies of every artifact in memory.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    pub artifacts: Vec<(Segment, Vec<u8>)>,
}

impl ArtifactSink for CollectingSink {
    fn accept(&mut self, artifact: &ExtractedArtifact<'_>) -> ExtractResult<()> {
        self.artifacts.push((artifact.segment, artifact.data.to_vec()));
        Ok(())
    }
}

impl<S: ArtifactSink + ?Sized> ArtifactSink for &mut S {
    fn accept(&mut self, artifact: &ExtractedArtifact<'_>) -> ExtractResult<()> {
        (**self).accept(artifact)
    }
}

/// Outcome of a completed extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionSummary {
    pub chip: ChipType,
    /// Number of artifacts handed to the sink.
    pub artifacts: usize,
    /// Total bytes handed to the sink.
    pub bytes_written: usize,
}

/// Validate `image`, walk its address table and emit every sound to `sink`.
///
/// Stops at the first fault. Artifacts emitted before the fault are not
/// taken back.
pub fn extract<S: ArtifactSink>(
    image: &SourceImage,
    profile: &ChipProfile,
    options: &ExtractOptions,
    sink: S,
) -> ExtractResult<ExtractionSummary> {
    validate(image, profile)?;
    extract_validated(image, profile, options, sink)
}

/// Same as [`extract`] for an image that already passed [`validate`].
///
/// Lets a frontend validate first, act on the result (e.g. create the output
/// folder), and then extract without running the pre-scan a second time.
pub fn extract_validated<S: ArtifactSink>(
    image: &SourceImage,
    profile: &ChipProfile,
    options: &ExtractOptions,
    mut sink: S,
) -> ExtractResult<ExtractionSummary> {
    info!(chip = profile.name(), "isolating ADPCM byte samples");

    let bytes = image.as_bytes();
    let mut summary = ExtractionSummary { chip: profile.chip, artifacts: 0, bytes_written: 0 };

    for (position, record) in AddressTable::new(image, profile).enumerate() {
        let segment = Segment::from_record(position + 1, record, profile, image.len())?;
        if segment.is_empty() {
            warn!(index = segment.index, start = segment.start, "zero-length sound");
        }

        let start = segment.start as usize;
        let data = &bytes[start..start + segment.emitted_len(options)];
        sink.accept(&ExtractedArtifact { segment, data })?;

        summary.artifacts += 1;
        summary.bytes_written += data.len();
    }

    info!(artifacts = summary.artifacts, bytes = summary.bytes_written, "extraction complete");
    Ok(summary)
}

/// Validate and decode without emitting anything.
pub fn plan(image: &SourceImage, profile: &ChipProfile) -> ExtractResult<Vec<Segment>> {
    validate(image, profile)?;
    AddressTable::new(image, profile)
        .enumerate()
        .map(|(position, record)| Segment::from_record(position + 1, record, profile, image.len()))
        .collect()
}
