use std::fs;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use soundrom_core::output::OutputLayout;
use soundrom_core::{ChipType, Segment};

use crate::sha256_bytes;

/// One written sound, as recorded in `manifest.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub index: usize,
    pub file: String,
    pub start: u32,
    pub end: u32,
    /// Length of the decoded range.
    pub length: usize,
    /// Bytes actually written to `file`.
    pub written: usize,
    pub sha256: String,
}

impl ManifestEntry {
    pub fn new(segment: &Segment, data: &[u8]) -> Self {
        Self {
            index: segment.index,
            file: segment.file_name(),
            start: segment.start,
            end: segment.end,
            length: segment.len(),
            written: data.len(),
            sha256: sha256_bytes(data),
        }
    }
}

/// Record of one extraction run.
///
/// Written to the output directory with `--manifest` and printed with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionManifest {
    pub tool_version: String,
    pub chip: ChipType,
    pub input: String,
    pub output: String,
    pub extracted_at: String,
    pub trimmed_trailing_byte: bool,
    pub total_bytes: usize,
    pub artifacts: Vec<ManifestEntry>,
}

/// Serialize `manifest` to `layout.manifest_path`.
pub fn write_manifest(layout: &OutputLayout, manifest: &ExtractionManifest) -> Result<()> {
    let json = serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    fs::write(&layout.manifest_path, json).with_context(|| {
        format!("Failed to write manifest: {}", layout.manifest_path.display())
    })?;
    Ok(())
}
