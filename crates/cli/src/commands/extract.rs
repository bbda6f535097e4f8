use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use soundrom_core::output::OutputLayout;
use soundrom_core::validate::validate;
use soundrom_core::{
    ArtifactSink, ChipProfile, ExtractError, ExtractOptions, ExtractResult, ExtractedArtifact,
    SourceImage,
};
use tracing::debug;

use crate::absolutize;
use crate::commands::{write_manifest, ExtractionManifest, ManifestEntry};

/// Everything `extract_command` needs from the command line.
#[derive(Debug, Clone)]
pub struct ExtractArgs<'a> {
    pub chip: &'a str,
    pub input: &'a Path,
    pub output: &'a Path,
    pub options: ExtractOptions,
    /// Also write `manifest.json` next to the sounds.
    pub manifest: bool,
    /// Print the run record as JSON instead of progress lines.
    pub json: bool,
}

/// Sink writing each artifact to `<output>/sound<index>.bin`.
pub struct DirectorySink {
    layout: OutputLayout,
    quiet: bool,
    entries: Vec<ManifestEntry>,
}

impl DirectorySink {
    pub fn new(layout: OutputLayout, quiet: bool) -> Self {
        Self { layout, quiet, entries: Vec::new() }
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ManifestEntry> {
        self.entries
    }
}

impl ArtifactSink for DirectorySink {
    fn accept(&mut self, artifact: &ExtractedArtifact<'_>) -> ExtractResult<()> {
        let path = self.layout.artifact_path(artifact.index());
        if !self.quiet {
            println!(
                "Sound identified: ({} bytes) writing {}",
                artifact.segment.len(),
                artifact.file_name()
            );
        }
        fs::write(&path, artifact.data)
            .map_err(|source| ExtractError::ArtifactWrite { path: path.clone(), source })?;
        debug!(path = %path.display(), bytes = artifact.data.len(), "wrote artifact");
        self.entries.push(ManifestEntry::new(&artifact.segment, artifact.data));
        Ok(())
    }
}

/// Validate the input image, then write every sound it addresses into the
/// output directory.
pub fn extract_command(args: &ExtractArgs<'_>) -> Result<ExtractionManifest> {
    let profile = ChipProfile::resolve(args.chip)?;
    let image = SourceImage::open(args.input)?;

    validate(&image, &profile)?;
    if !args.json {
        println!(
            "Input file is valid. Address data section identified. Isolating ADPCM byte samples"
        );
    }

    let output_dir = absolutize(args.output)?;
    let layout = OutputLayout::new(&output_dir);
    fs::create_dir_all(&layout.root).with_context(|| {
        format!("Failed to create output folder: {}", layout.root.display())
    })?;

    let mut sink = DirectorySink::new(layout.clone(), args.json);
    let summary = soundrom_core::extract_validated(&image, &profile, &args.options, &mut sink)?;

    let manifest = ExtractionManifest {
        tool_version: soundrom_core::version().to_string(),
        chip: summary.chip,
        input: args.input.display().to_string(),
        output: layout.root.display().to_string(),
        extracted_at: Utc::now().to_rfc3339(),
        trimmed_trailing_byte: args.options.trim_trailing_byte,
        total_bytes: summary.bytes_written,
        artifacts: sink.into_entries(),
    };

    if args.manifest {
        write_manifest(&layout, &manifest)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
    } else {
        println!("Successfully completed. Total of {} sounds extracted", summary.artifacts);
    }

    Ok(manifest)
}
