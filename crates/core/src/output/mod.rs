use std::path::{Path, PathBuf};

use crate::extract::artifact_file_name;

/// Logical layout of an extraction output directory.
///
/// This is derived from the chosen output path. It does *not* perform any IO
/// itself; frontends create the directory and write the files.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Directory receiving the sound artifacts.
    pub root: PathBuf,
    /// Path of the optional JSON manifest.
    pub manifest_path: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let manifest_path = root.join("manifest.json");
        Self { root, manifest_path }
    }

    /// Path of the artifact with the given 1-based index.
    pub fn artifact_path(&self, index: usize) -> PathBuf {
        self.root.join(artifact_file_name(index))
    }
}
