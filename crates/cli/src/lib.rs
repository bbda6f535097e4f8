use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

pub mod commands;

/// Process exit status for any failure (`-1` as seen by the shell).
pub const FAILURE_EXIT_CODE: u8 = 255;

/// Make `path` absolute, relative to the current working directory.
///
/// Existing paths are canonicalized; paths that do not exist yet (e.g., an
/// output directory about to be created) are joined with the current dir.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    match path.canonicalize() {
        Ok(p) => Ok(p),
        Err(_) if path.is_absolute() => Ok(path.to_path_buf()),
        Err(_) => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Ok(cwd.join(path))
        }
    }
}

/// Compute the SHA-256 hash of a byte slice and return it as a hex string.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}
