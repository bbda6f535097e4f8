//! In-memory ROM image.

use std::path::Path;

use tracing::debug;

use crate::error::{ExtractError, ExtractResult};

/// The whole input file, loaded up front and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    bytes: Vec<u8>,
}

impl SourceImage {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// Read the complete file at `path` into memory.
    pub fn open(path: impl AsRef<Path>) -> ExtractResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ExtractError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), len = bytes.len(), "loaded rom image");
        Ok(Self::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fixed-size window at `offset`, or `None` if it runs past the end.
    pub fn window<const N: usize>(&self, offset: usize) -> Option<&[u8; N]> {
        let end = offset.checked_add(N)?;
        self.bytes.get(offset..end).and_then(|slice| slice.try_into().ok())
    }
}

impl From<Vec<u8>> for SourceImage {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for SourceImage {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}
