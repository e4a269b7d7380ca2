//! The single current stream document.
//!
//! Each build overwrites the document wholesale; there is no merging with
//! the previous one. Reads go to disk every time so the observer never
//! serves a cached copy.

use std::path::{Path, PathBuf};

use lexicon_types::StreamDocument;

use crate::atomic::write_atomic;
use crate::error::StoreError;

/// Operations on the current stream document file.
#[derive(Debug, Clone)]
pub struct StreamStore {
    path: PathBuf,
}

impl StreamStore {
    /// Create a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the current document with `document` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails, or
    /// [`StoreError::Io`] if the file cannot be written.
    pub async fn write(&self, document: &StreamDocument) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(document)?;
        write_atomic(&self.path, &json).await?;

        tracing::debug!(
            path = %self.path.display(),
            generation = document.generation,
            events = document.events.len(),
            "Wrote stream document"
        );
        Ok(())
    }

    /// Read and parse the current document.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the file is missing,
    /// unreadable, or not a valid stream document.
    pub async fn read(&self) -> Result<StreamDocument, StoreError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            StoreError::Unavailable(format!("cannot read {}: {e}", self.path.display()))
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::Unavailable(format!("cannot parse {}: {e}", self.path.display()))
        })
    }
}
