//! Per-generation archive of raw snapshots.
//!
//! Each fetched snapshot is kept verbatim as `gen_{generation:06}.json`.
//! Archiving the same generation twice overwrites the earlier copy.

use std::path::PathBuf;

use lexicon_types::Generation;

use crate::atomic::write_atomic;
use crate::error::StoreError;

/// Operations on the snapshot archive directory.
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    dir: PathBuf,
}

impl ArchiveStore {
    /// Create an archive rooted at `dir`. The directory is created on the
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that holds the snapshot for `generation`.
    pub fn path_for(&self, generation: Generation) -> PathBuf {
        self.dir.join(format!("gen_{generation:06}.json"))
    }

    /// Archive a raw snapshot as pretty-printed JSON and return its path.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Serialization`] if encoding fails, or
    /// [`StoreError::Io`] if the file cannot be written.
    pub async fn write_snapshot(
        &self,
        generation: Generation,
        raw: &serde_json::Value,
    ) -> Result<PathBuf, StoreError> {
        let path = self.path_for(generation);
        let json = serde_json::to_vec_pretty(raw)?;
        write_atomic(&path, &json).await?;

        tracing::debug!(generation, path = %path.display(), "Archived snapshot");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tempfile::TempDir;

    use super::*;

    async fn read_archived(archive: &ArchiveStore, generation: Generation) -> serde_json::Value {
        let bytes = tokio::fs::read(archive.path_for(generation)).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn file_name_encodes_generation() {
        let archive = ArchiveStore::new("data/snapshots");
        assert_eq!(
            archive.path_for(42),
            PathBuf::from("data/snapshots/gen_000042.json")
        );
        assert_eq!(
            archive.path_for(1_234_567),
            PathBuf::from("data/snapshots/gen_1234567.json")
        );
    }

    #[tokio::test]
    async fn write_keeps_document_verbatim() {
        let dir = TempDir::new().unwrap();
        let archive = ArchiveStore::new(dir.path().join("snapshots"));
        let raw = serde_json::json!({"generation": 7, "words": {}, "extra": [1, 2]});

        let path = archive.write_snapshot(7, &raw).await.unwrap();
        assert!(path.ends_with("gen_000007.json"));
        assert_eq!(read_archived(&archive, 7).await, raw);
        assert!(!archive.path_for(8).exists());
    }

    #[tokio::test]
    async fn same_generation_overwrites() {
        let dir = TempDir::new().unwrap();
        let archive = ArchiveStore::new(dir.path());

        archive
            .write_snapshot(3, &serde_json::json!({"generation": 3, "run": 1}))
            .await
            .unwrap();
        archive
            .write_snapshot(3, &serde_json::json!({"generation": 3, "run": 2}))
            .await
            .unwrap();

        let stored = read_archived(&archive, 3).await;
        assert_eq!(stored["run"], 2);
    }
}
