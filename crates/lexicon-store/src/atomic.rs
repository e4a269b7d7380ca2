//! Atomic file replacement.
//!
//! Content goes to a sibling `.tmp` file, is synced, and is then renamed over
//! the destination. Readers observe either the previous file or the new
//! one, never a truncated write.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::StoreError;

/// Atomically write `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns [`StoreError::Io`] naming the path of the step that failed.
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StoreError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| StoreError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);

    let mut file = tokio::fs::File::create(&temp_path)
        .await
        .map_err(|e| StoreError::io(&temp_path, e))?;
    file.write_all(content)
        .await
        .map_err(|e| StoreError::io(&temp_path, e))?;
    file.sync_all()
        .await
        .map_err(|e| StoreError::io(&temp_path, e))?;
    drop(file);

    tokio::fs::rename(&temp_path, path)
        .await
        .map_err(|e| StoreError::io(path, e))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(ToOwned::to_owned).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stream.json");

        write_atomic(&path, b"old").await.unwrap();
        write_atomic(&path, b"new").await.unwrap();

        assert_eq!(tokio::fs::read(&path).await.unwrap(), b"new");
        assert!(!dir.path().join("stream.json.tmp").exists());
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("file.json");

        write_atomic(&path, b"{}").await.unwrap();

        assert!(path.exists());
    }

    #[test]
    fn temp_path_keeps_full_name() {
        assert_eq!(
            temp_path_for(Path::new("data/stream.json")),
            PathBuf::from("data/stream.json.tmp")
        );
    }
}
