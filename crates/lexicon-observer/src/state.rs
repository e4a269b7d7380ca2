//! Shared application state for the query API.
//!
//! The state holds configuration only. The stream document is re-read from
//! disk on every request, so there is nothing mutable to share between
//! handlers.

use std::path::{Path, PathBuf};

use lexicon_store::StreamStore;

/// Shared state for the Axum application, injected via `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Store holding the current stream document.
    pub stream: StreamStore,
    /// Directory of pre-built dashboard assets.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create application state for the given store and asset directory.
    pub fn new(stream: StreamStore, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            stream,
            static_dir: static_dir.into(),
        }
    }

    /// Create application state using the standard layout under `data_dir`.
    pub fn from_data_dir(data_dir: &Path, static_dir: impl Into<PathBuf>) -> Self {
        let (stream, _) = lexicon_store::open(data_dir);
        Self::new(stream, static_dir)
    }
}
