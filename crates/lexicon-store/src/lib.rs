//! File-backed storage for the Lexicon stream.
//!
//! # Layout
//!
//! ```text
//! {data_dir}/
//!     stream.json              <- current StreamDocument (StreamStore)
//!     snapshots/
//!         gen_000042.json      <- raw snapshot per generation (ArchiveStore)
//! ```
//!
//! # Modules
//!
//! - [`stream_store`] -- Current stream document, replaced on every build
//! - [`archive`] -- Per-generation raw snapshot archive
//! - [`atomic`] -- Write-then-rename file replacement
//! - [`error`] -- Shared error types

pub mod archive;
pub mod atomic;
pub mod error;
pub mod stream_store;

use std::path::Path;

// Re-export primary types for convenience.
pub use archive::ArchiveStore;
pub use error::StoreError;
pub use stream_store::StreamStore;

/// File name of the current stream document inside the data directory.
pub const STREAM_FILE: &str = "stream.json";

/// Name of the snapshot archive directory inside the data directory.
pub const ARCHIVE_DIR: &str = "snapshots";

/// Open both stores under the standard layout rooted at `data_dir`.
pub fn open(data_dir: &Path) -> (StreamStore, ArchiveStore) {
    (
        StreamStore::new(data_dir.join(STREAM_FILE)),
        ArchiveStore::new(data_dir.join(ARCHIVE_DIR)),
    )
}
