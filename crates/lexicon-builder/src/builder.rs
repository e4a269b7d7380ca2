//! Build orchestration: fetch, archive, derive, persist.
//!
//! A build either completes every step or fails as a whole. The raw
//! snapshot is archived before derivation, and the current document is
//! replaced last, so a failed fetch never touches what the observer is
//! serving.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use lexicon_core::{aggregate, reconstruct_events};
use lexicon_store::{ArchiveStore, StreamStore};
use lexicon_types::{Generation, Snapshot, StreamDocument};
use tracing::{debug, info};

use crate::config::BuilderConfig;
use crate::error::BuildError;
use crate::fetch::StateClient;

/// Outcome of a successful build, for the operator log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Generation of the snapshot that was built.
    pub generation: Generation,
    /// Number of events in the timeline.
    pub event_count: usize,
    /// Number of living words.
    pub population: u64,
    /// Where the raw snapshot was archived.
    pub archive_path: PathBuf,
    /// Where the current document was written.
    pub document_path: PathBuf,
}

/// Derive a stream document from a snapshot, stamped with `generated`.
pub fn assemble(snapshot: &Snapshot, generated: DateTime<Utc>) -> StreamDocument {
    StreamDocument {
        generated,
        generation: snapshot.generation,
        stats: aggregate(snapshot),
        events: reconstruct_events(snapshot),
    }
}

/// Fetches snapshots and persists the derived stream documents.
///
/// Builds must be serialized by the caller; the builder holds no locks.
#[derive(Debug, Clone)]
pub struct StreamBuilder {
    client: StateClient,
    stream: StreamStore,
    archive: ArchiveStore,
}

impl StreamBuilder {
    /// Create a builder from explicit parts.
    pub const fn new(client: StateClient, stream: StreamStore, archive: ArchiveStore) -> Self {
        Self {
            client,
            stream,
            archive,
        }
    }

    /// Create a builder wired to the provider and data directory in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the HTTP client cannot be built.
    pub fn from_config(config: &BuilderConfig) -> Result<Self, BuildError> {
        let client = StateClient::new(config.snapshot_url(), config.fetch_timeout)?;
        let (stream, archive) = lexicon_store::open(&config.data_dir);
        Ok(Self::new(client, stream, archive))
    }

    /// Run one complete build.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Fetch errors occur before any
    /// write; store errors abort before the current document is replaced
    /// when the archive write fails.
    pub async fn build(&self) -> Result<BuildReport, BuildError> {
        debug!(url = self.client.url(), "Fetching snapshot");
        let fetched = self.client.fetch().await?;
        let generation = fetched.snapshot.generation;

        let archive_path = self.archive.write_snapshot(generation, &fetched.raw).await?;

        let document = assemble(&fetched.snapshot, Utc::now());
        self.stream.write(&document).await?;

        let report = BuildReport {
            generation,
            event_count: document.events.len(),
            population: document.stats.population,
            archive_path,
            document_path: self.stream.path().to_path_buf(),
        };

        info!(
            generation = report.generation,
            events = report.event_count,
            population = report.population,
            document = %report.document_path.display(),
            "Stream document built"
        );

        Ok(report)
    }
}
