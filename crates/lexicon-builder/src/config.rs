//! Configuration for the stream builder.
//!
//! All configuration is loaded from environment variables, each with a
//! default so the builder runs against a local provider out of the box.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::BuildError;

/// Default base URL of the state provider.
pub const DEFAULT_STATE_URL: &str = "http://localhost:3000";

/// Complete builder configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Base URL of the state provider; `/api/state` is appended.
    pub state_url: String,
    /// Directory holding `stream.json` and the `snapshots/` archive.
    pub data_dir: PathBuf,
    /// Upper bound on a single snapshot fetch.
    pub fetch_timeout: Duration,
    /// Delay between builds in loop mode. `None` runs a single build.
    pub build_interval: Option<Duration>,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            state_url: DEFAULT_STATE_URL.to_owned(),
            data_dir: PathBuf::from("data"),
            fetch_timeout: Duration::from_millis(10_000),
            build_interval: None,
        }
    }
}

impl BuilderConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `LEXICON_STATE_URL` -- state provider base URL (default `http://localhost:3000`)
    /// - `LEXICON_DATA_DIR` -- output directory (default `data`)
    /// - `LEXICON_FETCH_TIMEOUT_MS` -- fetch timeout in milliseconds, nonzero (default 10000)
    /// - `BUILD_INTERVAL_SECS` -- seconds between builds, 0 for a single run (default 0)
    pub fn from_env() -> Result<Self, BuildError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, BuildError> {
        let state_url = lookup("LEXICON_STATE_URL")
            .unwrap_or_else(|| DEFAULT_STATE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let data_dir = PathBuf::from(lookup("LEXICON_DATA_DIR").unwrap_or_else(|| "data".to_owned()));

        let fetch_timeout_ms: u64 = lookup("LEXICON_FETCH_TIMEOUT_MS")
            .unwrap_or_else(|| "10000".to_owned())
            .parse()
            .map_err(|e| BuildError::Config(format!("invalid LEXICON_FETCH_TIMEOUT_MS: {e}")))?;
        if fetch_timeout_ms == 0 {
            return Err(BuildError::Config(String::from(
                "invalid LEXICON_FETCH_TIMEOUT_MS: must be greater than 0",
            )));
        }

        let build_interval_secs: u64 = lookup("BUILD_INTERVAL_SECS")
            .unwrap_or_else(|| "0".to_owned())
            .parse()
            .map_err(|e| BuildError::Config(format!("invalid BUILD_INTERVAL_SECS: {e}")))?;

        Ok(Self {
            state_url,
            data_dir,
            fetch_timeout: Duration::from_millis(fetch_timeout_ms),
            build_interval: (build_interval_secs > 0).then_some(Duration::from_secs(build_interval_secs)),
        })
    }

    /// Full URL of the snapshot endpoint.
    pub fn snapshot_url(&self) -> String {
        format!("{}/api/state", self.state_url)
    }
}
