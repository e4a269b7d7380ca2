//! Snapshot retrieval from the state provider.
//!
//! A single `GET {state_url}/api/state` per build, bounded by the configured
//! timeout. The raw JSON is kept alongside the typed [`Snapshot`] so the
//! archive stores exactly what the provider sent.

use std::time::Duration;

use lexicon_types::Snapshot;
use serde::Deserialize;

use crate::error::BuildError;

/// A snapshot as fetched: the provider's raw document plus its typed view.
#[derive(Debug, Clone)]
pub struct FetchedSnapshot {
    /// The document exactly as served, unknown fields included.
    pub raw: serde_json::Value,
    /// The typed snapshot.
    pub snapshot: Snapshot,
}

/// HTTP client for the state provider.
#[derive(Debug, Clone)]
pub struct StateClient {
    client: reqwest::Client,
    url: String,
}

impl StateClient {
    /// Create a client for the snapshot endpoint at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the HTTP client cannot be built.
    pub fn new(url: String, timeout: Duration) -> Result<Self, BuildError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BuildError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, url })
    }

    /// The snapshot endpoint this client reads.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Fetch`] on transport failure or timeout,
    /// [`BuildError::Status`] on a non-success status, and
    /// [`BuildError::Decode`] if the body is not a valid snapshot.
    pub async fn fetch(&self) -> Result<FetchedSnapshot, BuildError> {
        let response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| BuildError::Fetch(format!("GET {} failed: {e}", self.url)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(BuildError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BuildError::Fetch(format!("reading body from {} failed: {e}", self.url)))?;

        decode(&bytes)
    }
}

/// Decode a provider response body into raw and typed forms.
///
/// # Errors
///
/// Returns [`BuildError::Decode`] if the body is not JSON or does not match
/// the snapshot shape.
pub fn decode(body: &[u8]) -> Result<FetchedSnapshot, BuildError> {
    let raw: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| BuildError::Decode(format!("response is not JSON: {e}")))?;
    let snapshot = Snapshot::deserialize(&raw)
        .map_err(|e| BuildError::Decode(format!("response is not a snapshot: {e}")))?;
    Ok(FetchedSnapshot { raw, snapshot })
}
