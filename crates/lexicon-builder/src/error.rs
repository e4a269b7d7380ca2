//! Error types for the stream builder.
//!
//! Any error aborts the build as a whole. Nothing is retried, and a fetch
//! failure leaves the previously persisted document untouched.

use lexicon_store::StoreError;

/// Errors that can occur while building a stream document.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// Configuration is invalid.
    #[error("config error: {0}")]
    Config(String),

    /// The state provider was unreachable or the request timed out.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// The state provider answered with a non-success status.
    #[error("state provider returned {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for the operator log.
        body: String,
    },

    /// The response body was not a valid snapshot.
    #[error("decode error: {0}")]
    Decode(String),

    /// Persisting the archive or the current document failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
