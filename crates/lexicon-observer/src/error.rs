//! Error types for the query API.
//!
//! [`ObserverError`] converts into an Axum HTTP response with a JSON
//! `{"error": ...}` body via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lexicon_store::StoreError;

/// Message returned whenever the current stream document cannot be served.
pub const UNAVAILABLE_MESSAGE: &str = "No stream data available";

/// Errors that can occur in the query API layer.
#[derive(Debug, thiserror::Error)]
pub enum ObserverError {
    /// The current stream document is missing or unreadable.
    #[error("stream unavailable: {0}")]
    Unavailable(String),

    /// An invalid query parameter was provided.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl From<StoreError> for ObserverError {
    fn from(err: StoreError) -> Self {
        Self::Unavailable(err.to_string())
    }
}

impl IntoResponse for ObserverError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Unavailable(reason) => {
                tracing::warn!(reason = %reason, "Stream document unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, UNAVAILABLE_MESSAGE.to_owned())
            }
            Self::InvalidQuery(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = serde_json::json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}
