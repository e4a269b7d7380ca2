//! REST API endpoint handlers.
//!
//! Every stream handler reads the current document from disk through the
//! shared [`AppState`]; nothing is cached between requests.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/health` | Liveness probe |
//! | `GET` | `/api/stream` | Current stream document |
//! | `GET` | `/api/stream/events` | Events of the current document, filtered |

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use lexicon_types::{Event, EventKind, Generation, StreamDocument};

use crate::error::ObserverError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/stream/events` endpoint.
#[derive(Debug, Default, serde::Deserialize)]
pub struct EventsQuery {
    /// Only events of this kind (`birth`, `death`, `compound`, `shift`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Only events at or after this generation.
    pub since: Option<Generation>,
    /// Maximum number of events to return.
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

/// Report that the server is up. Does not touch the document store.
#[allow(clippy::unused_async)]
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// GET /api/stream
// ---------------------------------------------------------------------------

/// Return the current stream document.
pub async fn get_stream(
    State(state): State<Arc<AppState>>,
) -> Result<Json<StreamDocument>, ObserverError> {
    let document = state.stream.read().await?;
    Ok(Json(document))
}

// ---------------------------------------------------------------------------
// GET /api/stream/events
// ---------------------------------------------------------------------------

/// Return the events of the current stream document, in timeline order.
///
/// # Query Parameters
///
/// - `type`: `birth` | `death` | `compound` | `shift`
/// - `since`: lowest generation to include
/// - `limit`: maximum number of events to return
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EventsQuery>,
) -> Result<impl IntoResponse, ObserverError> {
    let kind = params
        .kind
        .as_deref()
        .map(|name| {
            EventKind::from_name(name)
                .ok_or_else(|| ObserverError::InvalidQuery(format!("unknown event type: {name}")))
        })
        .transpose()?;

    let document = state.stream.read().await?;
    let events = filter_events(&document.events, kind, params.since, params.limit);

    Ok(Json(serde_json::json!({
        "generation": document.generation,
        "count": events.len(),
        "events": events,
    })))
}

fn filter_events(
    events: &[Event],
    kind: Option<EventKind>,
    since: Option<Generation>,
    limit: Option<usize>,
) -> Vec<&Event> {
    events
        .iter()
        .filter(|e| kind.is_none_or(|k| e.kind() == k))
        .filter(|e| since.is_none_or(|g| e.generation() >= g))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}
