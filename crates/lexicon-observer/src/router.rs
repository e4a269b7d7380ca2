//! Axum router construction for the query API.
//!
//! Assembles the REST routes and the static asset fallback into a single
//! [`Router`] with CORS enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the observer.
///
/// The router includes:
/// - `GET /api/health` -- liveness probe
/// - `GET /api/stream` -- current stream document
/// - `GET /api/stream/events` -- filtered events of the current document
/// - any other path -- static dashboard assets, served verbatim
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/stream", get(handlers::get_stream))
        .route("/api/stream/events", get(handlers::list_events))
        .fallback_service(assets)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
