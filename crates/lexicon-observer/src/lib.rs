//! Query API server for the Lexicon stream.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`GET /api/stream`** -- the current stream document, re-read from
//!   disk on every request
//! - **`GET /api/stream/events`** -- the document's events filtered by
//!   type, generation, and count
//! - **`GET /api/health`** -- liveness probe
//! - **Static dashboard assets** for every other path
//!
//! # Architecture
//!
//! The observer is stateless: the builder replaces `stream.json`
//! atomically, and each request reads whichever version is on disk. A
//! missing or corrupt document yields HTTP 500 with
//! `{"error": "No stream data available"}`.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ObserverError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
