//! Stream builder for the Lexicon stream.
//!
//! Fetches the current snapshot from the state provider, archives it,
//! derives the event timeline and statistics, and replaces the current
//! stream document.
//!
//! # Architecture
//!
//! ```text
//! state provider --> StateClient --> ArchiveStore (raw snapshot)
//!                         |
//!                         +--> reconstruct_events + aggregate --> StreamStore
//! ```
//!
//! # Modules
//!
//! - [`builder`] -- [`StreamBuilder`] orchestration and [`assemble`]
//! - [`config`] -- Environment-driven [`BuilderConfig`]
//! - [`fetch`] -- HTTP client for the state provider
//! - [`error`] -- [`BuildError`]

pub mod builder;
pub mod config;
pub mod error;
pub mod fetch;

pub use builder::{assemble, BuildReport, StreamBuilder};
pub use config::BuilderConfig;
pub use error::BuildError;
pub use fetch::{FetchedSnapshot, StateClient};
