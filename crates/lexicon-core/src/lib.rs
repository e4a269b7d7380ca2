//! Event reconstruction and statistics derivation for the Lexicon stream.
//!
//! Both entry points are pure functions over an immutable [`Snapshot`]:
//! they perform no I/O, hold no state, and return identical output for
//! identical input.
//!
//! # Modules
//!
//! - [`reconstruct`] -- Snapshot to totally ordered event timeline.
//! - [`stats`] -- Snapshot to [`StatisticsRecord`].
//!
//! [`Snapshot`]: lexicon_types::Snapshot
//! [`StatisticsRecord`]: lexicon_types::StatisticsRecord

pub mod reconstruct;
pub mod stats;

pub use reconstruct::{effective_death, is_stillborn, reconstruct_events, STILLBORN_MAX_LIFESPAN};
pub use stats::aggregate;
