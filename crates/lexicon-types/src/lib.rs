//! Shared type definitions for the Lexicon stream.
//!
//! This crate is the single source of truth for the wire types used across
//! the workspace. Types flow downstream to `TypeScript` via `ts-rs` for the
//! dashboard assets served by the observer.
//!
//! # Modules
//!
//! - [`snapshot`] -- The raw state snapshot read from the provider
//! - [`event`] -- Events reconstructed from a snapshot
//! - [`stream`] -- Statistics and the persisted stream document

pub mod event;
pub mod snapshot;
pub mod stream;

// Re-export all public types at crate root for convenience.
pub use event::{BirthEvent, CompoundEvent, DeathEvent, Event, EventKind, ShiftEvent};
pub use snapshot::{
    CompoundInfo, ExtinctRecord, Generation, ShiftRecord, Snapshot, SourceStats, UNKNOWN_CATEGORY,
    WordInfo,
};
pub use stream::{LivingWord, StatisticsRecord, StreamDocument};
