//! The derived, servable stream document.
//!
//! A [`StreamDocument`] combines the aggregate [`StatisticsRecord`] with the
//! reconstructed event timeline. It is the unit the builder persists and
//! the observer serves, and each build replaces the previous one wholesale.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::event::Event;
use crate::snapshot::Generation;

/// The document persisted by the builder and served by the observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StreamDocument {
    /// Wall-clock time the document was assembled.
    pub generated: DateTime<Utc>,
    /// Generation of the snapshot the document was derived from.
    pub generation: Generation,
    /// Aggregate statistics over the snapshot.
    pub stats: StatisticsRecord,
    /// Totally ordered event timeline.
    pub events: Vec<Event>,
}

/// Summary statistics over one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct StatisticsRecord {
    /// Number of living words.
    pub population: u64,
    /// Living words per category.
    pub categories: BTreeMap<String, u64>,
    /// Mean lifespan of extinct words with a recorded death, one decimal.
    pub avg_lifespan: f64,
    /// Longest lifespan of extinct words with a recorded death.
    pub max_lifespan: Generation,
    /// Extinct words that died unused within five generations.
    pub stillborn_count: u64,
    /// Words ever generated, per the provider.
    pub total_born: u64,
    /// Words ever gone extinct, per the provider.
    pub total_dead: u64,
    /// Sound shifts ever applied, per the provider.
    pub total_shifts: u64,
    /// `total_dead / total_born` as a percentage, one decimal.
    pub mortality_rate: f64,
    /// Oldest living word.
    pub elder: Option<LivingWord>,
    /// Fittest living word.
    pub fittest: Option<LivingWord>,
    /// All living words, fittest first.
    pub living_words: Vec<LivingWord>,
}

/// Projection of a living word used by the statistics record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct LivingWord {
    /// The word text.
    pub word: String,
    /// What the word means.
    pub meaning: String,
    /// Grammatical category.
    pub category: String,
    /// Generations since birth.
    pub age: Generation,
    /// Current fitness.
    pub fitness: f64,
    /// Recorded uses.
    pub uses: u64,
}
