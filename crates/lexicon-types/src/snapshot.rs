//! Typed representation of the raw lexicon state snapshot.
//!
//! The state provider serves a single JSON document describing the living
//! words, the extinct words, derived compounds, and sound shifts at one
//! generation. These types mirror that document exactly and carry no
//! behavior. Collections missing from the wire deserialize as empty.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A discrete simulation tick. Signed so that inconsistent upstream data
/// (a word born after the current generation) surfaces as a negative age
/// rather than wrapping.
pub type Generation = i64;

/// Category assigned to extinct records that carry none.
pub const UNKNOWN_CATEGORY: &str = "unknown";

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One immutable point-in-time capture of the simulated lexicon.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// The current generation, the global clock.
    pub generation: Generation,
    /// Currently living words keyed by their text, in provider order.
    #[serde(default)]
    pub words: IndexMap<String, WordInfo>,
    /// Words that have died, in the order the provider recorded them.
    /// The same word text may appear more than once.
    #[serde(default)]
    pub extinct: Vec<ExtinctRecord>,
    /// Multi-part words keyed by their text, in provider order.
    #[serde(default)]
    pub compounds: IndexMap<String, CompoundInfo>,
    /// Phonetic transformations in the order they were applied.
    #[serde(default)]
    pub sound_shifts: Vec<ShiftRecord>,
    /// Authoritative counters maintained by the provider.
    #[serde(default)]
    #[ts(optional)]
    pub stats: Option<SourceStats>,
}

/// A living word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WordInfo {
    /// Generation the word appeared in.
    pub born: Generation,
    /// What the word means.
    pub meaning: String,
    /// Open-ended grammatical category (`noun`, `verb`, ...).
    pub category: String,
    /// Selection fitness reported by the simulation.
    pub fitness: f64,
    /// Number of recorded uses.
    #[serde(default)]
    pub uses: u64,
}

/// A word that has died.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ExtinctRecord {
    /// The word text.
    pub word: String,
    /// What the word meant.
    pub meaning: String,
    /// Grammatical category, when the provider recorded one.
    #[serde(default)]
    #[ts(optional)]
    pub category: Option<String>,
    /// Generation the word appeared in.
    pub born: Generation,
    /// Generation the word died in, when recorded.
    #[serde(default)]
    #[ts(optional)]
    pub died: Option<Generation>,
    /// Number of recorded uses before death.
    #[serde(default)]
    #[ts(optional)]
    pub uses: Option<u64>,
}

impl ExtinctRecord {
    /// The recorded category, or [`UNKNOWN_CATEGORY`].
    pub fn category_or_unknown(&self) -> &str {
        self.category.as_deref().unwrap_or(UNKNOWN_CATEGORY)
    }

    /// The recorded use count, treating an absent count as zero.
    pub fn uses_or_zero(&self) -> u64 {
        self.uses.unwrap_or(0)
    }
}

/// A compound word built from existing words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CompoundInfo {
    /// Generation the compound appeared in.
    pub born: Generation,
    /// Meaning of the compound as a whole.
    pub compound_meaning: String,
    /// Constituent words.
    #[serde(default)]
    pub parts: Vec<String>,
    /// Meanings of the constituents, parallel to `parts`.
    #[serde(default)]
    pub meanings: Vec<String>,
}

/// A sound shift applied at one generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShiftRecord {
    /// Generation the shift happened in.
    #[serde(rename = "gen")]
    pub generation: Generation,
    /// Form before the shift.
    pub from: String,
    /// Form after the shift.
    pub to: String,
    /// Meaning carried across the shift.
    pub meaning: String,
}

/// Counters the provider keeps across the whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SourceStats {
    /// Words ever generated.
    #[serde(default)]
    #[ts(optional)]
    pub total_generated: Option<u64>,
    /// Words ever gone extinct.
    #[serde(default)]
    #[ts(optional)]
    pub total_extinct: Option<u64>,
    /// Sound shifts ever applied.
    #[serde(default)]
    #[ts(optional)]
    pub total_shifts: Option<u64>,
}
