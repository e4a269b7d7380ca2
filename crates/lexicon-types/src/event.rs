//! Events reconstructed from a snapshot.
//!
//! Each event serializes as a flat JSON object with a `type` discriminator
//! (`birth`, `death`, `compound`, `shift`) and a `gen` field. Events are
//! immutable once produced.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::snapshot::Generation;

/// A single entry in the reconstructed timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Event {
    /// A word appeared.
    Birth(BirthEvent),
    /// A word died.
    Death(DeathEvent),
    /// A compound word formed.
    Compound(CompoundEvent),
    /// A sound shift was applied.
    Shift(ShiftEvent),
}

impl Event {
    /// The generation the event happened in.
    pub const fn generation(&self) -> Generation {
        match self {
            Self::Birth(e) => e.generation,
            Self::Death(e) => e.generation,
            Self::Compound(e) => e.generation,
            Self::Shift(e) => e.generation,
        }
    }

    /// The discriminator of this event.
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Birth(_) => EventKind::Birth,
            Self::Death(_) => EventKind::Death,
            Self::Compound(_) => EventKind::Compound,
            Self::Shift(_) => EventKind::Shift,
        }
    }
}

/// Event discriminator, used for ordering and filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum EventKind {
    /// See [`Event::Birth`].
    Birth,
    /// See [`Event::Death`].
    Death,
    /// See [`Event::Compound`].
    Compound,
    /// See [`Event::Shift`].
    Shift,
}

impl EventKind {
    /// Priority of this kind among events of the same generation. Lower
    /// sorts first.
    pub const fn priority(self) -> u8 {
        match self {
            Self::Death => 0,
            Self::Shift => 1,
            Self::Compound => 2,
            Self::Birth => 3,
        }
    }

    /// Parse a lowercase kind name as it appears in the `type` field.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "birth" => Some(Self::Birth),
            "death" => Some(Self::Death),
            "compound" => Some(Self::Compound),
            "shift" => Some(Self::Shift),
            _ => None,
        }
    }
}

impl core::fmt::Display for EventKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Birth => write!(f, "birth"),
            Self::Death => write!(f, "death"),
            Self::Compound => write!(f, "compound"),
            Self::Shift => write!(f, "shift"),
        }
    }
}

/// A word appearing in the lexicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BirthEvent {
    /// Generation of birth.
    #[serde(rename = "gen")]
    pub generation: Generation,
    /// The word text.
    pub word: String,
    /// What the word means.
    pub meaning: String,
    /// Grammatical category.
    pub category: String,
    /// Current fitness. Present only for living words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub fitness: Option<f64>,
    /// Generations since birth. Present only for living words.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub age: Option<Generation>,
    /// Whether the word is still in the lexicon.
    pub alive: bool,
}

/// A word leaving the lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DeathEvent {
    /// Generation of death.
    #[serde(rename = "gen")]
    pub generation: Generation,
    /// The word text.
    pub word: String,
    /// What the word meant.
    pub meaning: String,
    /// Grammatical category, `unknown` when never recorded.
    pub category: String,
    /// Generations between birth and death.
    pub lifespan: Generation,
    /// Recorded uses before death.
    pub uses: u64,
    /// Died unused within a few generations of birth.
    pub stillborn: bool,
}

/// A compound word forming from existing words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CompoundEvent {
    /// Generation the compound formed in.
    #[serde(rename = "gen")]
    pub generation: Generation,
    /// The compound text.
    pub word: String,
    /// Meaning of the compound as a whole.
    pub meaning: String,
    /// Constituent words.
    pub parts: Vec<String>,
    /// Meanings of the constituents, parallel to `parts`.
    pub part_meanings: Vec<String>,
}

/// A sound shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ShiftEvent {
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
