//! Event reconstruction.
//!
//! Turns an unordered [`Snapshot`] into a totally ordered timeline. The
//! snapshot is traversed in a fixed order (living words, extinct records,
//! compounds, sound shifts) and the resulting events are stably sorted by
//! generation and then by [`EventKind::priority`], so events that tie on
//! both keep their traversal order.
//!
//! An extinct record without a recorded death is given one synthesized
//! generation after its birth. This is an explicit default, not an
//! inference from the data.
//!
//! [`EventKind::priority`]: lexicon_types::EventKind::priority

use lexicon_types::{
    BirthEvent, CompoundEvent, CompoundInfo, DeathEvent, Event, ExtinctRecord, Generation,
    ShiftEvent, ShiftRecord, Snapshot, WordInfo,
};

/// Longest lifespan, in generations, a word can have and still count as
/// stillborn.
pub const STILLBORN_MAX_LIFESPAN: Generation = 5;

/// Whether a word that died after `lifespan` generations with `uses`
/// recorded uses is stillborn.
pub const fn is_stillborn(uses: u64, lifespan: Generation) -> bool {
    uses == 0 && lifespan <= STILLBORN_MAX_LIFESPAN
}

/// Generation an extinct record died in, synthesizing `born + 1` when the
/// provider did not record one.
pub fn effective_death(record: &ExtinctRecord) -> Generation {
    record.died.unwrap_or_else(|| record.born.saturating_add(1))
}

/// Reconstruct the ordered event timeline implied by a snapshot.
///
/// Pure and deterministic: equal snapshots always yield equal sequences.
pub fn reconstruct_events(snapshot: &Snapshot) -> Vec<Event> {
    let capacity = snapshot
        .words
        .len()
        .saturating_add(snapshot.extinct.len().saturating_mul(2))
        .saturating_add(snapshot.compounds.len())
        .saturating_add(snapshot.sound_shifts.len());
    let mut events = Vec::with_capacity(capacity);

    for (word, info) in &snapshot.words {
        events.push(Event::Birth(living_birth(snapshot.generation, word, info)));
    }

    for record in &snapshot.extinct {
        events.push(Event::Birth(extinct_birth(record)));
        events.push(Event::Death(death(record)));
    }

    for (word, info) in &snapshot.compounds {
        events.push(Event::Compound(compound(word, info)));
    }

    events.extend(snapshot.sound_shifts.iter().map(shift).map(Event::Shift));

    sort_events(&mut events);

    tracing::debug!(
        generation = snapshot.generation,
        event_count = events.len(),
        "Reconstructed event timeline"
    );

    events
}

/// Stably sort events by generation, then by kind priority.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by_key(|event| (event.generation(), event.kind().priority()));
}

fn living_birth(generation: Generation, word: &str, info: &WordInfo) -> BirthEvent {
    BirthEvent {
        generation: info.born,
        word: word.to_owned(),
        meaning: info.meaning.clone(),
        category: info.category.clone(),
        fitness: Some(info.fitness),
        age: Some(generation.saturating_sub(info.born)),
        alive: true,
    }
}

fn extinct_birth(record: &ExtinctRecord) -> BirthEvent {
    BirthEvent {
        generation: record.born,
        word: record.word.clone(),
        meaning: record.meaning.clone(),
        category: record.category_or_unknown().to_owned(),
        fitness: None,
        age: None,
        alive: false,
    }
}

fn death(record: &ExtinctRecord) -> DeathEvent {
    let died = effective_death(record);
    let lifespan = died.saturating_sub(record.born);
    let uses = record.uses_or_zero();

    DeathEvent {
        generation: died,
        word: record.word.clone(),
        meaning: record.meaning.clone(),
        category: record.category_or_unknown().to_owned(),
        lifespan,
        uses,
        stillborn: is_stillborn(uses, lifespan),
    }
}

fn compound(word: &str, info: &CompoundInfo) -> CompoundEvent {
    CompoundEvent {
        generation: info.born,
        word: word.to_owned(),
        meaning: info.compound_meaning.clone(),
        parts: info.parts.clone(),
        part_meanings: info.meanings.clone(),
    }
}

fn shift(record: &ShiftRecord) -> ShiftEvent {
    ShiftEvent {
        generation: record.generation,
        from: record.from.clone(),
        to: record.to.clone(),
        meaning: record.meaning.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic, clippy::float_cmp)]

    use lexicon_types::EventKind;

    use super::*;

    fn word(born: Generation, meaning: &str, category: &str, fitness: f64, uses: u64) -> WordInfo {
        WordInfo {
            born,
            meaning: meaning.to_owned(),
            category: category.to_owned(),
            fitness,
            uses,
        }
    }

    fn extinct(word: &str, born: Generation, died: Option<Generation>, uses: Option<u64>) -> ExtinctRecord {
        ExtinctRecord {
            word: word.to_owned(),
            meaning: format!("{word}-meaning"),
            category: None,
            born,
            died,
            uses,
        }
    }

    fn example_snapshot() -> Snapshot {
        let mut snapshot = Snapshot {
            generation: 10,
            ..Snapshot::default()
        };
        snapshot
            .words
            .insert(String::from("ba"), word(2, "fire", "noun", 0.8, 5));
        snapshot.extinct.push(ExtinctRecord {
            word: String::from("zel"),
            meaning: String::from("void"),
            category: None,
            born: 1,
            died: Some(4),
            uses: Some(0),
        });
        snapshot
    }

    fn kinds_and_gens(events: &[Event]) -> Vec<(EventKind, Generation)> {
        events.iter().map(|e| (e.kind(), e.generation())).collect()
    }

    #[test]
    fn worked_example_orders_by_generation() {
        let events = reconstruct_events(&example_snapshot());
        assert_eq!(
            kinds_and_gens(&events),
            vec![
                (EventKind::Birth, 1),
                (EventKind::Birth, 2),
                (EventKind::Death, 4),
            ]
        );

        let Event::Birth(zel) = &events[0] else { panic!("expected birth") };
        assert_eq!(zel.word, "zel");
        assert!(!zel.alive);
        assert_eq!(zel.category, "unknown");

        let Event::Birth(ba) = &events[1] else { panic!("expected birth") };
        assert_eq!(ba.word, "ba");
        assert!(ba.alive);
        assert_eq!(ba.age, Some(8));
        assert_eq!(ba.fitness, Some(0.8));

        let Event::Death(death) = &events[2] else { panic!("expected death") };
        assert_eq!(death.word, "zel");
        assert_eq!(death.lifespan, 3);
        assert_eq!(death.uses, 0);
        assert!(death.stillborn);
    }

    #[test]
    fn missing_death_is_synthesized_one_generation_later() {
        let snapshot = Snapshot {
            generation: 20,
            extinct: vec![extinct("mu", 5, None, None)],
            ..Snapshot::default()
        };
        let events = reconstruct_events(&snapshot);
        assert_eq!(events.len(), 2);

        let Event::Death(death) = &events[1] else { panic!("expected death") };
        assert_eq!(death.generation, 6);
        assert_eq!(death.lifespan, 1);
        assert_eq!(death.uses, 0);
        assert!(death.stillborn);
    }

    #[test]
    fn same_generation_follows_kind_priority() {
        let mut snapshot = Snapshot {
            generation: 8,
            ..Snapshot::default()
        };
        snapshot
            .words
            .insert(String::from("ko"), word(3, "water", "noun", 0.5, 1));
        snapshot.compounds.insert(
            String::from("kota"),
            CompoundInfo {
                born: 3,
                compound_meaning: String::from("river"),
                parts: vec![String::from("ko"), String::from("ta")],
                meanings: vec![String::from("water"), String::from("path")],
            },
        );
        snapshot.sound_shifts.push(ShiftRecord {
            generation: 3,
            from: String::from("pa"),
            to: String::from("ba"),
            meaning: String::from("fire"),
        });
        snapshot.extinct.push(extinct("ti", 0, Some(3), Some(2)));

        let events = reconstruct_events(&snapshot);
        assert_eq!(
            kinds_and_gens(&events),
            vec![
                (EventKind::Birth, 0),
                (EventKind::Death, 3),
                (EventKind::Shift, 3),
                (EventKind::Compound, 3),
                (EventKind::Birth, 3),
            ]
        );
    }

    #[test]
    fn ties_keep_traversal_order() {
        let mut snapshot = Snapshot {
            generation: 4,
            ..Snapshot::default()
        };
        snapshot
            .words
            .insert(String::from("aa"), word(1, "one", "noun", 0.1, 1));
        snapshot
            .words
            .insert(String::from("bb"), word(1, "two", "verb", 0.2, 1));
        snapshot.extinct.push(extinct("cc", 1, Some(2), Some(1)));
        snapshot.extinct.push(extinct("dd", 1, Some(2), Some(1)));

        let events = reconstruct_events(&snapshot);
        let words: Vec<&str> = events
            .iter()
            .map(|event| match event {
                Event::Birth(e) => e.word.as_str(),
                Event::Death(e) => e.word.as_str(),
                Event::Compound(e) => e.word.as_str(),
                Event::Shift(e) => e.to.as_str(),
            })
            .collect();

        // Living births come before extinct births at the same generation.
        assert_eq!(words, vec!["aa", "bb", "cc", "dd", "cc", "dd"]);
    }

    #[test]
    fn ties_keep_provider_key_order() {
        let snapshot: Snapshot = serde_json::from_str(
            r#"{
                "generation": 5,
                "words": {
                    "zu": {"born": 1, "meaning": "sun", "category": "noun", "fitness": 0.5},
                    "ab": {"born": 1, "meaning": "moon", "category": "noun", "fitness": 0.5}
                },
                "compounds": {
                    "zuab": {"born": 2, "compound_meaning": "eclipse", "parts": ["zu", "ab"], "meanings": ["sun", "moon"]},
                    "abzu": {"born": 2, "compound_meaning": "dusk", "parts": ["ab", "zu"], "meanings": ["moon", "sun"]}
                }
            }"#,
        )
        .unwrap();

        let events = reconstruct_events(&snapshot);
        let words: Vec<&str> = events
            .iter()
            .filter_map(|event| match event {
                Event::Birth(e) => Some(e.word.as_str()),
                Event::Compound(e) => Some(e.word.as_str()),
                _ => None,
            })
            .collect();

        assert_eq!(words, vec!["zu", "ab", "zuab", "abzu"]);
    }

    #[test]
    fn every_record_yields_its_events() {
        let mut snapshot = example_snapshot();
        snapshot.extinct.push(extinct("zel", 6, Some(9), Some(3)));
        snapshot
            .words
            .insert(String::from("ru"), word(7, "air", "noun", 0.3, 0));

        let events = reconstruct_events(&snapshot);
        let births = events.iter().filter(|e| e.kind() == EventKind::Birth).count();
        let deaths = events.iter().filter(|e| e.kind() == EventKind::Death).count();
        let alive = events
            .iter()
            .filter(|e| matches!(e, Event::Birth(b) if b.alive))
            .count();

        assert_eq!(births, snapshot.words.len() + snapshot.extinct.len());
        assert_eq!(deaths, snapshot.extinct.len());
        assert_eq!(alive, snapshot.words.len());
    }

    #[test]
    fn output_is_sorted_and_repeatable() {
        let mut snapshot = example_snapshot();
        snapshot.extinct.push(extinct("qo", 0, None, Some(4)));
        snapshot.sound_shifts.push(ShiftRecord {
            generation: 1,
            from: String::from("ze"),
            to: String::from("se"),
            meaning: String::from("void"),
        });

        let first = reconstruct_events(&snapshot);
        let second = reconstruct_events(&snapshot);
        assert_eq!(first, second);

        let keys: Vec<(Generation, u8)> = first
            .iter()
            .map(|e| (e.generation(), e.kind().priority()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn stillborn_predicate_boundaries() {
        assert!(is_stillborn(0, 5));
        assert!(is_stillborn(0, 0));
        assert!(!is_stillborn(0, 6));
        assert!(!is_stillborn(1, 1));
    }

    #[test]
    fn negative_age_is_passed_through() {
        let mut snapshot = Snapshot {
            generation: 3,
            ..Snapshot::default()
        };
        snapshot
            .words
            .insert(String::from("fu"), word(5, "later", "noun", 0.4, 0));
        let events = reconstruct_events(&snapshot);
        let Event::Birth(birth) = &events[0] else { panic!("expected birth") };
        assert_eq!(birth.age, Some(-2));
    }
}
