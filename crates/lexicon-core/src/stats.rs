//! Statistics aggregation.
//!
//! Derives a [`StatisticsRecord`] directly from a [`Snapshot`], independently
//! of the event timeline. Two extinct-record policies coexist here and must
//! stay distinct:
//!
//! - lifespan figures (`avgLifespan`, `maxLifespan`) only consider records
//!   with a recorded death;
//! - the stillborn count uses the same synthesized `born + 1` death as the
//!   reconstructor when none is recorded.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use lexicon_types::{Generation, LivingWord, Snapshot, StatisticsRecord};

use crate::reconstruct::{effective_death, is_stillborn};

/// Aggregate summary statistics over a snapshot.
///
/// Pure and deterministic. Never fails: an empty snapshot yields zeroed
/// figures and `None` for `elder` and `fittest`.
pub fn aggregate(snapshot: &Snapshot) -> StatisticsRecord {
    let living = living_words(snapshot);

    let mut categories: BTreeMap<String, u64> = BTreeMap::new();
    for info in snapshot.words.values() {
        let count = categories.entry(info.category.clone()).or_insert(0);
        *count = count.saturating_add(1);
    }

    let lifespans: Vec<Generation> = snapshot
        .extinct
        .iter()
        .filter_map(|record| record.died.map(|died| died.saturating_sub(record.born)))
        .collect();

    let stillborn_count = snapshot
        .extinct
        .iter()
        .filter(|record| {
            let lifespan = effective_death(record).saturating_sub(record.born);
            is_stillborn(record.uses_or_zero(), lifespan)
        })
        .count();

    let source = snapshot.stats.unwrap_or_default();
    let total_born = source.total_generated.unwrap_or(0);
    let total_dead = source.total_extinct.unwrap_or(0);
    let total_shifts = source.total_shifts.unwrap_or(0);

    let elder = oldest(&living).cloned();
    let fittest = fittest(&living).cloned();

    let mut living_words = living;
    living_words.sort_by(|a, b| {
        b.fitness
            .partial_cmp(&a.fitness)
            .unwrap_or(Ordering::Equal)
    });

    StatisticsRecord {
        population: to_u64(snapshot.words.len()),
        categories,
        avg_lifespan: mean_lifespan(&lifespans),
        max_lifespan: lifespans.iter().copied().max().unwrap_or(0),
        stillborn_count: to_u64(stillborn_count),
        total_born,
        total_dead,
        total_shifts,
        mortality_rate: mortality_rate(total_born, total_dead),
        elder,
        fittest,
        living_words,
    }
}

/// Round to one decimal place, halves away from zero.
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `dead / born` as a percentage rounded to one decimal, or 0 when nothing
/// was ever born.
#[allow(clippy::cast_precision_loss)]
pub fn mortality_rate(total_born: u64, total_dead: u64) -> f64 {
    if total_born == 0 {
        return 0.0;
    }
    round_one_decimal(total_dead as f64 / total_born as f64 * 100.0)
}

#[allow(clippy::cast_precision_loss)]
fn mean_lifespan(lifespans: &[Generation]) -> f64 {
    if lifespans.is_empty() {
        return 0.0;
    }
    let sum = lifespans
        .iter()
        .fold(0_i64, |acc, lifespan| acc.saturating_add(*lifespan));
    round_one_decimal(sum as f64 / lifespans.len() as f64)
}

fn living_words(snapshot: &Snapshot) -> Vec<LivingWord> {
    snapshot
        .words
        .iter()
        .map(|(word, info)| LivingWord {
            word: word.clone(),
            meaning: info.meaning.clone(),
            category: info.category.clone(),
            age: snapshot.generation.saturating_sub(info.born),
            fitness: info.fitness,
            uses: info.uses,
        })
        .collect()
}

/// First word with the strictly greatest age.
fn oldest(words: &[LivingWord]) -> Option<&LivingWord> {
    let mut best: Option<&LivingWord> = None;
    for candidate in words {
        if best.is_none_or(|current| candidate.age > current.age) {
            best = Some(candidate);
        }
    }
    best
}

/// First word with the strictly greatest fitness. Any living word
/// qualifies, whatever its fitness; the result is `None` only for an empty
/// population.
fn fittest(words: &[LivingWord]) -> Option<&LivingWord> {
    let mut best: Option<&LivingWord> = None;
    for candidate in words {
        if best.is_none_or(|current| candidate.fitness > current.fitness) {
            best = Some(candidate);
        }
    }
    best
}

fn to_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}
