// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Draw odds estimation.
use serde::{Deserialize, Serialize};

use vpoker_cards::Card;

use crate::classify::{HAND_SIZE, HandCategory, classify};
use crate::combo::for_each_combination;

/// The odds of landing in each hand category after the draw.
///
/// Cells align with the [PAYTABLE](crate::PAYTABLE) order. Before any card
/// is held the odds are undefined and every cell renders as `-`, otherwise
/// each cell holds the probability for its category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityVector {
    cells: [Option<f64>; HandCategory::COUNT],
}

impl ProbabilityVector {
    /// The cell rendering for undefined odds.
    pub const UNDEFINED: &'static str = "-";

    /// The odds before any hold decision.
    fn undefined() -> Self {
        Self {
            cells: [None; HandCategory::COUNT],
        }
    }

    /// The probability for a category, `None` when no cards are held.
    pub fn probability(&self, category: HandCategory) -> Option<f64> {
        self.cells[category.index()]
    }

    /// Renders the cell for a category as a percentage with 3 decimals,
    /// `-` when no cards are held.
    pub fn percent(&self, category: HandCategory) -> String {
        match self.cells[category.index()] {
            Some(p) => format!("{:.3}%", p * 100.0),
            None => Self::UNDEFINED.to_string(),
        }
    }

    fn from_tallies(tallies: &[u64; HandCategory::COUNT], total: u64) -> Self {
        let mut cells = [Some(0.0); HandCategory::COUNT];
        for (cell, tally) in cells.iter_mut().zip(tallies) {
            *cell = Some(*tally as f64 / total as f64);
        }
        Self { cells }
    }
}

/// Estimates the per category odds for a player hold.
///
/// Enumerates every possible draw completing `held` to a 5 cards hand with
/// cards from `remaining`, classifies each candidate hand, and returns the
/// per category tallies over the number of draws. With no held cards the
/// odds are undefined, with 5 held cards the hand category has probability
/// one.
///
/// Panics if more than [HAND_SIZE] cards are held.
pub fn estimate(remaining: &[Card], held: &[Card]) -> ProbabilityVector {
    assert!(
        held.len() <= HAND_SIZE,
        "cannot hold more than {HAND_SIZE} cards"
    );

    if held.is_empty() {
        return ProbabilityVector::undefined();
    }

    if held.len() == HAND_SIZE {
        let mut cells = [Some(0.0); HandCategory::COUNT];
        if let Some(category) = classify(held) {
            cells[category.index()] = Some(1.0);
        }
        return ProbabilityVector { cells };
    }

    let draws = HAND_SIZE - held.len();
    let mut tallies = [0u64; HandCategory::COUNT];
    let mut total = 0u64;

    let mut hand = Vec::with_capacity(HAND_SIZE);
    hand.extend_from_slice(held);

    for_each_combination(remaining, draws, |drawn| {
        hand.truncate(held.len());
        hand.extend_from_slice(drawn);

        if let Some(category) = classify(&hand) {
            tallies[category.index()] += 1;
        }
        total += 1;
    });

    ProbabilityVector::from_tallies(&tallies, total)
}

/// Parallel odds estimation.
///
/// Same results as [estimate] with the draws enumeration sharded across
/// `num_tasks` tasks, each task accumulates its own tallies summed once all
/// tasks complete.
#[cfg(feature = "parallel")]
pub fn par_estimate(num_tasks: usize, remaining: &[Card], held: &[Card]) -> ProbabilityVector {
    use std::sync::atomic::{AtomicU64, Ordering};

    use crate::combo::parallel::par_for_each_combination;

    assert!(
        held.len() <= HAND_SIZE,
        "cannot hold more than {HAND_SIZE} cards"
    );

    if held.is_empty() || held.len() == HAND_SIZE {
        return estimate(remaining, held);
    }

    let draws = HAND_SIZE - held.len();

    // Per task tallies to avoid contention.
    let task_tallies = (0..num_tasks)
        .map(|_| [const { AtomicU64::new(0) }; HandCategory::COUNT])
        .collect::<Vec<_>>();
    let total = AtomicU64::new(0);

    par_for_each_combination(remaining, num_tasks, draws, |task_id, drawn| {
        let mut hand = [held[0]; HAND_SIZE];
        hand[..held.len()].copy_from_slice(held);
        hand[held.len()..].copy_from_slice(drawn);

        if let Some(category) = classify(&hand) {
            task_tallies[task_id][category.index()].fetch_add(1, Ordering::Relaxed);
        }
        total.fetch_add(1, Ordering::Relaxed);
    });

    let mut tallies = [0u64; HandCategory::COUNT];
    for task in &task_tallies {
        for (tally, count) in tallies.iter_mut().zip(task) {
            *tally += count.load(Ordering::Relaxed);
        }
    }

    ProbabilityVector::from_tallies(&tallies, total.load(Ordering::Relaxed))
}
