// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Jacks-or-Better hand classification.
use serde::{Deserialize, Serialize};
use std::fmt;

use vpoker_cards::{Card, Suit};

/// The number of cards in a hand.
pub const HAND_SIZE: usize = 5;

/// The paying hand categories in precedence order.
///
/// The declaration order is significant, it defines both the precedence used
/// by [classify] when a hand satisfies more than one predicate and the rows
/// layout of the paytable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// Ten to ace of the same suit.
    RoyalFlush,
    /// Five consecutive ranks of the same suit.
    StraightFlush,
    /// Four cards of the same rank.
    FourOfAKind,
    /// Three cards of one rank and a pair of another.
    FullHouse,
    /// Five cards of the same suit.
    Flush,
    /// Five consecutive ranks, or the ten to ace run.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Two pairs of different ranks.
    TwoPair,
    /// A pair of jacks, queens, kings, or aces.
    JacksOrBetter,
}

/// The fixed paytable, one payout multiplier per category in precedence order.
pub const PAYTABLE: [(HandCategory, u32); 9] = [
    (HandCategory::RoyalFlush, 800),
    (HandCategory::StraightFlush, 50),
    (HandCategory::FourOfAKind, 25),
    (HandCategory::FullHouse, 9),
    (HandCategory::Flush, 6),
    (HandCategory::Straight, 4),
    (HandCategory::ThreeOfAKind, 3),
    (HandCategory::TwoPair, 2),
    (HandCategory::JacksOrBetter, 1),
];

impl HandCategory {
    /// The number of categories.
    pub const COUNT: usize = PAYTABLE.len();

    /// Returns all categories in precedence order.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        PAYTABLE.iter().map(|(c, _)| *c)
    }

    /// This category position in the paytable.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// This category payout multiplier.
    pub fn payout(&self) -> u32 {
        PAYTABLE[self.index()].1
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandCategory::RoyalFlush => "Royal Flush",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::JacksOrBetter => "Jacks or Better",
        };

        write!(f, "{name}")
    }
}

/// Classifies a 5 cards hand to its best paying category.
///
/// Returns `None` for a hand that pays nothing. The result does not depend
/// on the order of the cards.
///
/// Panics if `cards` does not have exactly [HAND_SIZE] cards.
pub fn classify(cards: &[Card]) -> Option<HandCategory> {
    assert!(
        cards.len() == HAND_SIZE,
        "classify requires {HAND_SIZE} cards, got {}",
        cards.len()
    );

    let mut ranks = [0u8; HAND_SIZE];
    let mut suits = [Suit::Hearts; HAND_SIZE];
    for (pos, card) in cards.iter().enumerate() {
        ranks[pos] = card.rank().value();
        suits[pos] = card.suit();
    }

    ranks.sort_unstable();

    HandCategory::categories().find(|category| match category {
        HandCategory::RoyalFlush => is_flush(&suits) && is_ten_to_ace(&ranks),
        HandCategory::StraightFlush => is_flush(&suits) && is_straight(&ranks),
        HandCategory::FourOfAKind => is_quads(&ranks),
        HandCategory::FullHouse => is_full_house(&ranks),
        HandCategory::Flush => is_flush(&suits),
        HandCategory::Straight => is_straight(&ranks),
        HandCategory::ThreeOfAKind => is_trips(&ranks),
        HandCategory::TwoPair => is_two_pair(&ranks),
        HandCategory::JacksOrBetter => is_jacks_or_better(&ranks),
    })
}

/// Counts the cards with the given rank.
fn count(ranks: &[u8], rank: u8) -> usize {
    ranks.iter().filter(|&&r| r == rank).count()
}

/// Counts the distinct ranks, `ranks` must be sorted.
fn distinct(ranks: &[u8]) -> usize {
    1 + ranks.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Checks for the ace high run, `ranks` must be sorted.
fn is_ten_to_ace(ranks: &[u8; HAND_SIZE]) -> bool {
    ranks == &[1, 10, 11, 12, 13]
}

fn is_flush(suits: &[Suit; HAND_SIZE]) -> bool {
    suits.iter().all(|s| s == &suits[0])
}

/// Checks for five consecutive ranks or the ten to ace run.
///
/// The ace only plays high, a [1, 2, 3, 4, 5] run is not a straight.
fn is_straight(ranks: &[u8; HAND_SIZE]) -> bool {
    is_ten_to_ace(ranks) || ranks.windows(2).all(|w| w[1] == w[0] + 1)
}

fn is_quads(ranks: &[u8; HAND_SIZE]) -> bool {
    ranks.iter().any(|&r| count(ranks, r) == 4)
}

fn is_full_house(ranks: &[u8; HAND_SIZE]) -> bool {
    distinct(ranks) == 2 && ranks.iter().any(|&r| count(ranks, r) == 3)
}

fn is_trips(ranks: &[u8; HAND_SIZE]) -> bool {
    distinct(ranks) == 3 && ranks.iter().any(|&r| count(ranks, r) == 3)
}

fn is_two_pair(ranks: &[u8; HAND_SIZE]) -> bool {
    distinct(ranks) == 3 && ranks.iter().any(|&r| count(ranks, r) == 2)
}

/// Checks for a paying pair.
///
/// The lowest paired rank must be jacks or better, a pair of tens or less
/// pays nothing.
fn is_jacks_or_better(ranks: &[u8; HAND_SIZE]) -> bool {
    ranks
        .iter()
        .find(|&&r| count(ranks, r) == 2)
        .is_some_and(|&r| matches!(r, 1 | 11 | 12 | 13))
}
