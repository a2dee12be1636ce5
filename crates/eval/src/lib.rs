// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video Poker hand classifier and draw odds estimator.
//!
//! The classifier maps a 5 cards hand to the best paying Jacks-or-Better
//! category:
//!
//! ```
//! # use vpoker_eval::*;
//! let hand = [
//!     Card::new(Rank::Ace, Suit::Hearts),
//!     Card::new(Rank::Ten, Suit::Hearts),
//!     Card::new(Rank::Jack, Suit::Hearts),
//!     Card::new(Rank::Queen, Suit::Hearts),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! assert_eq!(classify(&hand), Some(HandCategory::RoyalFlush));
//! ```
//!
//! The estimator enumerates every possible draw for the cards a player
//! holds and returns the odds of landing in each category:
//!
//! ```
//! # use vpoker_eval::*;
//! let mut deck = Deck::shuffled(&mut rand::rng());
//! let hand = (0..5).map(|_| deck.draw().unwrap()).collect::<Vec<_>>();
//!
//! // Hold the first two cards and draw three.
//! let odds = estimate(deck.cards(), &hand[0..2]);
//! println!("{}", odds.percent(HandCategory::FullHouse));
//! ```
//!
//! The **`parallel`** feature enables [par_estimate] that shards the draws
//! enumeration across a given number of tasks.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod classify;
pub use classify::{HAND_SIZE, HandCategory, PAYTABLE, classify};

mod combo;
pub use combo::{combinations, for_each_combination};

#[cfg(feature = "parallel")]
pub use combo::parallel::par_for_each_combination;

mod estimate;
pub use estimate::{ProbabilityVector, estimate};

#[cfg(feature = "parallel")]
pub use estimate::par_estimate;

// Reexport cards types.
pub use vpoker_cards::{Card, Deck, Rank, Suit};
