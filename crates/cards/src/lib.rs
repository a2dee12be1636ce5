// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video Poker cards types.
//!
//! This crate defines types to create cards:
//!
//! ```
//! # use vpoker_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = Card::new(Rank::King, Suit::Diamonds);
//! ```
//!
//! and a [Deck] type that deals cards from a shuffled 52 cards deck:
//!
//! ```
//! # use vpoker_cards::Deck;
//! let mut deck = Deck::shuffled(&mut rand::rng());
//! let mut hand = Vec::with_capacity(5);
//! for _ in 0..5 {
//!     hand.push(deck.draw().unwrap());
//! }
//! assert_eq!(deck.count(), 47);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, DeckError, Rank, Suit};
