// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video Poker game state and settlement.
//!
//! The [Game] type holds the whole state of a session, hosts drive it
//! through fallible transitions and render the state between calls:
//!
//! ```
//! # use vpoker_core::{Credits, Game};
//! let mut rng = rand::rng();
//! let mut game = Game::new(Credits::new(100));
//!
//! game.bet_max()?;
//! game.deal(&mut rng)?;
//! game.toggle_hold(0)?;
//! game.toggle_hold(3)?;
//!
//! let settlement = game.draw_and_settle()?;
//! match settlement.category {
//!     Some(category) => println!("{category}! won {}", settlement.payout),
//!     None => println!("Nothing at all!"),
//! }
//! # Ok::<(), vpoker_core::GameError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod credits;
pub use credits::Credits;

mod game;
pub use game::{Game, GameError, MAX_BET, Phase, Settlement};

// Reexport cards and evaluator types.
pub use vpoker_cards::{Card, Color, Deck, DeckError, Rank, Suit};
pub use vpoker_eval::{HAND_SIZE, HandCategory, PAYTABLE, ProbabilityVector, classify, estimate};
