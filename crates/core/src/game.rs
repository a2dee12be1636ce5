// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game state transitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use vpoker_cards::{Card, Deck, DeckError};
use vpoker_eval::{HAND_SIZE, HandCategory, ProbabilityVector, classify, estimate};

use crate::credits::Credits;

/// The maximum bet per hand.
pub const MAX_BET: u32 = 5;

/// Game errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Raising a bet already at [MAX_BET].
    #[error("the bet is already at the maximum")]
    MaxBet,
    /// Betting with an empty balance.
    #[error("no credits left to bet")]
    NoCredits,
    /// Dealing without a bet.
    #[error("no bet placed")]
    NoBet,
    /// Dealing twice in the same hand.
    #[error("cards already dealt")]
    AlreadyDealt,
    /// Hold or draw before the deal.
    #[error("no cards dealt")]
    NotDealt,
    /// Holding a position outside the hand.
    #[error("hold position {0} is out of range")]
    InvalidHold(usize),
    /// Deck errors.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// The game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for bets, no live hand.
    Betting,
    /// Cards dealt, holds open until the draw.
    Draw,
}

/// The outcome of a settled hand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// The final hand after the draw.
    pub hand: Vec<Card>,
    /// The winning category if the hand pays.
    pub category: Option<HandCategory>,
    /// The credits won, bet times the category multiplier.
    pub payout: Credits,
}

/// A video poker session.
///
/// All game state lives in this struct, transitions are fallible methods
/// that reject calls out of phase so hosts cannot corrupt a hand. The one
/// transition open in both phases is betting, which folds a live hand.
#[derive(Debug)]
pub struct Game {
    credits: Credits,
    bet: u32,
    hand_num: u32,
    phase: Phase,
    deck: Deck,
    hand: Vec<Card>,
    held: [bool; HAND_SIZE],
}

impl Game {
    /// Creates a game with a starting balance.
    pub fn new(credits: Credits) -> Self {
        Self {
            credits,
            bet: 0,
            hand_num: 0,
            phase: Phase::Betting,
            deck: Deck::default(),
            hand: Vec::with_capacity(HAND_SIZE),
            held: [false; HAND_SIZE],
        }
    }

    /// Moves one credit to the bet.
    ///
    /// Betting while cards are dealt abandons the live hand, the stake
    /// stays on the table and counts towards the new bet.
    pub fn bet_one(&mut self) -> Result<(), GameError> {
        self.abandon_if_dealt();

        if self.bet == MAX_BET {
            Err(GameError::MaxBet)
        } else if self.credits == Credits::ZERO {
            Err(GameError::NoCredits)
        } else {
            self.bet += 1;
            self.credits -= Credits::new(1);
            Ok(())
        }
    }

    /// Raises the bet to [MAX_BET], or to the whole balance if smaller.
    ///
    /// Like [bet_one](Self::bet_one) this abandons a live hand, the stake
    /// stays on the table and counts towards the new bet.
    pub fn bet_max(&mut self) -> Result<(), GameError> {
        self.abandon_if_dealt();

        let total = self.bet + self.credits.amount();
        let bet = total.min(MAX_BET);
        if bet == self.bet {
            if self.credits == Credits::ZERO {
                Err(GameError::NoCredits)
            } else {
                Err(GameError::MaxBet)
            }
        } else {
            self.bet = bet;
            self.credits = Credits::new(total - bet);
            Ok(())
        }
    }

    /// Deals a new hand from a fresh shuffled deck.
    pub fn deal<R: Rng>(&mut self, rng: &mut R) -> Result<(), GameError> {
        self.check_phase(Phase::Betting, GameError::AlreadyDealt)?;

        if self.bet == 0 {
            return Err(GameError::NoBet);
        }

        self.deck = Deck::shuffled(rng);
        self.hand.clear();
        for _ in 0..HAND_SIZE {
            self.hand.push(self.deck.draw()?);
        }

        self.held = [false; HAND_SIZE];
        self.hand_num += 1;
        self.phase = Phase::Draw;

        log::debug!(
            "hand {} dealt: {:?} bet {}",
            self.hand_num,
            self.hand,
            self.bet
        );

        Ok(())
    }

    /// Toggles the hold flag for a hand position, returns the new flag.
    pub fn toggle_hold(&mut self, pos: usize) -> Result<bool, GameError> {
        self.check_phase(Phase::Draw, GameError::NotDealt)?;

        if pos >= HAND_SIZE {
            return Err(GameError::InvalidHold(pos));
        }

        self.held[pos] = !self.held[pos];
        Ok(self.held[pos])
    }

    /// The draw odds for the current holds.
    pub fn odds(&self) -> Result<ProbabilityVector, GameError> {
        self.check_phase(Phase::Draw, GameError::NotDealt)?;

        let held = self
            .hand
            .iter()
            .zip(&self.held)
            .filter(|&(_, &held)| held)
            .map(|(card, _)| *card)
            .collect::<Vec<_>>();

        Ok(estimate(self.deck.cards(), &held))
    }

    /// Replaces the cards not held, classifies the hand, and settles the bet.
    ///
    /// A winning hand pays the bet times the category multiplier, the hand
    /// stays visible until the next deal.
    pub fn draw_and_settle(&mut self) -> Result<Settlement, GameError> {
        self.check_phase(Phase::Draw, GameError::NotDealt)?;

        for pos in 0..HAND_SIZE {
            if !self.held[pos] {
                self.hand[pos] = self.deck.draw()?;
            }
        }

        let category = classify(&self.hand);
        let payout = category
            .map(|c| Credits::new(self.bet * c.payout()))
            .unwrap_or(Credits::ZERO);
        self.credits += payout;

        log::info!(
            "hand {} settled: {:?} {} payout {payout}",
            self.hand_num,
            self.hand,
            category.map(|c| c.to_string()).unwrap_or_default(),
        );

        self.bet = 0;
        self.phase = Phase::Betting;

        Ok(Settlement {
            hand: self.hand.clone(),
            category,
            payout,
        })
    }

    /// Checks if the session is over, no credits left and nothing staked.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Betting && self.bet == 0 && self.credits == Credits::ZERO
    }

    /// The current balance.
    pub fn credits(&self) -> Credits {
        self.credits
    }

    /// The current bet.
    pub fn bet(&self) -> u32 {
        self.bet
    }

    /// The game phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The number of hands dealt in this session.
    pub fn hand_num(&self) -> u32 {
        self.hand_num
    }

    /// The dealt hand, empty before the first deal.
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// The hold flags by hand position.
    pub fn held(&self) -> &[bool; HAND_SIZE] {
        &self.held
    }

    fn check_phase(&self, phase: Phase, err: GameError) -> Result<(), GameError> {
        if self.phase == phase { Ok(()) } else { Err(err) }
    }

    /// Discards a live hand without settling it, the next deal starts the
    /// following hand number.
    fn abandon_if_dealt(&mut self) {
        if self.phase == Phase::Draw {
            log::debug!("hand {} abandoned: {:?}", self.hand_num, self.hand);
            self.hand.clear();
            self.held = [false; HAND_SIZE];
            self.phase = Phase::Betting;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    #[test]
    fn betting_flow() {
        let mut game = Game::new(Credits::new(100));

        game.bet_one().unwrap();
        assert_eq!(game.bet(), 1);
        assert_eq!(game.credits(), Credits::new(99));

        game.bet_max().unwrap();
        assert_eq!(game.bet(), MAX_BET);
        assert_eq!(game.credits(), Credits::new(95));

        assert_eq!(game.bet_one(), Err(GameError::MaxBet));
        assert_eq!(game.bet_max(), Err(GameError::MaxBet));
    }

    #[test]
    fn bet_max_with_short_balance() {
        let mut game = Game::new(Credits::new(3));

        game.bet_max().unwrap();
        assert_eq!(game.bet(), 3);
        assert_eq!(game.credits(), Credits::ZERO);

        assert_eq!(game.bet_one(), Err(GameError::NoCredits));
        assert_eq!(game.bet_max(), Err(GameError::NoCredits));
    }

    #[test]
    fn deal_requires_a_bet() {
        let mut game = Game::new(Credits::new(100));
        assert_eq!(game.deal(&mut rng()), Err(GameError::NoBet));
    }

    #[test]
    fn deal_and_hold() {
        let mut game = Game::new(Credits::new(100));
        game.bet_max().unwrap();
        game.deal(&mut rng()).unwrap();

        assert_eq!(game.phase(), Phase::Draw);
        assert_eq!(game.hand().len(), HAND_SIZE);
        assert_eq!(game.hand_num(), 1);

        assert!(game.toggle_hold(0).unwrap());
        assert!(game.toggle_hold(4).unwrap());
        assert!(!game.toggle_hold(0).unwrap());
        assert_eq!(game.held(), &[false, false, false, false, true]);

        assert_eq!(game.toggle_hold(5), Err(GameError::InvalidHold(5)));
        assert_eq!(game.deal(&mut rng()), Err(GameError::AlreadyDealt));
    }

    #[test]
    fn betting_abandons_a_live_hand() {
        let mut game = Game::new(Credits::new(100));
        game.bet_one().unwrap();
        game.deal(&mut rng()).unwrap();
        game.toggle_hold(0).unwrap();
        assert_eq!(game.hand_num(), 1);

        // Betting mid hand discards it, the staked credit stays on the
        // table and the new credit raises the bet to 2.
        game.bet_one().unwrap();
        assert_eq!(game.phase(), Phase::Betting);
        assert!(game.hand().is_empty());
        assert_eq!(game.held(), &[false; HAND_SIZE]);
        assert_eq!(game.bet(), 2);
        assert_eq!(game.credits(), Credits::new(98));

        game.deal(&mut rng()).unwrap();
        assert_eq!(game.hand_num(), 2);

        // Bet max folds the hand too and tops the stake up to the cap.
        game.bet_max().unwrap();
        assert_eq!(game.phase(), Phase::Betting);
        assert_eq!(game.bet(), MAX_BET);
        assert_eq!(game.credits(), Credits::new(95));
    }

    #[test]
    fn odds_follow_holds() {
        let mut game = Game::new(Credits::new(100));
        game.bet_max().unwrap();
        game.deal(&mut rng()).unwrap();

        // Undefined before any hold.
        let odds = game.odds().unwrap();
        for category in HandCategory::categories() {
            assert_eq!(odds.probability(category), None);
        }

        // Holding the whole hand pins the classification.
        for pos in 0..HAND_SIZE {
            game.toggle_hold(pos).unwrap();
        }

        let odds = game.odds().unwrap();
        let sum = HandCategory::categories()
            .filter_map(|c| odds.probability(c))
            .sum::<f64>();
        let category = classify(game.hand());
        assert_eq!(sum, if category.is_some() { 1.0 } else { 0.0 });
    }

    #[test]
    fn draw_and_settle_pays_the_paytable() {
        let mut game = Game::new(Credits::new(100));
        game.bet_max().unwrap();
        game.deal(&mut rng()).unwrap();

        let credits_before = game.credits();
        let settlement = game.draw_and_settle().unwrap();

        assert_eq!(settlement.hand.len(), HAND_SIZE);
        assert_eq!(settlement.category, classify(&settlement.hand));

        let expected = settlement
            .category
            .map(|c| Credits::new(MAX_BET * c.payout()))
            .unwrap_or(Credits::ZERO);
        assert_eq!(settlement.payout, expected);
        assert_eq!(game.credits(), credits_before + expected);

        // Back to betting with the bet cleared.
        assert_eq!(game.phase(), Phase::Betting);
        assert_eq!(game.bet(), 0);
        assert_eq!(game.draw_and_settle(), Err(GameError::NotDealt));
    }

    #[test]
    fn held_cards_survive_the_draw() {
        let mut game = Game::new(Credits::new(100));
        game.bet_max().unwrap();
        game.deal(&mut rng()).unwrap();

        let dealt = game.hand().to_vec();
        game.toggle_hold(1).unwrap();
        game.toggle_hold(3).unwrap();

        let settlement = game.draw_and_settle().unwrap();
        assert_eq!(settlement.hand[1], dealt[1]);
        assert_eq!(settlement.hand[3], dealt[3]);
    }

    #[test]
    fn game_over() {
        let game = Game::new(Credits::ZERO);
        assert!(game.is_over());

        let mut game = Game::new(Credits::new(1));
        assert!(!game.is_over());
        game.bet_one().unwrap();

        // Credits are staked, the session is still live.
        assert!(!game.is_over());
    }

    #[test]
    fn settle_errors_do_not_corrupt_state() {
        let mut game = Game::new(Credits::new(10));
        assert_eq!(game.toggle_hold(0), Err(GameError::NotDealt));
        assert_eq!(game.draw_and_settle(), Err(GameError::NotDealt));
        assert!(game.odds().is_err());
        assert_eq!(game.credits(), Credits::new(10));
    }
}
