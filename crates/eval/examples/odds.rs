// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Deals a hand and prints the draw odds for each number of held cards:
//
// ```bash
// $ cargo r --release --example odds
// Hand: 7D QS 2H QD 9C
//
// Category             Held 1       Held 2       Held 3       Held 4
// Royal Flush          0.001%       0.000%       0.000%       0.000%
// ...
// ```
use std::time::Instant;

use vpoker_eval::{Deck, HandCategory, estimate};

fn main() {
    let mut deck = Deck::shuffled(&mut rand::rng());
    let hand = (0..5)
        .map(|_| deck.draw().unwrap())
        .collect::<Vec<_>>();

    let cards = hand
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("Hand: {cards}\n");

    let now = Instant::now();

    // Odds when holding the first k cards of the hand.
    let odds = (1..5)
        .map(|k| estimate(deck.cards(), &hand[..k]))
        .collect::<Vec<_>>();

    print!("{:<20}", "Category");
    for k in 1..5 {
        print!(" {:>12}", format!("Held {k}"));
    }
    println!();

    for category in HandCategory::categories() {
        print!("{category:<20}");
        for o in &odds {
            print!(" {:>12}", o.percent(category));
        }
        println!();
    }

    println!("\nElapsed: {:.3}s", now.elapsed().as_secs_f64());
}
