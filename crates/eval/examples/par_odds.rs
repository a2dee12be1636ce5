// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Compares serial and parallel odds estimation for a one card hold, the
// worst interactive case with C(47, 4) draws:
//
// ```bash
// $ cargo r --release --features=parallel --example par_odds
// ```
use std::time::Instant;

use vpoker_eval::{Deck, HandCategory, estimate, par_estimate};

fn main() {
    const NUM_TASKS: usize = 4;

    let mut deck = Deck::shuffled(&mut rand::rng());
    let hand = (0..5)
        .map(|_| deck.draw().unwrap())
        .collect::<Vec<_>>();
    println!("Held: {}\n", hand[0]);

    let now = Instant::now();
    let serial = estimate(deck.cards(), &hand[..1]);
    let serial_elapsed = now.elapsed().as_secs_f64();

    let now = Instant::now();
    let parallel = par_estimate(NUM_TASKS, deck.cards(), &hand[..1]);
    let par_elapsed = now.elapsed().as_secs_f64();

    assert_eq!(serial, parallel);

    for category in HandCategory::categories() {
        println!("{category:<20} {:>12}", serial.percent(category));
    }

    println!("\nSerial:   {serial_elapsed:.3}s");
    println!("Parallel: {par_elapsed:.3}s ({NUM_TASKS} tasks)");
}
