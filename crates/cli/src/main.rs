// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Video Poker terminal game.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use rand::prelude::*;

use vpoker_core::{Credits, Game};

pub mod terminal;

#[derive(Debug, Parser)]
struct Cli {
    /// The starting credits balance.
    #[clap(long, short, default_value_t = 100)]
    credits: u32,
    /// Seed for a reproducible session.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let game = Game::new(Credits::new(cli.credits));
    terminal::run(game, rng)
}
