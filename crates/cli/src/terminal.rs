// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Terminal I/O.
use anyhow::Result;
use crossterm::style::{StyledContent, Stylize};
use rand::Rng;
use std::io::{self, BufRead, Write};

use vpoker_core::{Card, Color, Game, HandCategory, PAYTABLE, Phase, classify};

/// Runs the terminal game loop.
pub fn run<R: Rng>(mut game: Game, mut rng: R) -> Result<()> {
    print_paytable();
    println!("Enter a bet to play, type help for the commands list.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_status(&game);
        prompt(&game)?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        let mut words = line.split_whitespace();
        let outcome = match words.next() {
            Some("bet") | Some("b") => game.bet_one().err(),
            Some("max") | Some("m") => game.bet_max().err(),
            Some("deal") | Some("d") => match game.deal(&mut rng) {
                Ok(()) => {
                    // Show the category the dealt hand already makes.
                    if let Some(category) = classify(game.hand()) {
                        println!("Dealt a {category}, select cards to hold");
                    } else {
                        println!("Select cards to hold");
                    }
                    None
                }
                Err(e) => Some(e),
            },
            Some("hold") | Some("h") => {
                let mut err = None;
                for word in words {
                    match word.parse::<usize>() {
                        // Positions are 1 based at the prompt.
                        Ok(pos) if pos >= 1 => err = game.toggle_hold(pos - 1).err(),
                        _ => println!("Invalid position {word}"),
                    }

                    if err.is_some() {
                        break;
                    }
                }
                err
            }
            Some("odds") | Some("o") => match game.odds() {
                Ok(odds) => {
                    for category in HandCategory::categories() {
                        println!("{category:<16} {:>9}", odds.percent(category));
                    }
                    None
                }
                Err(e) => Some(e),
            },
            Some("draw") | Some("w") => match game.draw_and_settle() {
                Ok(settlement) => {
                    print_hand(&settlement.hand, &[false; 5]);
                    match settlement.category {
                        Some(category) => {
                            println!("{category}! You win {} credits", settlement.payout)
                        }
                        None => println!("Nothing at all!"),
                    }
                    None
                }
                Err(e) => Some(e),
            },
            Some("table") | Some("t") => {
                print_paytable();
                None
            }
            Some("help") => {
                print_help();
                None
            }
            Some("quit") | Some("q") => break,
            Some(cmd) => {
                println!("Unknown command {cmd}, type help for the commands list");
                None
            }
            None => None,
        };

        if let Some(err) = outcome {
            println!("{err}");
        }

        if game.is_over() {
            println!("GAME OVER");
            break;
        }
    }

    Ok(())
}

fn prompt(game: &Game) -> Result<()> {
    let commands = match game.phase() {
        Phase::Betting => "bet, max, deal, table, quit",
        Phase::Draw => "hold <pos..>, odds, draw, quit",
    };

    print!("[{commands}]> ");
    io::stdout().flush()?;
    Ok(())
}

fn print_status(game: &Game) {
    println!();
    if !game.hand().is_empty() && game.phase() == Phase::Draw {
        print_hand(game.hand(), game.held());
    }

    println!("CREDITS {}  BET {}", game.credits(), game.bet());
}

fn print_hand(hand: &[Card], held: &[bool; 5]) {
    for (card, &held) in hand.iter().zip(held) {
        if held {
            print!("[{}] ", styled(card));
        } else {
            print!(" {}  ", styled(card));
        }
    }
    println!();
}

fn print_paytable() {
    println!("{:<16} {:>6} {:>6} {:>6} {:>6} {:>6}", "", 1, 2, 3, 4, 5);
    for (category, payout) in PAYTABLE {
        print!("{:<16}", category.to_string().to_uppercase());
        for bet in 1..=5 {
            print!(" {:>6}", payout * bet);
        }
        println!();
    }
}

fn print_help() {
    println!("bet   (b)         move one credit to the bet");
    println!("max   (m)         bet the maximum");
    println!("deal  (d)         deal a new hand");
    println!("hold  (h) <pos..> toggle holds by position, 1 to 5");
    println!("odds  (o)         show the draw odds for the held cards");
    println!("draw  (w)         replace the cards not held and settle");
    println!("table (t)         show the paytable");
    println!("quit  (q)         leave the game");
}

fn styled(card: &Card) -> StyledContent<String> {
    match card.color() {
        Color::Red => card.to_string().red(),
        Color::Black => card.to_string().white(),
    }
}
