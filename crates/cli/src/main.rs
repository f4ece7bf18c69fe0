// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand CLI, prints the best five cards hand out of seven cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};
use serde::Serialize;

use wildhand_eval::{CardPool, Hand, HandRank, best_wild_hand_with_strength, parse_cards};

#[derive(Debug, Parser)]
struct Cli {
    /// Seven cards, for example `TD TC 5H 5C 7C WR WB`, use WB for the black
    /// joker, WR for the red joker, and WW for a fully wild card.
    #[clap(required = true, num_args = 1..)]
    cards: Vec<String>,
    /// Print the result as JSON.
    #[clap(long, short)]
    json: bool,
    /// Number of parallel tasks used to resolve wildcards.
    #[clap(long, short, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=64))]
    tasks: u16,
}

/// The run configuration.
#[derive(Debug)]
struct Config {
    cards: String,
    json: bool,
    tasks: usize,
}

/// The best hand output.
#[derive(Debug, Serialize)]
struct BestHand {
    pool: String,
    hand: Hand,
    rank: HandRank,
    tiebreak: Vec<u8>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    let config = Config {
        cards: cli.cards.join(" "),
        json: cli.json,
        tasks: cli.tasks as usize,
    };

    match run(&config).and_then(|best| render(&best, config.json)) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("{e:#}");
            std::process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<BestHand> {
    let faces = parse_cards(&config.cards).context("Invalid cards")?;
    let pool = CardPool::new(faces).context("Invalid pool")?;

    info!(
        "Evaluating {pool} with {} wildcards using {} tasks",
        pool.wildcards(),
        config.tasks
    );

    let (hand, strength) = if config.tasks > 1 && pool.wildcards() > 0 {
        pool.par_best_hand(config.tasks)
    } else {
        best_wild_hand_with_strength(&pool)
    };

    Ok(BestHand {
        pool: pool.to_string(),
        hand,
        rank: strength.rank(),
        tiebreak: strength.tiebreak().to_vec(),
    })
}

fn render(best: &BestHand, json: bool) -> Result<String> {
    if json {
        serde_json::to_string(best).context("JSON serialization")
    } else {
        Ok(format!("{} {:?}: {}", best.rank, best.tiebreak, best.hand))
    }
}
