// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Compares sequential and parallel resolution of two fully wild jokers.
//
// ```bash
// $ cargo r --release --features=parallel --example par_wild
// ```

use std::time::Instant;

use wildhand_eval::{CardPool, best_wild_hand_with_strength};

fn main() {
    const NUM_TASKS: usize = 4;
    const NUM_ROUNDS: usize = 20;

    let pool = "QH QS 5C 5D 8H WW WW"
        .parse::<CardPool>()
        .expect("valid pool");
    let num_subs = pool.substitutions().count();

    let now = Instant::now();
    let mut seq = None;
    for _ in 0..NUM_ROUNDS {
        seq = Some(best_wild_hand_with_strength(&pool));
    }
    let seq_elapsed = now.elapsed().as_secs_f64();

    let now = Instant::now();
    let mut par = None;
    for _ in 0..NUM_ROUNDS {
        par = Some(pool.par_best_hand(NUM_TASKS));
    }
    let par_elapsed = now.elapsed().as_secs_f64();

    assert_eq!(seq, par);
    if let Some((hand, strength)) = seq {
        println!("Pool:            {pool}");
        println!("Best hand:       {hand} ({strength})");
    }

    println!("Substitutions:   {num_subs}");
    println!("Sequential:      {:.3}s", seq_elapsed);
    println!("Parallel ({NUM_TASKS}):    {:.3}s", par_elapsed);
}
