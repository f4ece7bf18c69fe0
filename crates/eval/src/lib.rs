// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand Poker hand evaluator.
//!
//! Poker hand evaluator for five cards hands, best hand selection out of seven
//! cards, and best hand selection with wildcards (jokers) that can stand for
//! any card of a given rank and/or color.
//!
//! To rank a hand use [HandStrength::eval], strengths are totally ordered:
//!
//! ```
//! # use wildhand_eval::*;
//! // 2C, 3C, .., JC
//! let cards = Deck::default().into_iter().take(10).collect::<Vec<_>>();
//! let v1 = HandStrength::eval(&cards[0..5]);
//! let v2 = HandStrength::eval(&cards[5..]);
//! assert!(v2 > v1);
//! assert_eq!(v2.rank(), HandRank::StraightFlush);
//! ```
//!
//! To select the best hand out of seven cards with a black joker:
//!
//! ```
//! # use wildhand_eval::*;
//! let pool = "6C 7C 8C 9C TC 5C WB".parse::<CardPool>().unwrap();
//! let hand = best_wild_hand(&pool);
//! assert_eq!(hand.to_string(), "7C 8C 9C TC JC");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{
    CardPool, Hand, HandRank, HandStrength, PoolError, best_hand, best_hand_with_strength,
    best_wild_hand, best_wild_hand_with_strength, hand_rank,
};

#[cfg(feature = "parallel")]
pub use eval::par_best_wild_hand;

// Reexport cards types.
pub use wildhand_cards::{
    Card, Color, Deck, ParseCardError, PoolCard, Rank, RankFace, Suit, SuitFace, parse_cards,
};
