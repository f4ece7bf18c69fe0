// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildhand Poker cards types.
//!
//! This crate define types to create concrete cards:
//!
//! ```
//! # use wildhand_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td = "TD".parse::<Card>().unwrap();
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! wildcards faces, that stand for a set of concrete cards:
//!
//! ```
//! # use wildhand_cards::{Card, PoolCard, Suit};
//! // The black joker can be any club or spade.
//! let joker = "WB".parse::<PoolCard>().unwrap();
//! assert!(joker.is_wildcard());
//!
//! let cards = joker.representable_cards();
//! assert_eq!(cards.len(), 26);
//! assert!(cards.iter().all(|c| c.suit() == Suit::Clubs || c.suit() == Suit::Spades));
//! ```
//!
//! and a [Deck] type for iterating the 52 cards and all k-cards hands:
//!
//! ```
//! # use wildhand_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(2, |hand| {
//!     assert_eq!(hand.len(), 2);
//!     counter += 1;
//! });
//! assert_eq!(counter, 1_326);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, Rank, Suit};

mod error;
pub use error::ParseCardError;

mod wild;
pub use wild::{PoolCard, RankFace, SuitFace, parse_cards};
