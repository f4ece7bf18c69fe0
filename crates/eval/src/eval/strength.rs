// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand ranking.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use super::Hand;
use crate::Card;

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pairs, straights or flushes.
    HighCard = 0,
    /// Two cards with the same rank.
    OnePair,
    /// Two different pairs.
    TwoPair,
    /// Three cards with the same rank.
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards with the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// Max number of tiebreak values, two pairs ranks plus the five cards ranks.
const MAX_TIEBREAK: usize = 7;

/// The strength of a five cards hand.
///
/// A strength is made of the hand category and a list of tiebreak rank values
/// (2 for a deuce up to 14 for an ace), strengths compare by category first
/// and then lexicographically by their tiebreak values:
///
/// | Category        | Tiebreak                                   |
/// |-----------------|--------------------------------------------|
/// | Straight Flush  | high rank (5 for A-2-3-4-5)                |
/// | Four of a Kind  | quads rank, kicker rank                    |
/// | Full House      | trips rank, pair rank                      |
/// | Flush           | ranks descending                           |
/// | Straight        | high rank (5 for A-2-3-4-5)                |
/// | Three of a Kind | trips rank, ranks descending               |
/// | Two Pair        | high pair, low pair, ranks descending      |
/// | One Pair        | pair rank, ranks descending                |
/// | High Card       | ranks descending                           |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HandStrength {
    rank: HandRank,
    tiebreak: [u8; MAX_TIEBREAK],
    len: u8,
}

impl HandStrength {
    fn new(rank: HandRank, values: &[u8]) -> Self {
        let mut tiebreak = [0; MAX_TIEBREAK];
        tiebreak[..values.len()].copy_from_slice(values);
        Self {
            rank,
            tiebreak,
            len: values.len() as u8,
        }
    }

    /// Evaluates a five cards hand.
    ///
    /// Panics if the hand doesn't have exactly five cards.
    pub fn eval(cards: &[Card]) -> Self {
        assert_eq!(cards.len(), 5, "a hand must have 5 cards");

        let mut ranks = [0u8; 5];
        for (r, c) in ranks.iter_mut().zip(cards) {
            *r = c.rank().value();
        }
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_high(&ranks);

        if let (true, Some(high)) = (flush, straight) {
            Self::new(HandRank::StraightFlush, &[high])
        } else if let (Some(quads), Some(kicker)) = (kind(4, &ranks), kind(1, &ranks)) {
            Self::new(HandRank::FourOfAKind, &[quads, kicker])
        } else if let (Some(trips), Some(pair)) = (kind(3, &ranks), kind(2, &ranks)) {
            Self::new(HandRank::FullHouse, &[trips, pair])
        } else if flush {
            Self::new(HandRank::Flush, &ranks)
        } else if let Some(high) = straight {
            Self::new(HandRank::Straight, &[high])
        } else if let Some(trips) = kind(3, &ranks) {
            Self::with_ranks(HandRank::ThreeOfAKind, &[trips], &ranks)
        } else if let Some((high, low)) = two_pair(&ranks) {
            Self::with_ranks(HandRank::TwoPair, &[high, low], &ranks)
        } else if let Some(pair) = kind(2, &ranks) {
            Self::with_ranks(HandRank::OnePair, &[pair], &ranks)
        } else {
            Self::new(HandRank::HighCard, &ranks)
        }
    }

    fn with_ranks(rank: HandRank, head: &[u8], ranks: &[u8; 5]) -> Self {
        let mut values = [0; MAX_TIEBREAK];
        values[..head.len()].copy_from_slice(head);
        values[head.len()..head.len() + ranks.len()].copy_from_slice(ranks);
        Self::new(rank, &values[..head.len() + ranks.len()])
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tiebreak rank values.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }
}

impl Ord for HandStrength {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.tiebreak().cmp(other.tiebreak()))
    }
}

impl PartialOrd for HandStrength {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandStrength({:?}, {:?})", self.rank, self.tiebreak())
    }
}

impl fmt::Display for HandStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.rank, self.tiebreak())
    }
}

/// Returns the strength of a hand.
pub fn hand_rank(hand: &Hand) -> HandStrength {
    HandStrength::eval(hand.cards())
}

/// Returns the straight high rank for descending ranks, the wheel A-2-3-4-5
/// is a 5 high straight.
fn straight_high(ranks: &[u8; 5]) -> Option<u8> {
    if ranks.windows(2).all(|w| w[0] == w[1] + 1) {
        Some(ranks[0])
    } else if *ranks == [14, 5, 4, 3, 2] {
        Some(5)
    } else {
        None
    }
}

/// Returns the highest rank that appears exactly n times.
fn kind(n: usize, ranks: &[u8]) -> Option<u8> {
    ranks
        .chunk_by(|a, b| a == b)
        .find(|group| group.len() == n)
        .map(|group| group[0])
}

/// Returns the high and low pairs ranks.
fn two_pair(ranks: &[u8; 5]) -> Option<(u8, u8)> {
    let high = kind(2, ranks)?;

    let mut ascending = *ranks;
    ascending.reverse();
    let low = kind(2, &ascending)?;

    (low != high).then_some((high, low))
}
