// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{HandStrength, PoolError};
use crate::Card;

/// A five cards hand with no duplicate cards.
///
/// The cards are kept sorted so hands with the same cards compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hand([Card; 5]);

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 5;

    /// Creates a hand checking for duplicate cards.
    pub fn new(cards: [Card; 5]) -> Result<Self, PoolError> {
        let hand = Self::new_unchecked(cards);
        if let Some(w) = hand.0.windows(2).find(|w| w[0] == w[1]) {
            return Err(PoolError::DuplicateCard(w[0]));
        }

        Ok(hand)
    }

    /// Creates a hand from a slice of five cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, PoolError> {
        let cards = <[Card; 5]>::try_from(cards).map_err(|_| PoolError::WrongSize {
            expected: Self::SIZE,
            found: cards.len(),
        })?;
        Self::new(cards)
    }

    pub(crate) fn new_unchecked(mut cards: [Card; 5]) -> Self {
        cards.sort_unstable();
        Self(cards)
    }

    /// The hand cards ordered by rank and suit.
    pub fn cards(&self) -> &[Card; 5] {
        &self.0
    }

    /// Evaluates this hand strength.
    pub fn strength(&self) -> HandStrength {
        HandStrength::eval(&self.0)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.0.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::array::IntoIter<Card, 5>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
