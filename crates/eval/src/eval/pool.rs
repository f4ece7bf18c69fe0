// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards pools with wildcards.
use ahash::AHashSet;
use std::{fmt, ops::Range, str::FromStr};
use thiserror::Error;

use super::{Hand, HandStrength, best_hand_with_strength};
use crate::{Card, ParseCardError, PoolCard, Rank, Suit, parse_cards};

/// Errors returned when building a hand or a pool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Wrong number of cards.
    #[error("expected {expected} cards, found {found}")]
    WrongSize {
        /// The expected number of cards.
        expected: usize,
        /// The number of cards found.
        found: usize,
    },
    /// A concrete card appears more than once.
    #[error("duplicate card {0}")]
    DuplicateCard(Card),
    /// More wildcards than allowed in a pool.
    #[error("found {0} wildcards, at most {max} are allowed", max = CardPool::MAX_WILDCARDS)]
    TooManyWildcards(usize),
    /// The wildcards cannot be substituted without duplicating cards.
    #[error("wildcards cannot be resolved without duplicate cards")]
    Unresolvable,
    /// A card name could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseCardError),
}

/// A pool of seven cards some of which may be wildcards.
///
/// A pool is validated on creation: it has exactly seven cards, no duplicate
/// concrete cards, at most [CardPool::MAX_WILDCARDS] wildcards, and at least
/// one substitution of the wildcards with concrete cards that doesn't
/// duplicate any card.
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: [PoolCard; 7],
    subs: Substitutions,
}

impl CardPool {
    /// The number of cards in a pool.
    pub const SIZE: usize = 7;

    /// Max number of wildcards in a pool.
    pub const MAX_WILDCARDS: usize = 2;

    /// Creates a new pool.
    pub fn new<I>(cards: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = PoolCard>,
    {
        let cards = cards.into_iter().collect::<Vec<_>>();
        let cards = <[PoolCard; 7]>::try_from(cards).map_err(|cards| PoolError::WrongSize {
            expected: Self::SIZE,
            found: cards.len(),
        })?;

        let mut concrete = Vec::with_capacity(Self::SIZE);
        let mut seen = AHashSet::with_capacity(Self::SIZE);
        let mut wild = Vec::with_capacity(Self::MAX_WILDCARDS);

        for card in cards {
            match card.as_card() {
                Some(c) => {
                    if !seen.insert(c) {
                        return Err(PoolError::DuplicateCard(c));
                    }
                    concrete.push(c);
                }
                None => wild.push(card),
            }
        }

        if wild.len() > Self::MAX_WILDCARDS {
            return Err(PoolError::TooManyWildcards(wild.len()));
        }

        let subs = Substitutions::new(concrete, &wild).ok_or(PoolError::Unresolvable)?;
        Ok(Self { cards, subs })
    }

    /// The pool cards in the order they were given.
    pub fn cards(&self) -> &[PoolCard; 7] {
        &self.cards
    }

    /// The number of wildcards in this pool.
    pub fn wildcards(&self) -> usize {
        self.cards.iter().filter(|c| c.is_wildcard()).count()
    }

    /// Returns the concrete cards if this pool has no wildcards.
    pub fn concrete(&self) -> Option<[Card; 7]> {
        let mut out = [Card::new(Rank::Ace, Suit::Spades); 7];
        for (o, c) in out.iter_mut().zip(&self.cards) {
            *o = c.as_card()?;
        }

        Some(out)
    }

    /// Iterates all the concrete pools obtained by substituting the wildcards.
    pub fn substitutions(&self) -> impl Iterator<Item = [Card; 7]> + '_ {
        self.subs.iter(0..self.subs.len())
    }

    pub(crate) fn subs(&self) -> &Substitutions {
        &self.subs
    }
}

impl FromStr for CardPool {
    type Err = PoolError;

    /// Parses a whitespace separated list of seven card faces.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(parse_cards(s)?)
    }
}

impl fmt::Display for CardPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
        }

        Ok(())
    }
}

/// The substitutions space of a pool.
///
/// Each substitution has an index in `0..len()` that is a mixed radix number
/// with a digit per wildcard, the first wildcard being the most significant
/// digit. Indices that duplicate a card are skipped, as are the indices of
/// identical wildcards that are not in increasing card order as they would
/// produce the same pools as an already visited index.
#[derive(Debug, Clone)]
pub(crate) struct Substitutions {
    concrete: Vec<Card>,
    candidates: Vec<Vec<Card>>,
    same_as_prev: Vec<bool>,
    first: usize,
    first_pool: [Card; 7],
}

impl Substitutions {
    /// Returns the substitutions for the given concrete and wild cards or
    /// `None` if there are no valid substitutions.
    fn new(concrete: Vec<Card>, wild: &[PoolCard]) -> Option<Self> {
        // Put identical wildcards next to each other.
        let mut grouped: Vec<PoolCard> = Vec::with_capacity(wild.len());
        for &w in wild {
            match grouped.iter().rposition(|g| *g == w) {
                Some(pos) => grouped.insert(pos + 1, w),
                None => grouped.push(w),
            }
        }

        let candidates = grouped
            .iter()
            .map(|w| {
                w.representable_cards()
                    .into_iter()
                    .filter(|c| !concrete.contains(c))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let same_as_prev = grouped
            .iter()
            .enumerate()
            .map(|(i, w)| i > 0 && grouped[i - 1] == *w)
            .collect();

        let mut subs = Self {
            concrete,
            candidates,
            same_as_prev,
            first: 0,
            first_pool: [Card::new(Rank::Ace, Suit::Spades); 7],
        };

        let (first, first_pool) =
            (0..subs.len()).find_map(|idx| subs.pool_at(idx).map(|pool| (idx, pool)))?;
        subs.first = first;
        subs.first_pool = first_pool;
        Some(subs)
    }

    /// The size of the index space including the skipped indices.
    pub fn len(&self) -> usize {
        self.candidates.iter().map(Vec::len).product()
    }

    /// The first valid index.
    pub fn first(&self) -> usize {
        self.first
    }

    /// The concrete pool for the first valid index.
    pub fn first_pool(&self) -> &[Card; 7] {
        &self.first_pool
    }

    /// The number of wildcards.
    pub fn num_wild(&self) -> usize {
        self.candidates.len()
    }

    /// Returns the concrete pool for a substitution index or `None` if the
    /// index is skipped.
    pub fn pool_at(&self, mut index: usize) -> Option<[Card; 7]> {
        let mut pool = [Card::new(Rank::Ace, Suit::Spades); 7];
        let base = self.concrete.len();
        pool[..base].copy_from_slice(&self.concrete);

        for (i, cands) in self.candidates.iter().enumerate().rev() {
            pool[base + i] = cands[index % cands.len()];
            index /= cands.len();
        }

        for i in 1..self.candidates.len() {
            let card = pool[base + i];
            if self.same_as_prev[i] && card <= pool[base + i - 1] {
                return None;
            }

            if pool[base..base + i].contains(&card) {
                return None;
            }
        }

        Some(pool)
    }

    /// Iterates the valid substitutions with index in range.
    pub fn iter(&self, range: Range<usize>) -> impl Iterator<Item = [Card; 7]> + '_ {
        range.filter_map(|idx| self.pool_at(idx))
    }

    /// Returns the best hand among the substitutions with index in range, the
    /// first one in index order on ties.
    pub fn best_in(&self, range: Range<usize>) -> Option<(Hand, HandStrength)> {
        self.iter(range)
            .map(|pool| best_hand_with_strength(&pool))
            .fold(None, |best, (hand, strength)| match best {
                Some((_, best_strength)) if strength <= best_strength => best,
                _ => Some((hand, strength)),
            })
    }
}
