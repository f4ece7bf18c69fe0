// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Wildcard faces.
//!
//! A [PoolCard] is the face of a card as it appears in a pool, either a
//! concrete card or a wildcard whose rank and/or suit stand for a set of
//! concrete ranks and suits.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, ParseCardError, Rank, Suit};

/// The rank of a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankFace {
    /// A concrete rank.
    Exact(Rank),
    /// Any of the 13 ranks.
    Any,
}

impl RankFace {
    /// The ranks this face stands for in ascending order.
    pub fn ranks(&self) -> impl Iterator<Item = Rank> + Clone {
        let (exact, any) = match self {
            RankFace::Exact(rank) => (Some(*rank), false),
            RankFace::Any => (None, true),
        };

        exact
            .into_iter()
            .chain(Rank::ranks().filter(move |_| any))
    }

    fn from_char(c: char) -> Option<RankFace> {
        match c.to_ascii_uppercase() {
            'W' | '?' => Some(RankFace::Any),
            c => Rank::from_char(c).map(RankFace::Exact),
        }
    }
}

impl fmt::Display for RankFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankFace::Exact(rank) => write!(f, "{rank}"),
            RankFace::Any => write!(f, "W"),
        }
    }
}

/// The suit of a card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SuitFace {
    /// A concrete suit.
    Exact(Suit),
    /// Clubs or spades.
    Black,
    /// Hearts or diamonds.
    Red,
    /// Any of the four suits.
    Any,
}

impl SuitFace {
    /// The suits this face stands for.
    pub fn suits(&self) -> &[Suit] {
        match self {
            SuitFace::Exact(suit) => std::slice::from_ref(suit),
            SuitFace::Black => &Suit::BLACK,
            SuitFace::Red => &Suit::RED,
            SuitFace::Any => &Suit::ALL,
        }
    }

    fn from_char(c: char) -> Option<SuitFace> {
        match c.to_ascii_uppercase() {
            'B' => Some(SuitFace::Black),
            'R' => Some(SuitFace::Red),
            'W' => Some(SuitFace::Any),
            c => Suit::from_char(c).map(SuitFace::Exact),
        }
    }
}

impl fmt::Display for SuitFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuitFace::Exact(suit) => write!(f, "{suit}"),
            SuitFace::Black => write!(f, "B"),
            SuitFace::Red => write!(f, "R"),
            SuitFace::Any => write!(f, "W"),
        }
    }
}

/// A card as it appears in a pool, concrete or wildcard.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PoolCard {
    rank: RankFace,
    suit: SuitFace,
}

impl PoolCard {
    /// The black joker, any club or spade.
    pub const BLACK_JOKER: PoolCard = PoolCard::new(RankFace::Any, SuitFace::Black);

    /// The red joker, any heart or diamond.
    pub const RED_JOKER: PoolCard = PoolCard::new(RankFace::Any, SuitFace::Red);

    /// A fully wild card.
    pub const JOKER: PoolCard = PoolCard::new(RankFace::Any, SuitFace::Any);

    /// Creates a card face.
    pub const fn new(rank: RankFace, suit: SuitFace) -> Self {
        Self { rank, suit }
    }

    /// The face rank.
    pub fn rank(&self) -> RankFace {
        self.rank
    }

    /// The face suit.
    pub fn suit(&self) -> SuitFace {
        self.suit
    }

    /// Checks if this face stands for more than one card.
    pub fn is_wildcard(&self) -> bool {
        matches!(self.rank, RankFace::Any) || !matches!(self.suit, SuitFace::Exact(_))
    }

    /// Returns the concrete card if this face is not a wildcard.
    pub fn as_card(&self) -> Option<Card> {
        match (self.rank, self.suit) {
            (RankFace::Exact(rank), SuitFace::Exact(suit)) => Some(Card::new(rank, suit)),
            _ => None,
        }
    }

    /// Checks if this face can stand for the given card.
    pub fn represents(&self, card: Card) -> bool {
        let rank_ok = match self.rank {
            RankFace::Exact(rank) => rank == card.rank(),
            RankFace::Any => true,
        };

        rank_ok && self.suit.suits().contains(&card.suit())
    }

    /// All the concrete cards this face can stand for, ordered by rank and
    /// then by suit. A concrete face represents only itself.
    pub fn representable_cards(&self) -> Vec<Card> {
        let suits = self.suit.suits();
        self.rank
            .ranks()
            .flat_map(|rank| suits.iter().map(move |&suit| Card::new(rank, suit)))
            .collect()
    }
}

impl From<Card> for PoolCard {
    fn from(card: Card) -> Self {
        PoolCard::new(RankFace::Exact(card.rank()), SuitFace::Exact(card.suit()))
    }
}

impl TryFrom<PoolCard> for Card {
    type Error = ParseCardError;

    fn try_from(card: PoolCard) -> Result<Self, Self::Error> {
        card.as_card()
            .ok_or_else(|| ParseCardError::Wildcard(card.to_string()))
    }
}

impl fmt::Display for PoolCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for PoolCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolCard({}{})", self.rank, self.suit)
    }
}

impl FromStr for PoolCard {
    type Err = ParseCardError;

    /// Parses a card face, `W` or `?` as rank means any rank, `B`, `R` and
    /// `W` as suit mean any black, any red and any suit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(rc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Length(s.to_string()));
        };

        let rank = RankFace::from_char(rc).ok_or(ParseCardError::Rank(rc))?;
        let suit = SuitFace::from_char(sc).ok_or(ParseCardError::Suit(sc))?;
        Ok(PoolCard::new(rank, suit))
    }
}

/// Parses a whitespace separated list of card faces.
pub fn parse_cards(s: &str) -> Result<Vec<PoolCard>, ParseCardError> {
    s.split_whitespace().map(str::parse).collect()
}
