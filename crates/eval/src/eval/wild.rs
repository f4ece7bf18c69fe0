// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best hand with wildcards.
use log::{debug, trace};

use super::{CardPool, Hand, HandStrength, best_hand_with_strength};

/// Returns the best five cards hand out of a pool with wildcards.
///
/// Every substitution of the wildcards with concrete cards not already in the
/// pool is evaluated with [best_hand](super::best_hand), the best hand across
/// all substitutions is returned, on ties the one from the first substitution.
pub fn best_wild_hand(pool: &CardPool) -> Hand {
    best_wild_hand_with_strength(pool).0
}

/// Returns the best five cards hand out of a pool with wildcards and its
/// strength.
pub fn best_wild_hand_with_strength(pool: &CardPool) -> (Hand, HandStrength) {
    let subs = pool.subs();
    debug!(
        "Resolving {} wildcards in {pool} over {} substitutions",
        subs.num_wild(),
        subs.len()
    );

    let first = subs.first();
    let mut best = first_best(pool);

    if let Some((hand, strength)) = subs.best_in(first + 1..subs.len()) {
        if strength > best.1 {
            best = (hand, strength);
        }
    }

    trace!("Best hand for {pool}: {} {}", best.0, best.1);
    best
}

/// Evaluates the first valid substitution.
pub(crate) fn first_best(pool: &CardPool) -> (Hand, HandStrength) {
    best_hand_with_strength(pool.subs().first_pool())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Card, HandRank, best_hand};
    use rand::prelude::*;

    fn pool(s: &str) -> CardPool {
        s.parse().unwrap()
    }

    fn hand(s: &str) -> Hand {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Hand::from_slice(&cards).unwrap()
    }

    #[test]
    fn black_joker_straight_flush() {
        let (best, strength) = best_wild_hand_with_strength(&pool("6C 7C 8C 9C TC 5C WB"));
        assert_eq!(best, hand("7C 8C 9C JC TC"));
        assert_eq!(strength.rank(), HandRank::StraightFlush);
        assert_eq!(strength.tiebreak(), &[11]);
    }

    #[test]
    fn two_jokers_four_of_a_kind() {
        let (best, strength) = best_wild_hand_with_strength(&pool("TD TC 5H 5C 7C WR WB"));
        assert_eq!(best, hand("7C TC TD TH TS"));
        assert_eq!(strength.rank(), HandRank::FourOfAKind);
        assert_eq!(strength.tiebreak(), &[10, 7]);
    }

    #[test]
    fn no_jokers() {
        let best = best_wild_hand(&pool("JD TC TH 7C 7D 7S 7H"));
        assert_eq!(best, hand("7C 7D 7H 7S JD"));

        let best = best_wild_hand(&pool("6C 7C 8C 9C TC 5C JS"));
        assert_eq!(best, hand("6C 7C 8C 9C TC"));
    }

    #[test]
    fn red_joker_can_only_be_red() {
        // The red joker cannot complete the clubs straight flush.
        let (best, strength) = best_wild_hand_with_strength(&pool("6C 7C 8C 9C 2D 3S WR"));
        assert_eq!(strength.rank(), HandRank::Straight);
        assert_eq!(strength.tiebreak(), &[10]);
        assert_eq!(best, hand("6C 7C 8C 9C TD"));

        // The black joker can.
        let strength = best_wild_hand_with_strength(&pool("6C 7C 8C 9C 2D 3S WB")).1;
        assert_eq!(strength.rank(), HandRank::StraightFlush);
    }

    #[test]
    fn jokers_skip_cards_in_pool() {
        // The red joker can still be the ace of hearts.
        let strength = best_wild_hand_with_strength(&pool("AC AS AD KC KS 2H WR")).1;
        assert_eq!(strength.rank(), HandRank::FourOfAKind);
        assert_eq!(strength.tiebreak(), &[14, 13]);

        // No black ace left, the joker can only be a king kicker.
        let strength = best_wild_hand_with_strength(&pool("AC AS AD AH KS 2H WB")).1;
        assert_eq!(strength.rank(), HandRank::FourOfAKind);
        assert_eq!(strength.tiebreak(), &[14, 13]);
    }

    #[test]
    fn partial_wildcards() {
        // A black ten must be the ten of spades.
        let (best, strength) = best_wild_hand_with_strength(&pool("TC TD 9H 9C 2S 3S TB"));
        assert_eq!(best, hand("9C 9H TC TD TS"));
        assert_eq!(strength.rank(), HandRank::FullHouse);

        // Any heart completes the flush.
        let strength = best_wild_hand_with_strength(&pool("2H 5H 9H JH 3C 4D WH")).1;
        assert_eq!(strength.rank(), HandRank::Flush);
        assert_eq!(strength.tiebreak(), &[14, 11, 9, 5, 2]);
    }

    #[test]
    fn fully_wild_jokers() {
        let (best, strength) = best_wild_hand_with_strength(&pool("AH KH QH 2C 3D WW WW"));
        assert_eq!(strength.rank(), HandRank::StraightFlush);
        assert_eq!(strength.tiebreak(), &[14]);
        assert_eq!(best, hand("AH KH QH JH TH"));
    }

    #[test]
    fn wild_beats_every_resolution() {
        let pools = [
            "6C 7C 8C 9C TC 5C WB",
            "TD TC 5H 5C 7C WR WB",
            "2D 7S 9H JC 4D WR WB",
            "AS KD 9C 3H 2D 8S WR",
            "QH QS 5C 5D 8H WW WB",
        ];

        for p in pools {
            let pool = pool(p);
            let strength = best_wild_hand_with_strength(&pool).1;

            let mut max = None;
            for cards in pool.substitutions() {
                let s = best_hand(&cards).strength();
                assert!(strength >= s, "{p}");
                max = max.max(Some(s));
            }

            assert_eq!(max, Some(strength), "{p}");
        }
    }

    #[test]
    fn permutation_invariant() {
        let mut rng = rand::rng();
        let faces = crate::parse_cards("TD TC 5H 5C 7C WR WB").unwrap();
        let expected = best_wild_hand_with_strength(&CardPool::new(faces.clone()).unwrap());

        for _ in 0..10 {
            let mut faces = faces.clone();
            faces.shuffle(&mut rng);
            let (hand, strength) = best_wild_hand_with_strength(&CardPool::new(faces).unwrap());
            assert_eq!(strength, expected.1);
            // The best hand is unique.
            assert_eq!(hand, expected.0);
        }
    }
}
