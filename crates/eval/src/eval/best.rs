// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards out of seven.
use super::{Hand, HandStrength};
use crate::Card;

/// The number of 5-cards subsets of a 7 cards pool.
const NUM_SUBSETS: usize = 21;

/// Creates the table of 5-cards subsets positions in lexicographic order.
const fn make_subsets() -> [[usize; 5]; NUM_SUBSETS] {
    let mut t = [[0usize; 5]; NUM_SUBSETS];
    let mut n = 0;

    // Each subset leaves out two positions i < j.
    let mut i = 7;
    while i > 0 {
        i -= 1;
        let mut j = 7;
        while j > i + 1 {
            j -= 1;

            let mut k = 0;
            let mut pos = 0;
            while pos < 7 {
                if pos != i && pos != j {
                    t[n][k] = pos;
                    k += 1;
                }
                pos += 1;
            }

            n += 1;
        }
    }

    t
}

const SUBSETS: [[usize; 5]; NUM_SUBSETS] = make_subsets();

/// Returns the best five cards hand out of seven cards.
///
/// When more than one hand has the best strength the first one in
/// lexicographic order of the pool positions is returned.
///
/// Panics if the pool has duplicate cards.
pub fn best_hand(pool: &[Card; 7]) -> Hand {
    best_hand_with_strength(pool).0
}

/// Returns the best five cards hand out of seven cards and its strength.
///
/// Panics if the pool has duplicate cards.
pub fn best_hand_with_strength(pool: &[Card; 7]) -> (Hand, HandStrength) {
    let mut seen = 0u64;
    for card in pool {
        let bit = 1u64 << card.id();
        assert!(seen & bit == 0, "duplicate card {card} in pool");
        seen |= bit;
    }

    let eval = |pos: &[usize; 5]| {
        let cards = pos.map(|p| pool[p]);
        (cards, HandStrength::eval(&cards))
    };

    let (mut best_cards, mut best_strength) = eval(&SUBSETS[0]);
    for pos in &SUBSETS[1..] {
        let (cards, strength) = eval(pos);
        if strength > best_strength {
            best_cards = cards;
            best_strength = strength;
        }
    }

    (Hand::new_unchecked(best_cards), best_strength)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;
    use ahash::HashSet;
    use rand::prelude::*;

    fn pool(s: &str) -> [Card; 7] {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        cards.try_into().unwrap()
    }

    fn hand(s: &str) -> Hand {
        let cards = s
            .split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Hand::from_slice(&cards).unwrap()
    }

    #[test]
    fn subsets_table() {
        let unique = SUBSETS.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), NUM_SUBSETS);
        assert!(SUBSETS.windows(2).all(|w| w[0] < w[1]));
        assert!(SUBSETS.iter().all(|s| s.windows(2).all(|w| w[0] < w[1])));
        assert_eq!(SUBSETS[0], [0, 1, 2, 3, 4]);
        assert_eq!(SUBSETS[NUM_SUBSETS - 1], [2, 3, 4, 5, 6]);
    }

    #[test]
    fn straight_flush_over_flush() {
        let best = best_hand(&pool("6C 7C 8C 9C TC 5C JS"));
        assert_eq!(best, hand("6C 7C 8C 9C TC"));
    }

    #[test]
    fn best_full_house() {
        let (best, strength) = best_hand_with_strength(&pool("TD TC TH 7C 7D 8C 8S"));
        assert_eq!(best, hand("8C 8S TC TD TH"));
        assert_eq!(strength.rank(), HandRank::FullHouse);
        assert_eq!(strength.tiebreak(), &[10, 8]);
    }

    #[test]
    fn best_four_of_a_kind() {
        let best = best_hand(&pool("JD TC TH 7C 7D 7S 7H"));
        assert_eq!(best, hand("7C 7D 7H 7S JD"));
    }

    #[test]
    fn best_wheel() {
        let (best, strength) = best_hand_with_strength(&pool("AC 2D 3H 4S 5C KD QH"));
        assert_eq!(best, hand("AC 2D 3H 4S 5C"));
        assert_eq!(strength.rank(), HandRank::Straight);
        assert_eq!(strength.tiebreak(), &[5]);
    }

    #[test]
    fn first_best_on_ties() {
        // Either king can be the kicker.
        let best = best_hand(&pool("AC AD AH AS KC KD 2C"));
        assert_eq!(best, hand("AC AD AH AS KC"));

        // Either king can be the straight high card.
        let best = best_hand(&pool("9C TD JH QS KC KD 2C"));
        assert_eq!(best, hand("9C TD JH QS KC"));
    }

    #[test]
    fn permutation_invariant() {
        let mut rng = rand::rng();
        let pools = [
            "6C 7C 8C 9C TC 5C JS",
            "TD TC TH 7C 7D 8C 8S",
            "JD TC TH 7C 7D 7S 7H",
            "AC 2D 3H 4S 5C KD QH",
            "AS KD 9C 7H 5S 3D 2C",
        ];

        for p in pools {
            let mut cards = pool(p);
            let expected = best_hand_with_strength(&cards).1;
            for _ in 0..50 {
                cards.shuffle(&mut rng);
                assert_eq!(best_hand_with_strength(&cards).1, expected, "{p}");
            }
        }
    }

    #[test]
    fn best_is_max_of_subsets() {
        let mut rng = rand::rng();
        let deck = crate::Deck::default().into_iter().collect::<Vec<_>>();

        for _ in 0..200 {
            let cards: [Card; 7] = deck
                .choose_multiple(&mut rng, 7)
                .copied()
                .collect::<Vec<_>>()
                .try_into()
                .unwrap();

            let (best, strength) = best_hand_with_strength(&cards);
            assert_eq!(best.strength(), strength);

            for pos in &SUBSETS {
                let sub = pos.map(|p| cards[p]);
                assert!(HandStrength::eval(&sub) <= strength);
            }
        }
    }

    #[test]
    #[should_panic]
    fn duplicate_cards() {
        best_hand(&pool("AC AC 3H 4S 5C KD QH"));
    }
}
