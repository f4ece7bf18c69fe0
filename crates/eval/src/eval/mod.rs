// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator ranks five cards hands with [HandStrength::eval], a strength
//! is the hand category and the ranks values that break ties between hands of
//! the same category.
//!
//! It provides a [best_hand] function that selects the best five cards out of
//! seven concrete cards, and a [best_wild_hand] function that resolves up to
//! two wildcards in a [CardPool] by trying all the concrete cards they can
//! stand for and selecting the best hand across all substitutions.
//!
//! With the **`parallel`** feature [par_best_wild_hand] splits the
//! substitutions over a number of parallel tasks.

mod strength;
pub use strength::{HandRank, HandStrength, hand_rank};

mod hand;
pub use hand::Hand;

mod best;
pub use best::{best_hand, best_hand_with_strength};

mod pool;
pub use pool::{CardPool, PoolError};

mod wild;
pub use wild::{best_wild_hand, best_wild_hand_with_strength};

#[cfg(feature = "parallel")]
mod parallel;
#[cfg(feature = "parallel")]
pub use parallel::par_best_wild_hand;
