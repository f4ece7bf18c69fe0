// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel wildcards resolution.
use log::debug;
use std::{panic, thread};

use super::{CardPool, Hand, HandStrength, wild::first_best};

impl CardPool {
    /// Returns the best hand and its strength using `num_tasks` parallel
    /// tasks.
    ///
    /// The substitutions are split in contiguous chunks of indices, one for
    /// each task, and the tasks results are reduced in chunk order so that the
    /// returned hand is the same as the one returned by
    /// [best_wild_hand](super::best_wild_hand).
    ///
    /// Panics if num_tasks is zero.
    pub fn par_best_hand(&self, num_tasks: usize) -> (Hand, HandStrength) {
        assert!(num_tasks > 0);

        let subs = self.subs();
        let start = subs.first() + 1;
        let num_subs = subs.len().saturating_sub(start);
        let subs_per_task = num_subs.div_ceil(num_tasks);

        debug!(
            "Resolving {self} with {num_tasks} tasks and {subs_per_task} substitutions per task"
        );

        let results = thread::scope(|s| {
            let handles = (0..num_tasks)
                .map(|task_id| {
                    let from = (start + task_id * subs_per_task).min(subs.len());
                    let to = (from + subs_per_task).min(subs.len());
                    s.spawn(move || subs.best_in(from..to))
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
                .collect::<Vec<_>>()
        });

        let mut best = first_best(self);
        for (hand, strength) in results.into_iter().flatten() {
            if strength > best.1 {
                best = (hand, strength);
            }
        }

        best
    }
}

/// Returns the best five cards hand out of a pool with wildcards using
/// `num_tasks` parallel tasks.
///
/// Panics if num_tasks is zero.
pub fn par_best_wild_hand(pool: &CardPool, num_tasks: usize) -> Hand {
    pool.par_best_hand(num_tasks).0
}
