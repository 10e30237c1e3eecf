// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters kept by a running search. They cost one increment per event and
//! let callers see how effective the early-exit pruning is.

use serde::Serialize;
use std::fmt;
use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Candidate input orderings taken from the assortment.
    Candidates,
    /// (candidate, assignment) pairs verified.
    Assignments,
    /// Verifications that aborted on a node mismatch.
    Mismatches,
    /// Verified pairs yielded to the caller.
    Solutions,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Statistics {
    stats: [u64; COUNT],

    /// `prune_depths[i]` counts verifications that failed at node `i`.
    prune_depths: Vec<u64>,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Statistics for a column with `node_count` nodes.
    pub fn for_nodes(node_count: usize) -> Self {
        Statistics {
            stats: [0; COUNT],
            prune_depths: vec![0; node_count],
        }
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Record a verification that failed at `node`.
    pub(crate) fn record_mismatch(&mut self, node: usize) {
        self.increment_counter(Counters::Mismatches);
        if node >= self.prune_depths.len() {
            self.prune_depths.resize(node + 1, 0);
        }
        self.prune_depths[node] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Mismatch counts by the node at which verification stopped.
    pub fn prune_depths(&self) -> &[u64] {
        &self.prune_depths
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use strum::IntoEnumIterator;
        for (i, counter) in Counters::iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        write!(f, " prune_depths={:?}", self.prune_depths)
    }
}
