// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters collected by the search engine during one enumeration. These
//! are diagnostics, not part of the enumeration contract.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

/// The counters the engine maintains.
#[derive(EnumCountMacro, Copy, Clone, Debug)]
#[repr(u8)]
pub enum Counter {
    /// Nodes classified by the generator (including the root).
    NodesVisited,

    /// Complete solutions recorded.
    SolutionsEmitted,

    /// Branches abandoned by `Prune` (not exhausted frames).
    BranchesPruned,
}

/// Counter values for one enumeration run.
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    counts: [u64; Counter::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment(&mut self, counter: Counter) {
        self.counts[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counter) -> u64 {
        self.counts[counter as usize]
    }
}
