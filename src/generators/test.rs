// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Test generators for validating the search engine.
//!
//! These generators are simple examples that demonstrate how the engine
//! works without real problem constraints. They're useful for:
//! - Testing the engine's traversal and backtracking logic
//! - Validating push/pop buffer restoration
//! - Providing examples for implementing real generators

use crate::engine::{Generator, StepResult};
use crate::sequence::PartialSequence;

/// Generator that emits every string of a fixed length over a fixed fanout.
///
/// Child `i` at every position is the letter `'a' + i`, so the output is
/// the full Cartesian product in alphabetical order.
#[derive(Debug)]
pub struct FixedFanoutGenerator {
    depth: usize,
    fanout: usize,
}

impl FixedFanoutGenerator {
    /// Create a generator emitting all `fanout^depth` strings.
    ///
    /// # Panics
    ///
    /// Panics if `fanout > 26` (symbols are lowercase letters).
    pub fn new(depth: usize, fanout: usize) -> Self {
        assert!(fanout <= 26, "Fanout out of range: {}", fanout);
        Self { depth, fanout }
    }
}

impl Generator for FixedFanoutGenerator {
    fn step(&self, seq: &PartialSequence) -> StepResult {
        if seq.len() == self.depth {
            StepResult::Emit
        } else {
            StepResult::Choices(self.fanout)
        }
    }

    fn symbol(&self, _seq: &PartialSequence, choice: usize) -> char {
        (b'a' + choice as u8) as char
    }

    fn name(&self) -> &str {
        "FixedFanout"
    }
}

/// Generator that expands normally but prunes everything at a cutoff depth.
///
/// Below the cutoff it behaves like [`FixedFanoutGenerator`]; at the cutoff
/// every node is pruned, so the enumeration produces no solutions while
/// still exercising the full backtracking machinery.
#[derive(Debug)]
pub struct PruneAtDepthGenerator {
    cutoff: usize,
    fanout: usize,
}

impl PruneAtDepthGenerator {
    /// Create a generator pruning every branch at `cutoff`.
    pub fn new(cutoff: usize, fanout: usize) -> Self {
        Self { cutoff, fanout }
    }
}

impl Generator for PruneAtDepthGenerator {
    fn step(&self, seq: &PartialSequence) -> StepResult {
        if seq.len() == self.cutoff {
            StepResult::Prune
        } else {
            StepResult::Choices(self.fanout)
        }
    }

    fn symbol(&self, _seq: &PartialSequence, choice: usize) -> char {
        (b'a' + choice as u8) as char
    }

    fn name(&self) -> &str {
        "PruneAtDepth"
    }
}

/// Generator whose root is already a solution.
///
/// Enumerates exactly one string, the empty string. Never expands, so the
/// default `symbol` panic is never reached.
#[derive(Debug)]
pub struct EmitRootGenerator;

impl Generator for EmitRootGenerator {
    fn step(&self, _seq: &PartialSequence) -> StepResult {
        StepResult::Emit
    }

    fn name(&self) -> &str {
        "EmitRoot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_fanout_classification() {
        let generator = FixedFanoutGenerator::new(2, 3);
        let mut seq = PartialSequence::new();

        assert_eq!(generator.step(&seq), StepResult::Choices(3));
        assert_eq!(generator.symbol(&seq, 0), 'a');
        assert_eq!(generator.symbol(&seq, 2), 'c');

        seq.push('a');
        seq.push('b');
        assert_eq!(generator.step(&seq), StepResult::Emit);
    }

    #[test]
    #[should_panic(expected = "Fanout out of range")]
    fn test_fixed_fanout_rejects_wide_fanout() {
        FixedFanoutGenerator::new(1, 27);
    }

    #[test]
    fn test_prune_at_depth_classification() {
        let generator = PruneAtDepthGenerator::new(1, 2);
        let mut seq = PartialSequence::new();

        assert_eq!(generator.step(&seq), StepResult::Choices(2));

        seq.push('a');
        assert_eq!(generator.step(&seq), StepResult::Prune);
    }

    #[test]
    fn test_emit_root_classification() {
        let generator = EmitRootGenerator;
        let seq = PartialSequence::new();
        assert_eq!(generator.step(&seq), StepResult::Emit);
    }
}
