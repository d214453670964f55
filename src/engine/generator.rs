// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator trait for exhaustive backtracking search.
//!
//! The search engine explores a tree of partial sequences. A generator
//! classifies each node of that tree: either the buffer is a complete
//! solution, or it can be extended by one of `n` ordered candidate symbols,
//! or the branch is abandoned.
//!
//! # Example
//!
//! ```
//! use seq_enum::engine::{Generator, StepResult};
//! use seq_enum::sequence::PartialSequence;
//!
//! /// Enumerates all bit strings of a fixed length.
//! #[derive(Debug)]
//! struct BitStrings {
//!     length: usize,
//! }
//!
//! impl Generator for BitStrings {
//!     fn step(&self, seq: &PartialSequence) -> StepResult {
//!         if seq.len() == self.length {
//!             StepResult::Emit
//!         } else {
//!             StepResult::Choices(2)
//!         }
//!     }
//!
//!     fn symbol(&self, _seq: &PartialSequence, choice: usize) -> char {
//!         if choice == 0 { '0' } else { '1' }
//!     }
//!
//!     fn name(&self) -> &str {
//!         "BitStrings"
//!     }
//! }
//! ```

use crate::sequence::PartialSequence;
use std::fmt::Debug;

/// Classification of one node in the search tree.
///
/// Generators can return:
/// - `Emit`: the buffer is a complete solution; record it and backtrack
/// - `Choices(n)`: the node has n ordered extensions to explore
/// - `Prune`: the node cannot lead to a solution; backtrack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    /// The current buffer is a complete solution. It is recorded and the
    /// engine backtracks; an emitting node is a leaf, never a branch point.
    Emit,

    /// The node has `n` candidate extensions. The engine will call
    /// `symbol(seq, choice)` for each choice in 0..n, in order, exploring
    /// the resulting child subtrees depth-first. `Choices(0)` is a
    /// childless interior node and is abandoned immediately.
    Choices(usize),

    /// The node cannot be extended to a solution. The engine backtracks
    /// without recording anything.
    Prune,
}

/// Trait for problem instances run by the search engine.
///
/// A generator is the immutable (Tier 1) description of one enumeration
/// problem. All mutable traversal state lives in the engine and the
/// [`PartialSequence`]; `step` and `symbol` must be pure functions of the
/// buffer contents, evaluated fresh at each node.
///
/// # Lifecycle
///
/// 1. Engine calls `step` on the root (empty buffer)
/// 2. On `Choices(n)`: for each choice in order, engine pushes
///    `symbol(seq, choice)` and recurses into the child node
/// 3. On `Emit`: engine records the buffer and backtracks
/// 4. On `Prune`: engine backtracks without recording
///
/// The engine guarantees that `symbol` is only called with `choice < n`
/// where `n` came from the matching `step` classification.
pub trait Generator: Debug {
    /// Classify the node reached with the given buffer contents.
    ///
    /// Must not observe anything other than `seq` and the generator's own
    /// immutable problem data: the same buffer must always classify the
    /// same way.
    fn step(&self, seq: &PartialSequence) -> StepResult;

    /// The symbol extending the current node for the given choice.
    ///
    /// Called only after `step` returned `Choices(n)`, with `choice < n`.
    /// Candidate order defines output order: choice 0 is explored first.
    #[allow(unused)]
    fn symbol(&self, seq: &PartialSequence, choice: usize) -> char {
        // Generators that never return Choices have no symbols to offer.
        panic!("{}::symbol should never be called", self.name());
    }

    /// Optional: Get a name for this generator (for debugging).
    ///
    /// Default implementation returns the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
