// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive depth-first search engine.
//!
//! This module implements a backtracking engine that enumerates every
//! solution a [`Generator`] describes. The engine maintains an explicit
//! stack of frames, one per open node, and a single shared
//! [`PartialSequence`] buffer restored by push/pop discipline.
//!
//! # Architecture
//!
//! Each stack frame tracks:
//! - How many children the node has (from `Choices(n)`)
//! - Which child is explored next
//!
//! The execution model:
//! 1. Classify the root with `step`
//! 2. On `Choices(n)`: open a frame, explore children 0..n in order
//! 3. Entering a child pushes its symbol onto the buffer
//! 4. On `Emit`: record the buffer, pop the symbol, continue with siblings
//! 5. On `Prune`: pop the symbol, continue with siblings
//! 6. A frame with no children left is closed and its incoming symbol popped
//!
//! The traversal invariant: the buffer length equals the frame stack depth
//! minus one (the root frame has no incoming symbol). Solutions are
//! collected in discovery order, so enumeration order is depth-first with
//! the leftmost candidate first.
//!
//! # Example
//!
//! ```
//! use seq_enum::engine::{Generator, SearchEngine, StepResult};
//! use seq_enum::sequence::PartialSequence;
//!
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
//! }
//!
//! let mut engine = SearchEngine::new(BitStrings { length: 2 });
//! assert_eq!(engine.enumerate(), vec!["00", "01", "10", "11"]);
//! ```

pub mod generator;

pub use generator::{Generator, StepResult};

use crate::sequence::PartialSequence;
use crate::stats::{Counter, Statistics};

/// Initial capacity of the frame stack.
const STACK_CAPACITY: usize = 64;

/// Stack frame tracking the exploration state of one open node.
#[derive(Debug)]
struct Frame {
    /// Total number of children (from `Choices(n)`).
    num_choices: usize,

    /// Next child to explore. The frame is exhausted when this reaches
    /// num_choices.
    current_choice: usize,
}

/// Search engine that exhaustively enumerates a generator's solutions.
///
/// The engine owns the generator (Tier 1, immutable during search) and all
/// traversal state (Tier 2, mutable). Enumeration is single-threaded,
/// synchronous, and deterministic; independent engines never share state.
pub struct SearchEngine<G: Generator> {
    /// The problem instance being enumerated.
    generator: G,

    /// Stack of open nodes, innermost last.
    stack: Vec<Frame>,

    /// Counters for the most recent enumeration.
    stats: Statistics,
}

impl<G: Generator> SearchEngine<G> {
    /// Create a new search engine for the given generator.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            stack: Vec::with_capacity(STACK_CAPACITY),
            stats: Statistics::new(),
        }
    }

    /// Run the search to completion, returning every solution in discovery
    /// order.
    ///
    /// The traversal is depth-first with choice 0 explored first, so output
    /// order is fully determined by the generator's candidate ordering.
    /// Each call starts from a fresh buffer; statistics are reset.
    ///
    /// # Panics
    ///
    /// Panics if the traversal exceeds [`PartialSequence::MAX_DEPTH`],
    /// which indicates a generator that never reaches a terminal node.
    pub fn enumerate(&mut self) -> Vec<String> {
        let mut seq = PartialSequence::new();
        let mut results = Vec::new();

        self.stack.clear();
        self.stats = Statistics::new();

        // Classify the root. An emitting root is the whole search: the
        // buffer is empty, so the single solution is the empty string.
        self.stats.increment(Counter::NodesVisited);
        match self.generator.step(&seq) {
            StepResult::Emit => {
                self.stats.increment(Counter::SolutionsEmitted);
                results.push(String::new());
                return results;
            }
            StepResult::Prune => {
                self.stats.increment(Counter::BranchesPruned);
                return results;
            }
            StepResult::Choices(n) => {
                self.stack.push(Frame {
                    num_choices: n,
                    current_choice: 0,
                });
            }
        }

        // Main traversal loop
        loop {
            // Take the next unexplored child of the innermost open node.
            let next = match self.stack.last_mut() {
                None => break, // Every node closed: enumeration complete
                Some(frame) => {
                    if frame.current_choice < frame.num_choices {
                        let choice = frame.current_choice;
                        frame.current_choice += 1;
                        Some(choice)
                    } else {
                        None
                    }
                }
            };

            let Some(choice) = next else {
                // Node exhausted: close its frame and undo the symbol that
                // led here. The root frame has no incoming symbol.
                self.stack.pop();
                if !self.stack.is_empty() {
                    seq.pop();
                }
                continue;
            };

            // Enter the child: push exactly one symbol.
            let symbol = self.generator.symbol(&seq, choice);
            seq.push(symbol);
            self.stats.increment(Counter::NodesVisited);

            match self.generator.step(&seq) {
                StepResult::Emit => {
                    // Leaf: record and undo. Emitting nodes never branch.
                    self.stats.increment(Counter::SolutionsEmitted);
                    results.push(seq.as_str().to_owned());
                    seq.pop();
                }
                StepResult::Prune => {
                    self.stats.increment(Counter::BranchesPruned);
                    seq.pop();
                }
                StepResult::Choices(n) => {
                    self.stack.push(Frame {
                        num_choices: n,
                        current_choice: 0,
                    });
                }
            }
        }

        results
    }

    /// Get statistics for the most recent enumeration.
    pub fn statistics(&self) -> &Statistics {
        &self.stats
    }
}
