// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive backtracking enumeration of constrained symbol sequences.
//!
//! This crate provides a small depth-first search engine that enumerates
//! every completion of a partial symbol sequence, together with two concrete
//! instantiations:
//!
//! - [`enumerate_combinations`]: all letter combinations for a digit string,
//!   given a per-digit alphabet table (the phone keypad problem).
//! - [`enumerate_balanced`]: all well-formed parenthesizations with `n`
//!   pairs (counted by the Catalan numbers).
//!
//! # Architecture
//!
//! Each search separates its data into two tiers:
//!
//! ## Tier 1: Problem data (immutable)
//!
//! Fixed for the lifetime of a search and never modified during traversal:
//! - The alphabet table mapping each digit to its ordered letters
//! - The pair budget `n` for balanced sequences
//!
//! ## Tier 2: Traversal state (mutable)
//!
//! State that changes as the search explores and backtracks:
//! - [`PartialSequence`] - the single symbol buffer shared by the whole
//!   traversal, restored by strict push/pop discipline
//! - The engine's frame stack - one frame per open node, tracking which
//!   child is explored next
//!
//! # Search Algorithm
//!
//! A [`Generator`] classifies each node of the search tree: emit the buffer
//! as a solution, expand into `n` ordered children, or abandon the branch.
//! The [`SearchEngine`] drives an explicit-stack depth-first traversal over
//! those classifications, pushing one symbol per edge and popping it once
//! the subtree below is exhausted. Solutions are collected in discovery
//! order, so output order is deterministic: depth-first, leftmost child
//! first.
//!
//! Every symbol pushed is popped exactly once before control returns to the
//! parent node. Sibling branches therefore always observe the buffer exactly
//! as it was before their predecessors ran.
//!
//! # Example
//!
//! ```
//! use seq_enum::{enumerate_balanced, enumerate_combinations, AlphabetTable};
//!
//! let table = AlphabetTable::keypad();
//! let combos = enumerate_combinations("23", &table).unwrap();
//! assert_eq!(combos.len(), 9);
//! assert_eq!(combos[0], "ad");
//!
//! let wellformed = enumerate_balanced(2).unwrap();
//! assert_eq!(wellformed, vec!["(())", "()()"]);
//! ```
//!
//! # Concurrency
//!
//! Each call builds its own engine and buffer, so concurrent calls on
//! different inputs need no coordination.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod sequence;
pub mod stats;

// Re-export commonly used types
pub use engine::{Generator, SearchEngine, StepResult};
pub use errors::EnumerationError;
pub use generators::balanced::enumerate_balanced;
pub use generators::keypad::{enumerate_combinations, AlphabetTable};
pub use sequence::PartialSequence;
pub use stats::{Counter, Statistics};
