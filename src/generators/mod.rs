// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Concrete problem instances for the search engine.
//!
//! - [`keypad`]: letter combinations for a digit string (fixed-depth
//!   Cartesian product over per-position alphabets)
//! - [`balanced`]: well-formed parenthesizations (depth-bounded constrained
//!   tree search)
//! - [`test`]: toy generators for exercising the engine in isolation

pub mod balanced;
pub mod keypad;
pub mod test;

pub use balanced::enumerate_balanced;
pub use keypad::{enumerate_combinations, AlphabetTable};
