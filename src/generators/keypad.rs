// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Letter combinations for a digit string.
//!
//! Each position of the input is substituted by one letter from that
//! digit's alphabet, enumerating the full Cartesian product in depth-first
//! order: position by position, leftmost alphabet entry first.
//!
//! The alphabet table is an explicit read-only value passed into the
//! enumerator, never process-wide global state; given the same input and
//! table the enumeration is purely functional.

use crate::engine::{Generator, SearchEngine, StepResult};
use crate::errors::EnumerationError;
use crate::sequence::PartialSequence;
use std::collections::HashMap;

/// Read-only mapping from an input symbol to its ordered substitute letters.
///
/// Tier 1 problem data: built before the search and never modified during
/// exploration. Entry order within an alphabet defines enumeration order.
///
/// # Example
///
/// ```
/// use seq_enum::AlphabetTable;
///
/// let mut table = AlphabetTable::new();
/// table.insert('x', "01");
/// assert_eq!(table.alphabet('x'), Some("01"));
/// assert_eq!(table.alphabet('y'), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlphabetTable {
    entries: HashMap<char, String>,
}

impl AlphabetTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard phone keypad mapping.
    ///
    /// Digits '2'..'9' map to their letters; '0' and '1' have no entry and
    /// are rejected by [`enumerate_combinations`].
    pub fn keypad() -> Self {
        let mut table = Self::new();
        table.insert('2', "abc");
        table.insert('3', "def");
        table.insert('4', "ghi");
        table.insert('5', "jkl");
        table.insert('6', "mno");
        table.insert('7', "pqrs");
        table.insert('8', "tuv");
        table.insert('9', "wxyz");
        table
    }

    /// Map `symbol` to the ordered letters of `alphabet`.
    ///
    /// Replaces any previous entry for the symbol.
    pub fn insert(&mut self, symbol: char, alphabet: &str) {
        self.entries.insert(symbol, alphabet.to_owned());
    }

    /// Look up the alphabet for a symbol.
    pub fn alphabet(&self, symbol: char) -> Option<&str> {
        self.entries.get(&symbol).map(String::as_str)
    }
}

/// Generator for the Cartesian product over per-position alphabets.
///
/// The buffer length is the position being filled; the node is terminal
/// once every position has a letter.
#[derive(Debug)]
struct CombinationGenerator {
    /// Alphabet for each input position, resolved and validated up front.
    alphabets: Vec<Vec<char>>,
}

impl Generator for CombinationGenerator {
    fn step(&self, seq: &PartialSequence) -> StepResult {
        let position = seq.len();
        if position == self.alphabets.len() {
            StepResult::Emit
        } else {
            StepResult::Choices(self.alphabets[position].len())
        }
    }

    fn symbol(&self, seq: &PartialSequence, choice: usize) -> char {
        self.alphabets[seq.len()][choice]
    }

    fn name(&self) -> &str {
        "Combination"
    }
}

/// Enumerate all letter combinations for `digits` under `table`.
///
/// Produces every string of length `digits.len()` whose i-th character is
/// drawn from the alphabet of the i-th input symbol, ordered depth-first
/// with the leftmost alphabet entry first. The result size is the product
/// of the alphabet sizes.
///
/// The empty input enumerates zero combinations, not a single empty string:
/// `enumerate_combinations("", &table)` is `Ok(vec![])`.
///
/// # Errors
///
/// The whole call is rejected with [`EnumerationError::InvalidSymbol`] if
/// any input symbol is unmapped or maps to an empty alphabet. Validation
/// runs before exploration, so no partial output is ever produced.
///
/// # Example
///
/// ```
/// use seq_enum::{enumerate_combinations, AlphabetTable};
///
/// let table = AlphabetTable::keypad();
/// let combos = enumerate_combinations("23", &table).unwrap();
/// assert_eq!(
///     combos,
///     vec!["ad", "ae", "af", "bd", "be", "bf", "cd", "ce", "cf"]
/// );
///
/// assert!(enumerate_combinations("01", &table).is_err());
/// ```
pub fn enumerate_combinations(
    digits: &str,
    table: &AlphabetTable,
) -> Result<Vec<String>, EnumerationError> {
    // Reject-unmapped policy: the table must be total and non-empty over
    // the input, checked before any exploration.
    let mut alphabets = Vec::with_capacity(digits.len());
    for (position, symbol) in digits.chars().enumerate() {
        match table.alphabet(symbol) {
            Some(letters) if !letters.is_empty() => {
                alphabets.push(letters.chars().collect());
            }
            _ => return Err(EnumerationError::InvalidSymbol { symbol, position }),
        }
    }

    // Zero positions means zero combinations, not one empty combination.
    if alphabets.is_empty() {
        return Ok(Vec::new());
    }

    let mut engine = SearchEngine::new(CombinationGenerator { alphabets });
    Ok(engine.enumerate())
}
