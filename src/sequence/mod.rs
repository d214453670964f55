// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The shared mutable symbol buffer for backtracking traversal.
//!
//! A single [`PartialSequence`] is reused across an entire search. Each edge
//! taken in the search tree pushes exactly one symbol; abandoning that edge
//! pops exactly that symbol. Under this discipline the buffer length always
//! equals the current traversal depth, and undoing a step restores the exact
//! prior symbol sequence.
//!
//! The buffer is deliberately not shared across sibling branches except via
//! push/pop: each branch sees the sequence state as it was before its
//! siblings ran.

/// The partial solution being built by a depth-first traversal.
///
/// Owned by a single search; mutated only by appending and removing the
/// last symbol.
#[derive(Debug)]
pub struct PartialSequence {
    /// Symbols pushed so far, in order.
    symbols: String,

    /// Number of symbols currently in the buffer.
    ///
    /// Tracked separately because `String::len` counts bytes, not symbols.
    depth: usize,
}

impl PartialSequence {
    /// Maximum traversal depth.
    ///
    /// Exceeding this indicates a runaway generator (a bug), not a
    /// recoverable input error.
    pub const MAX_DEPTH: usize = 4096;

    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self {
            symbols: String::with_capacity(64),
            depth: 0,
        }
    }

    /// Append one symbol.
    ///
    /// # Panics
    ///
    /// Panics if the buffer exceeds MAX_DEPTH symbols.
    pub fn push(&mut self, symbol: char) {
        if self.depth >= Self::MAX_DEPTH {
            panic!("Sequence overflow: exceeded {} symbols", Self::MAX_DEPTH);
        }
        self.symbols.push(symbol);
        self.depth += 1;
    }

    /// Remove and return the most recently pushed symbol.
    ///
    /// Returns None if the buffer is empty.
    pub fn pop(&mut self) -> Option<char> {
        let symbol = self.symbols.pop();
        if symbol.is_some() {
            self.depth -= 1;
        }
        symbol
    }

    /// Number of symbols in the buffer (== current traversal depth).
    pub fn len(&self) -> usize {
        self.depth
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.depth == 0
    }

    /// View the buffer contents as a string slice.
    pub fn as_str(&self) -> &str {
        &self.symbols
    }

    /// Count occurrences of one symbol in the buffer.
    pub fn count(&self, symbol: char) -> usize {
        self.symbols.chars().filter(|&c| c == symbol).count()
    }
}

impl Default for PartialSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_new() {
        let seq = PartialSequence::new();
        assert_eq!(seq.len(), 0);
        assert!(seq.is_empty());
        assert_eq!(seq.as_str(), "");
    }

    #[test]
    fn test_push_and_pop() {
        let mut seq = PartialSequence::new();

        seq.push('a');
        seq.push('b');
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.as_str(), "ab");

        assert_eq!(seq.pop(), Some('b'));
        assert_eq!(seq.len(), 1);
        assert_eq!(seq.as_str(), "a");

        assert_eq!(seq.pop(), Some('a'));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_pop_empty() {
        let mut seq = PartialSequence::new();
        assert_eq!(seq.pop(), None);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_pop_restores_prior_state() {
        let mut seq = PartialSequence::new();

        seq.push('(');
        seq.push('(');
        let before = seq.as_str().to_owned();

        // One step down, then undo
        seq.push(')');
        assert_eq!(seq.as_str(), "(()");
        seq.pop();

        assert_eq!(seq.as_str(), before);
        assert_eq!(seq.len(), 2);
    }

    #[test]
    fn test_count() {
        let mut seq = PartialSequence::new();
        seq.push('(');
        seq.push('(');
        seq.push(')');

        assert_eq!(seq.count('('), 2);
        assert_eq!(seq.count(')'), 1);
        assert_eq!(seq.count('x'), 0);
    }

    #[test]
    #[should_panic(expected = "Sequence overflow")]
    fn test_sequence_overflow() {
        let mut seq = PartialSequence::new();

        for _ in 0..PartialSequence::MAX_DEPTH + 1 {
            seq.push('a');
        }
    }
}
