// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Well-formed parenthesization generator.
//!
//! Enumerates every string of length `2n` over `{OPEN, CLOSE}` in which
//! every prefix has at least as many opens as closes and the totals are
//! equal. The guard conditions prune invalid branches at the node where
//! they would arise, so no invalid string is ever materialized; there is
//! no generate-then-filter pass.
//!
//! The number of solutions is the Catalan number C(n).

use crate::engine::{Generator, SearchEngine, StepResult};
use crate::errors::EnumerationError;
use crate::sequence::PartialSequence;

/// The opening symbol.
pub const OPEN: char = '(';

/// The closing symbol.
pub const CLOSE: char = ')';

/// Generator for balanced sequences with a fixed pair budget.
///
/// Each node is classified from `(open, close)` counted fresh from the
/// buffer:
/// - `open < pairs`: OPEN is a legal extension
/// - `close < open`: CLOSE is a legal extension
/// - `open == close == pairs`: both guards are false, the node is a leaf
///   and is emitted
///
/// Every non-terminal node has at least one legal extension, so the
/// generator never returns `Prune`.
#[derive(Debug)]
struct BalancedGenerator {
    /// Number of OPEN/CLOSE pairs in every solution.
    pairs: usize,
}

impl Generator for BalancedGenerator {
    fn step(&self, seq: &PartialSequence) -> StepResult {
        let open = seq.count(OPEN);
        let close = seq.len() - open;

        if open == self.pairs && close == self.pairs {
            return StepResult::Emit;
        }

        let mut choices = 0;
        if open < self.pairs {
            choices += 1;
        }
        if close < open {
            choices += 1;
        }
        StepResult::Choices(choices)
    }

    fn symbol(&self, seq: &PartialSequence, choice: usize) -> char {
        // OPEN is always candidate 0 when legal, so enumeration order is
        // open-before-close at every node.
        let open = seq.count(OPEN);
        if open < self.pairs && choice == 0 {
            OPEN
        } else {
            CLOSE
        }
    }

    fn name(&self) -> &str {
        "Balanced"
    }
}

/// Enumerate all well-formed parenthesizations with `n` pairs.
///
/// Output order is depth-first with OPEN tried before CLOSE at each node,
/// which is lexicographic order under `OPEN < CLOSE`. `n == 0` yields
/// exactly one solution, the empty string.
///
/// # Errors
///
/// Returns [`EnumerationError::InvalidArgument`] for negative `n`.
///
/// # Example
///
/// ```
/// use seq_enum::enumerate_balanced;
///
/// let wellformed = enumerate_balanced(3).unwrap();
/// assert_eq!(
///     wellformed,
///     vec!["((()))", "(()())", "(())()", "()(())", "()()()"]
/// );
///
/// assert_eq!(enumerate_balanced(0).unwrap(), vec![String::new()]);
/// assert!(enumerate_balanced(-1).is_err());
/// ```
pub fn enumerate_balanced(n: i32) -> Result<Vec<String>, EnumerationError> {
    if n < 0 {
        return Err(EnumerationError::InvalidArgument { value: n as i64 });
    }

    let mut engine = SearchEngine::new(BalancedGenerator { pairs: n as usize });
    Ok(engine.enumerate())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_pairs_is_single_empty_string() {
        assert_eq!(enumerate_balanced(0).unwrap(), vec![String::new()]);
    }

    #[test]
    fn test_one_pair() {
        assert_eq!(enumerate_balanced(1).unwrap(), vec!["()"]);
    }

    #[test]
    fn test_three_pairs_concrete_order() {
        assert_eq!(
            enumerate_balanced(3).unwrap(),
            vec!["((()))", "(()())", "(())()", "()(())", "()()()"]
        );
    }

    #[test]
    fn test_catalan_counts() {
        for (n, catalan) in [(0, 1), (1, 1), (2, 2), (3, 5), (4, 14)] {
            assert_eq!(enumerate_balanced(n).unwrap().len(), catalan);
        }
    }

    #[test]
    fn test_negative_budget_rejected() {
        assert_eq!(
            enumerate_balanced(-1),
            Err(EnumerationError::InvalidArgument { value: -1 })
        );
    }

    #[test]
    fn test_every_solution_is_well_formed() {
        for s in enumerate_balanced(5).unwrap() {
            assert_eq!(s.len(), 10);

            let mut depth = 0i64;
            for c in s.chars() {
                match c {
                    OPEN => depth += 1,
                    CLOSE => depth -= 1,
                    other => panic!("Unexpected symbol '{}'", other),
                }
                assert!(depth >= 0, "Prefix of {:?} closes more than it opens", s);
            }
            assert_eq!(depth, 0);
        }
    }
}
