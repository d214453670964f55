// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for sequence enumeration.
//!
//! Both enumerators validate their inputs before any exploration, so a call
//! either fails fast with one of these errors or runs to completion. There
//! are no partial-failure states.

use std::error::Error;
use std::fmt;

/// Errors rejected by input validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    /// Input symbol has no usable entry in the alphabet table.
    ///
    /// Raised for unmapped symbols (e.g. '0' and '1' on the phone keypad)
    /// and for symbols mapped to an empty alphabet. The whole call is
    /// rejected; no partial output is produced.
    InvalidSymbol { symbol: char, position: usize },

    /// Negative pair budget passed to the balanced-sequence generator.
    ///
    /// An empty result collection is the meaningful answer for other
    /// inputs, so a negative budget must be rejected rather than mapped
    /// to it.
    InvalidArgument { value: i64 },
}

impl fmt::Display for EnumerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnumerationError::InvalidSymbol { symbol, position } => {
                write!(
                    f,
                    "Symbol '{}' at position {} has no alphabet entry",
                    symbol, position
                )
            }
            EnumerationError::InvalidArgument { value } => {
                write!(f, "Pair budget {} is negative", value)
            }
        }
    }
}

impl Error for EnumerationError {}
