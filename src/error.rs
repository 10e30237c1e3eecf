// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for the braid search.
//!
//! Every error here is a contract violation detected before or instead of
//! searching. A candidate that simply does not reproduce the target is not an
//! error; see [`crate::chunk::Verification`].

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BraidError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BraidError {
    /// A supplied vector does not have the length the column requires.
    #[error("{what} has length {actual}, expected {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Wire counts must be even and at least 2.
    #[error("invalid wire count {wire_count}: must be even and at least 2")]
    InvalidWireCount { wire_count: usize },

    /// The minimum color multiset does not fit in the wire budget.
    #[error("assortment needs {required} wires but the budget is {budget}")]
    InfeasibleAssortment { required: usize, budget: usize },

    #[error("unknown crossing rule: {0}")]
    UnknownCrossingRule(String),

    #[error("node ({column}, {row}) is outside the pattern")]
    NodeOutOfRange { column: usize, row: usize },
}
