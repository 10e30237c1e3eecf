// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column layout: which wires meet at which node.
//!
//! Columns alternate between two parities. In an even column the nodes sit
//! between wire pairs `(0,1), (2,3), ...`, so there are `wire_count / 2`
//! nodes. In an odd column they sit between `(1,2), (3,4), ...`, giving one
//! node fewer; the first and last wire pass through untouched.

use crate::error::{BraidError, Result};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Parity {
    Even,
    Odd,
}

impl Parity {
    /// Parity of the column at `column_index` in a pattern.
    pub fn of_column(column_index: usize) -> Self {
        if column_index % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "even"),
            Parity::Odd => write!(f, "odd"),
        }
    }
}

/// Wire count and parity of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColumnShape {
    wire_count: usize,
    parity: Parity,
}

impl ColumnShape {
    /// Create a shape, rejecting odd or too small wire counts.
    pub fn new(wire_count: usize, parity: Parity) -> Result<Self> {
        if wire_count < 2 || wire_count % 2 != 0 {
            return Err(BraidError::InvalidWireCount { wire_count });
        }
        Ok(Self { wire_count, parity })
    }

    /// Derive the parity from the number of target nodes.
    ///
    /// A column is even iff it has `wire_count / 2` nodes, odd iff it has
    /// `wire_count / 2 - 1`. Anything else is a shape mismatch.
    pub fn from_node_count(wire_count: usize, node_count: usize) -> Result<Self> {
        let even = Self::new(wire_count, Parity::Even)?;
        if node_count == even.node_count() {
            return Ok(even);
        }
        let odd = Self::new(wire_count, Parity::Odd)?;
        if node_count == odd.node_count() {
            return Ok(odd);
        }
        Err(BraidError::ShapeMismatch {
            what: "target node colors",
            expected: even.node_count(),
            actual: node_count,
        })
    }

    pub fn wire_count(&self) -> usize {
        self.wire_count
    }

    pub fn parity(&self) -> Parity {
        self.parity
    }

    pub fn is_even(&self) -> bool {
        self.parity == Parity::Even
    }

    pub fn node_count(&self) -> usize {
        match self.parity {
            Parity::Even => self.wire_count / 2,
            Parity::Odd => self.wire_count / 2 - 1,
        }
    }

    /// Input (and output) wire positions of a node, as `(left, right)`.
    #[inline]
    pub fn node_wires(&self, node: usize) -> (usize, usize) {
        debug_assert!(node < self.node_count(), "node {} out of range", node);
        match self.parity {
            Parity::Even => (2 * node, 2 * node + 1),
            Parity::Odd => (2 * node + 1, 2 * node + 2),
        }
    }

    /// The wires that pass through an odd column untouched.
    pub fn boundary_wires(&self) -> Option<(usize, usize)> {
        match self.parity {
            Parity::Even => None,
            Parity::Odd => Some((0, self.wire_count - 1)),
        }
    }
}
