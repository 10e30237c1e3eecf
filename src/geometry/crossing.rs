// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Crossing rules.
//!
//! At every node two adjacent wires meet. The crossing rule decides which of
//! the two incoming colors shows on the node, and on which side each wire
//! leaves.
//!
//! | Rule | node color | (left out, right out) |
//! |------|------------|-----------------------|
//! | LL   | right      | (right, left)         |
//! | RR   | left       | (right, left)         |
//! | LR   | right      | (left, right)         |
//! | RL   | left       | (right, left)         |
//!
//! RR and RL produce the same output wires. Both are kept as separate rules
//! so that enumeration still covers four choices per node.

use crate::error::{BraidError, Result};
use crate::geometry::Color;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter, EnumString};

/// How two wires combine at a node.
///
/// The declaration order is the enumeration order used by the solver.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCountMacro,
    EnumIter,
    EnumString,
)]
pub enum CrossingRule {
    LL,
    RR,
    LR,
    RL,
}

impl CrossingRule {
    /// All rules in enumeration order.
    pub const ALL: [CrossingRule; 4] = [
        CrossingRule::LL,
        CrossingRule::RR,
        CrossingRule::LR,
        CrossingRule::RL,
    ];

    /// Combine the colors of the left and right incoming wires.
    ///
    /// Returns the node color and the outgoing `(left, right)` wire colors.
    #[inline]
    pub fn compute(self, left: Color, right: Color) -> (Color, (Color, Color)) {
        match self {
            CrossingRule::LL => (right, (right, left)),
            CrossingRule::RR => (left, (right, left)),
            CrossingRule::LR => (right, (left, right)),
            CrossingRule::RL => (left, (right, left)),
        }
    }

    /// Just the node color, for verification.
    #[inline]
    pub fn node_color(self, left: Color, right: Color) -> Color {
        self.compute(left, right).0
    }

    /// Position of this rule in [`CrossingRule::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`CrossingRule::index`].
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| BraidError::UnknownCrossingRule(format!("index {}", index)))
    }

    /// Parse a rule name such as `"LR"`.
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| BraidError::UnknownCrossingRule(name.to_string()))
    }
}

/// Numeric codes 1..=4, in declaration order.
impl TryFrom<u8> for CrossingRule {
    type Error = BraidError;

    fn try_from(code: u8) -> Result<Self> {
        match code {
            1 => Ok(CrossingRule::LL),
            2 => Ok(CrossingRule::RR),
            3 => Ok(CrossingRule::LR),
            4 => Ok(CrossingRule::RL),
            _ => Err(BraidError::UnknownCrossingRule(format!("code {}", code))),
        }
    }
}
