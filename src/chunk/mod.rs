// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Single-column solver.
//!
//! A [`ChunkSolver`] is an immutable snapshot of one column: its wire count
//! and the color wanted at every node. Trials (input wire colors plus a
//! crossing rule per node) are passed in as parameters, so the same solver
//! can check any number of trials, from any number of threads.
//!
//! # Operations
//!
//! - [`ChunkSolver::propagate`]: push a trial through the column
//! - [`ChunkSolver::verify`]: the same, but stop at the first node whose
//!   color differs from the target
//! - [`ChunkSolver::crossing_assignments`]: every rule assignment, lazily
//! - [`ChunkSolver::solve`]: every (input, assignment) pair that reproduces
//!   the target
//!
//! # Example
//!
//! ```
//! use braid_search::chunk::ChunkSolver;
//! use braid_search::geometry::{colors, CrossingRule};
//!
//! let solver = ChunkSolver::new(colors(&[1, 3, 5]), 6).unwrap();
//! let input = colors(&[1, 2, 3, 4, 5, 6]);
//! let rules = [CrossingRule::RR; 3];
//!
//! let propagation = solver.propagate(&input, &rules).unwrap();
//! assert_eq!(propagation.output_colors(), Some(colors(&[2, 1, 4, 3, 6, 5])));
//! assert!(solver.verify(&input, &rules).unwrap().is_match());
//! ```

pub mod enumerate;
pub mod solve;

pub use enumerate::CrossingAssignments;
pub use solve::{solve_column, Solution, Solutions};

use crate::assortment::Assortment;
use crate::error::{BraidError, Result};
use crate::geometry::{Color, ColumnShape, CrossingRule};
use std::fmt;
use strum::EnumCount;

/// The first node whose color differs from the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub node: usize,
    pub expected: Color,
    pub actual: Color,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node {} has color {} but the target is {}",
            self.node, self.actual, self.expected
        )
    }
}

/// Outcome of [`ChunkSolver::verify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Match,
    Mismatch(Mismatch),
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Node and output wire colors after pushing a trial through a column.
///
/// Nodes without a crossing rule, and the two wires they would produce, are
/// `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Propagation {
    node_colors: Vec<Option<Color>>,
    output: Vec<Option<Color>>,
}

impl Propagation {
    pub fn node_colors(&self) -> &[Option<Color>] {
        &self.node_colors
    }

    pub fn output(&self) -> &[Option<Color>] {
        &self.output
    }

    /// True iff every node had a rule.
    pub fn is_complete(&self) -> bool {
        self.node_colors.iter().all(Option::is_some)
    }

    /// Node colors, if every node had a rule.
    pub fn node_colors_complete(&self) -> Option<Vec<Color>> {
        self.node_colors.iter().copied().collect()
    }

    /// Output wire colors, if every wire is known.
    pub fn output_colors(&self) -> Option<Vec<Color>> {
        self.output.iter().copied().collect()
    }
}

/// Target snapshot of one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkSolver {
    shape: ColumnShape,
    target: Vec<Color>,
}

impl ChunkSolver {
    /// Create a solver for a column.
    ///
    /// The parity follows from the target length: `wire_count / 2` nodes
    /// make an even column, `wire_count / 2 - 1` an odd one.
    pub fn new(target: Vec<Color>, wire_count: usize) -> Result<Self> {
        let shape = ColumnShape::from_node_count(wire_count, target.len())?;
        Ok(Self { shape, target })
    }

    pub fn shape(&self) -> ColumnShape {
        self.shape
    }

    pub fn wire_count(&self) -> usize {
        self.shape.wire_count()
    }

    pub fn node_count(&self) -> usize {
        self.target.len()
    }

    pub fn is_even_column(&self) -> bool {
        self.shape.is_even()
    }

    pub fn target(&self) -> &[Color] {
        &self.target
    }

    /// Input wire positions of a node.
    pub fn input_wires_for_node(&self, node: usize) -> (usize, usize) {
        self.shape.node_wires(node)
    }

    /// Output wire positions of a node (the same as the inputs).
    pub fn output_wires_for_node(&self, node: usize) -> (usize, usize) {
        self.shape.node_wires(node)
    }

    /// Check that an input vector has one color per wire.
    pub fn check_input_wire_colors(&self, input: &[Color]) -> Result<()> {
        if input.len() != self.wire_count() {
            return Err(BraidError::ShapeMismatch {
                what: "input wire colors",
                expected: self.wire_count(),
                actual: input.len(),
            });
        }
        Ok(())
    }

    /// Check that an assignment has one entry per node.
    pub fn check_crossings<C>(&self, crossings: &[C]) -> Result<()> {
        if crossings.len() != self.node_count() {
            return Err(BraidError::ShapeMismatch {
                what: "crossing rules",
                expected: self.node_count(),
                actual: crossings.len(),
            });
        }
        Ok(())
    }

    /// Push input colors through the column.
    ///
    /// `crossings` may be complete (`&[CrossingRule]`) or partial
    /// (`&[Option<CrossingRule>]`); unset nodes are skipped. In an odd
    /// column the first and last wire are copied from the input.
    pub fn propagate<C>(&self, input: &[Color], crossings: &[C]) -> Result<Propagation>
    where
        C: Copy + Into<Option<CrossingRule>>,
    {
        self.check_input_wire_colors(input)?;
        self.check_crossings(crossings)?;

        let mut node_colors = vec![None; self.node_count()];
        let mut output = vec![None; self.wire_count()];
        for (node, &rule) in crossings.iter().enumerate() {
            let rule: Option<CrossingRule> = rule.into();
            let Some(rule) = rule else {
                continue;
            };
            let (l, r) = self.shape.node_wires(node);
            let (color, (left_out, right_out)) = rule.compute(input[l], input[r]);
            node_colors[node] = Some(color);
            output[l] = Some(left_out);
            output[r] = Some(right_out);
        }
        if let Some((first, last)) = self.shape.boundary_wires() {
            output[first] = Some(input[first]);
            output[last] = Some(input[last]);
        }
        Ok(Propagation {
            node_colors,
            output,
        })
    }

    /// Propagate and compare against the target, stopping at the first
    /// mismatching node.
    pub fn verify(&self, input: &[Color], crossings: &[CrossingRule]) -> Result<Verification> {
        self.check_input_wire_colors(input)?;
        self.check_crossings(crossings)?;
        Ok(match self.first_mismatch(input, crossings) {
            None => Verification::Match,
            Some(mismatch) => Verification::Mismatch(mismatch),
        })
    }

    /// Verification without shape checks. Callers guarantee the lengths.
    ///
    /// Only node colors matter for the target, so the output wires are not
    /// computed here.
    #[inline]
    pub(crate) fn first_mismatch(
        &self,
        input: &[Color],
        crossings: &[CrossingRule],
    ) -> Option<Mismatch> {
        for (node, (&rule, &expected)) in crossings.iter().zip(&self.target).enumerate() {
            let (l, r) = self.shape.node_wires(node);
            let actual = rule.node_color(input[l], input[r]);
            if actual != expected {
                return Some(Mismatch {
                    node,
                    expected,
                    actual,
                });
            }
        }
        None
    }

    /// Size of the crossing-rule search space: `4^node_count`.
    ///
    /// Saturates at `u128::MAX`.
    pub fn count_crossing_assignments(&self) -> u128 {
        (CrossingRule::COUNT as u128).saturating_pow(self.node_count() as u32)
    }

    /// Every crossing-rule assignment, lazily, in rule declaration order
    /// with the last node varying fastest.
    pub fn crossing_assignments(&self) -> CrossingAssignments {
        CrossingAssignments::new(self.node_count())
    }

    /// Every (input colors, assignment) pair that reproduces the target.
    ///
    /// Candidate inputs come from `assortment` with this column's wire
    /// count as the budget. Fails before searching if the assortment does
    /// not fit.
    pub fn solve(&self, assortment: &Assortment) -> Result<Solutions<'_>> {
        let candidates = assortment.generate_candidates(self.wire_count())?;
        Ok(Solutions::new(self, candidates))
    }
}
