// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search over candidate inputs and crossing assignments.
//!
//! The search is a nested loop: for every candidate input ordering, every
//! crossing-rule assignment is verified against the target. Verification
//! stops at the first mismatching node, which is what keeps the inner loop
//! cheap: a mismatch at node 0 costs one rule evaluation however many nodes
//! the column has.
//!
//! Results are produced on demand. Dropping the iterator stops the search.

use crate::assortment::{Assortment, Candidates};
use crate::chunk::{ChunkSolver, CrossingAssignments};
use crate::error::Result;
use crate::geometry::{Color, CrossingRule};
use crate::state::statistics::{Counters, Statistics};
use serde::Serialize;
use tracing::{debug, trace};

/// An input ordering together with a crossing assignment that reproduces
/// the target column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Solution {
    pub input: Vec<Color>,
    pub crossings: Vec<CrossingRule>,
}

/// Lazy sequence of solutions for one column.
///
/// Created by [`ChunkSolver::solve`].
pub struct Solutions<'a> {
    solver: &'a ChunkSolver,
    candidates: Candidates,
    current: Option<Vec<Color>>,
    assignments: CrossingAssignments,
    buffer: Vec<CrossingRule>,
    statistics: Statistics,
    finished: bool,
}

impl<'a> Solutions<'a> {
    pub(crate) fn new(solver: &'a ChunkSolver, candidates: Candidates) -> Self {
        debug!(
            wire_count = solver.wire_count(),
            node_count = solver.node_count(),
            even = solver.is_even_column(),
            assignments_per_candidate = %solver.count_crossing_assignments(),
            "starting column search"
        );
        Self {
            solver,
            candidates,
            current: None,
            assignments: solver.crossing_assignments(),
            buffer: Vec::with_capacity(solver.node_count()),
            statistics: Statistics::for_nodes(solver.node_count()),
            finished: false,
        }
    }

    /// Counters so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

impl Iterator for Solutions<'_> {
    type Item = Solution;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            if let Some(input) = self.current.as_ref() {
                while self.assignments.next_into(&mut self.buffer) {
                    self.statistics.increment_counter(Counters::Assignments);
                    match self.solver.first_mismatch(input, &self.buffer) {
                        Some(mismatch) => self.statistics.record_mismatch(mismatch.node),
                        None => {
                            self.statistics.increment_counter(Counters::Solutions);
                            trace!(?input, crossings = ?self.buffer, "solution");
                            return Some(Solution {
                                input: input.clone(),
                                crossings: self.buffer.clone(),
                            });
                        }
                    }
                }
            }

            match self.candidates.next() {
                Some(candidate) => {
                    self.statistics.increment_counter(Counters::Candidates);
                    self.assignments.reset();
                    self.current = Some(candidate);
                }
                None => {
                    self.current = None;
                    self.finished = true;
                    debug!(statistics = %self.statistics, "column search exhausted");
                    return None;
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Solutions<'_> {}

/// Collect every solution of one column.
///
/// A pure function of its arguments, so columns can be solved in parallel
/// by the caller.
pub fn solve_column(
    target: &[Color],
    wire_count: usize,
    assortment: &Assortment,
) -> Result<Vec<Solution>> {
    let solver = ChunkSolver::new(target.to_vec(), wire_count)?;
    let solutions = solver.solve(assortment)?.collect();
    Ok(solutions)
}
