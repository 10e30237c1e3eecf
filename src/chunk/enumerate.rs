// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of crossing-rule assignments.
//!
//! The assignments of an `n`-node column are the `4^n` tuples of the
//! Cartesian product of [`CrossingRule::ALL`] with itself. They are counted
//! like an odometer: the last node turns fastest.

use crate::geometry::CrossingRule;
use strum::EnumCount;

/// Lazy iterator over all crossing-rule assignments for a column.
#[derive(Debug, Clone)]
pub struct CrossingAssignments {
    digits: Vec<usize>,
    done: bool,
}

impl CrossingAssignments {
    pub fn new(node_count: usize) -> Self {
        Self {
            digits: vec![0; node_count],
            done: false,
        }
    }

    /// Start over from the first assignment.
    pub fn reset(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.done = false;
    }

    /// Write the current assignment into `buffer` and advance.
    ///
    /// Returns false once exhausted. Lets a caller reuse one buffer for all
    /// `4^n` assignments.
    pub fn next_into(&mut self, buffer: &mut Vec<CrossingRule>) -> bool {
        if self.done {
            return false;
        }
        buffer.clear();
        buffer.extend(self.digits.iter().map(|&d| CrossingRule::ALL[d]));
        self.advance();
        true
    }

    fn advance(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < CrossingRule::COUNT {
                return;
            }
            *digit = 0;
        }
        // Every digit wrapped around.
        self.done = true;
    }
}

impl Iterator for CrossingAssignments {
    type Item = Vec<CrossingRule>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut assignment = Vec::with_capacity(self.digits.len());
        if self.next_into(&mut assignment) {
            Some(assignment)
        } else {
            None
        }
    }
}
