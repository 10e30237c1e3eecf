// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use braid_search::geometry::colors;
use braid_search::{Assortment, ChunkSolver, Color, CrossingRule, Pattern};

/// A 6-wire pattern whose column 0 shows `[1, 3, 5]`, every other node
/// keeping the background color 0.
pub fn pattern_135(column_count: usize) -> Pattern {
    let mut pattern = Pattern::new(6, column_count).unwrap();
    for (row, color) in [1u8, 3, 5].into_iter().enumerate() {
        pattern.set_node_color(0, row, Color::new(color)).unwrap();
    }
    pattern
}

pub fn solver_135() -> ChunkSolver {
    ChunkSolver::new(colors(&[1, 3, 5]), 6).unwrap()
}

pub fn column_only_assortment() -> Assortment {
    Assortment::from_colors(&colors(&[1, 3, 5]))
}

/// Number of crossing assignments that reproduce the target for one input,
/// counted node by node: LL and LR show the right wire, RR and RL the left.
pub fn matching_assignment_count(solver: &ChunkSolver, input: &[Color]) -> u64 {
    solver
        .target()
        .iter()
        .enumerate()
        .map(|(node, &wanted)| {
            let (l, r) = solver.input_wires_for_node(node);
            CrossingRule::ALL
                .iter()
                .filter(|rule| rule.node_color(input[l], input[r]) == wanted)
                .count() as u64
        })
        .product()
}
