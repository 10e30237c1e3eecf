// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks of the column search on small, hand-countable cases.
//!
//! These tests validate that:
//! - Crossing enumeration covers exactly 4^n assignments
//! - Candidate generation yields each distinct ordering once
//! - Every solution is a true positive and none is missed
//! - Odd columns pass their boundary wires through

mod common;

use braid_search::chunk::Verification;
use braid_search::geometry::colors;
use braid_search::{ChunkSolver, Solution};
use common::{column_only_assortment, matching_assignment_count, pattern_135, solver_135};
use std::collections::HashSet;

#[test]
fn test_exhaustive_assignments_on_fixed_input() {
    let solver = solver_135();
    assert_eq!(solver.count_crossing_assignments(), 64);

    let input = colors(&[1, 2, 3, 4, 5, 6]);
    let mut matching = 0;
    let mut seen = 0;
    for assignment in solver.crossing_assignments() {
        seen += 1;
        let propagation = solver.propagate(&input, &assignment).unwrap();
        if propagation.node_colors_complete().unwrap() == solver.target() {
            matching += 1;
            assert_eq!(
                solver.verify(&input, &assignment).unwrap(),
                Verification::Match
            );
        } else {
            assert!(!solver.verify(&input, &assignment).unwrap().is_match());
        }
    }
    assert_eq!(seen, 64);
    assert_eq!(matching, 8);
}

#[test]
fn test_pattern_assortment_candidates() {
    let pattern = pattern_135(50);
    let assortment = pattern.wire_assortment();
    assert_eq!(assortment.to_string(), "{0:3, 1:1, 3:1, 5:1}");
    assert!(pattern.validate_assortment(&assortment));

    let candidates: Vec<_> = assortment.generate_candidates(6).unwrap().collect();
    assert_eq!(candidates.len(), 120);
    let unique: HashSet<_> = candidates.iter().cloned().collect();
    assert_eq!(unique.len(), 120);
    assert!(candidates.iter().all(|c| c.len() == 6));
}

#[test]
fn test_column_only_assortment_candidates() {
    let candidates: Vec<_> = column_only_assortment()
        .generate_candidates(6)
        .unwrap()
        .collect();
    assert_eq!(candidates.len(), 540);
    let unique: HashSet<_> = candidates.iter().cloned().collect();
    assert_eq!(unique.len(), 540);
}

#[test]
fn test_full_solve_with_pattern_assortment() {
    let pattern = pattern_135(4);
    let assortment = pattern.wire_assortment();
    let solver = pattern.chunk(0).unwrap();

    let solutions: Vec<Solution> = solver.solve(&assortment).unwrap().collect();
    assert_eq!(solutions.len(), 64);

    // Eight inputs, each with the target colors in the right wire pairs.
    let inputs: HashSet<_> = solutions.iter().map(|s| s.input.clone()).collect();
    assert_eq!(inputs.len(), 8);

    // Stable across runs.
    let again: Vec<Solution> = solver.solve(&assortment).unwrap().collect();
    assert_eq!(solutions, again);
}

#[test]
fn test_every_solution_is_a_true_positive() {
    let solver = solver_135();
    let assortment = column_only_assortment();
    for solution in solver.solve(&assortment).unwrap() {
        let propagation = solver.propagate(&solution.input, &solution.crossings).unwrap();
        assert_eq!(propagation.node_colors_complete().unwrap(), solver.target());
    }
}

#[test]
fn test_no_solution_is_missed() {
    let solver = solver_135();
    let assortment = column_only_assortment();

    let expected: u64 = assortment
        .generate_candidates(6)
        .unwrap()
        .map(|input| matching_assignment_count(&solver, &input))
        .sum();
    let solutions: Vec<_> = solver.solve(&assortment).unwrap().collect();
    assert_eq!(solutions.len() as u64, expected);

    let unique: HashSet<_> = solutions.iter().cloned().collect();
    assert_eq!(unique.len(), solutions.len());
}

#[test]
fn test_odd_column_boundary() {
    let solver = ChunkSolver::new(colors(&[0, 0, 0]), 8).unwrap();
    assert!(!solver.is_even_column());
    let input = colors(&[9, 1, 2, 3, 4, 5, 6, 9]);

    let mut seen = 0;
    for assignment in solver.crossing_assignments() {
        let output = solver
            .propagate(&input, &assignment)
            .unwrap()
            .output_colors()
            .unwrap();
        assert_eq!(output.len(), 8);
        assert_eq!(output[0], input[0]);
        assert_eq!(output[7], input[7]);
        seen += 1;
    }
    assert_eq!(seen, 64);
}

#[test]
fn test_odd_column_solve() {
    // Two middle nodes over wires (1,2) and (3,4); wires 0 and 5 pass through.
    let solver = ChunkSolver::new(colors(&[2, 2]), 6).unwrap();
    let assortment = braid_search::Assortment::from_colors(&colors(&[2, 2, 7]));
    let solutions: Vec<_> = solver.solve(&assortment).unwrap().collect();
    assert!(!solutions.is_empty());

    let expected: u64 = assortment
        .generate_candidates(6)
        .unwrap()
        .map(|input| matching_assignment_count(&solver, &input))
        .sum();
    assert_eq!(solutions.len() as u64, expected);
}

#[test]
fn test_first_solution_only() {
    let solver = solver_135();
    let assortment = pattern_135(2).wire_assortment();
    let mut solutions = solver.solve(&assortment).unwrap();
    let first = solutions.next().unwrap();
    assert!(solver.verify(&first.input, &first.crossings).unwrap().is_match());
    // Stopping early leaves most of the space unexplored.
    let stats = solutions.statistics();
    assert!(stats.get(braid_search::state::Counters::Candidates) < 120);
}

#[test]
fn test_propagate_twice() {
    let solver = solver_135();
    let input = colors(&[5, 3, 1, 0, 0, 0]);
    for assignment in solver.crossing_assignments().take(20) {
        let first = solver.propagate(&input, &assignment).unwrap();
        let second = solver.propagate(&input, &assignment).unwrap();
        assert_eq!(first, second);
    }
}
