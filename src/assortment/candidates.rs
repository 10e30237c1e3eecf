// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Candidate input orderings.
//!
//! Candidates are built in two layers:
//!
//! 1. Every multiset of filler colors (combinations with repetition from the
//!    assortment's colors) is appended to the fixed minimum multiset.
//! 2. Every distinct ordering of the result is emitted.
//!
//! Distinct orderings are generated directly in lexicographic order, so
//! repeated colors never produce duplicate sequences. Six wires with three
//! colors twice each give 90 sequences rather than 720.

use crate::geometry::Color;
use itertools::Itertools;

/// All distinct orderings of a multiset, in lexicographic order.
///
/// ```
/// use braid_search::assortment::DistinctPermutations;
/// use braid_search::geometry::colors;
///
/// let perms: Vec<_> = DistinctPermutations::new(colors(&[2, 1, 1])).collect();
/// assert_eq!(perms, vec![colors(&[1, 1, 2]), colors(&[1, 2, 1]), colors(&[2, 1, 1])]);
/// ```
#[derive(Debug, Clone)]
pub struct DistinctPermutations {
    current: Vec<Color>,
    done: bool,
}

impl DistinctPermutations {
    pub fn new(mut items: Vec<Color>) -> Self {
        items.sort_unstable();
        Self {
            current: items,
            done: false,
        }
    }

    /// Step `current` to its lexicographic successor.
    ///
    /// Returns false when `current` was the last ordering.
    fn advance(&mut self) -> bool {
        let v = &mut self.current;
        if v.len() < 2 {
            return false;
        }
        // Rightmost ascent.
        let mut i = v.len() - 1;
        while i > 0 && v[i - 1] >= v[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }
        let pivot = i - 1;
        let mut j = v.len() - 1;
        while v[j] <= v[pivot] {
            j -= 1;
        }
        v.swap(pivot, j);
        v[i..].reverse();
        true
    }
}

impl Iterator for DistinctPermutations {
    type Item = Vec<Color>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let item = self.current.clone();
        self.done = !self.advance();
        Some(item)
    }
}

/// Lazy sequence of candidate input orderings for one wire budget.
///
/// Created by [`crate::assortment::Assortment::generate_candidates`].
pub struct Candidates {
    fixed: Vec<Color>,
    fillers: Box<dyn Iterator<Item = Vec<Color>> + Send>,
    current: Option<DistinctPermutations>,
    filler_count: usize,
}

impl Candidates {
    pub(crate) fn new(fixed: Vec<Color>, pool: Vec<Color>, free_slots: usize) -> Self {
        let fillers: Box<dyn Iterator<Item = Vec<Color>> + Send> = if free_slots == 0 {
            Box::new(std::iter::once(Vec::new()))
        } else if pool.is_empty() {
            // Free slots but nothing to fill them with.
            Box::new(std::iter::empty())
        } else {
            Box::new(pool.into_iter().combinations_with_replacement(free_slots))
        };
        Self {
            fixed,
            fillers,
            current: None,
            filler_count: 0,
        }
    }

    /// Number of filler multisets started so far.
    pub fn filler_count(&self) -> usize {
        self.filler_count
    }
}

impl Iterator for Candidates {
    type Item = Vec<Color>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(perms) = self.current.as_mut() {
                if let Some(candidate) = perms.next() {
                    return Some(candidate);
                }
            }
            let filler = self.fillers.next()?;
            self.filler_count += 1;
            let mut multiset = self.fixed.clone();
            multiset.extend(filler);
            self.current = Some(DistinctPermutations::new(multiset));
        }
    }
}

impl std::fmt::Debug for Candidates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidates")
            .field("fixed", &self.fixed)
            .field("filler_count", &self.filler_count)
            .finish_non_exhaustive()
    }
}
