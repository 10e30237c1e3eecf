// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color assortments.
//!
//! An assortment maps each color to the minimum number of wires of that color
//! a column (or a whole pattern) needs. Given a wire budget, it generates the
//! candidate input orderings the solver tries.
//!
//! # Example
//!
//! ```
//! use braid_search::assortment::Assortment;
//! use braid_search::geometry::colors;
//!
//! let assortment = Assortment::from_colors(&colors(&[1, 3, 5]));
//! assert_eq!(assortment.total(), 3);
//! assert!(assortment.validate(6));
//!
//! // Three free slots, filled from {1, 3, 5}.
//! let candidates = assortment.generate_candidates(6).unwrap();
//! assert_eq!(candidates.count(), 540);
//! ```

pub mod candidates;
pub mod distribution;

pub use candidates::{Candidates, DistinctPermutations};
pub use distribution::{minimal_distribution, minimal_distribution_with_palette, MinimalDistribution};

use crate::error::{BraidError, Result};
use crate::geometry::Color;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Minimum required count per color.
///
/// Colors with a zero count are kept: they need no wire of their own but
/// may still fill free slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Assortment {
    counts: BTreeMap<Color, usize>,
}

impl Assortment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count how often each color occurs in a column.
    pub fn from_colors(colors: &[Color]) -> Self {
        let mut assortment = Self::new();
        for &color in colors {
            *assortment.counts.entry(color).or_insert(0) += 1;
        }
        assortment
    }

    /// Set the count of a color, replacing any previous count.
    pub fn insert(&mut self, color: Color, count: usize) {
        self.counts.insert(color, count);
    }

    /// Raise the count of a color to at least `count`.
    pub fn raise(&mut self, color: Color, count: usize) {
        let entry = self.counts.entry(color).or_insert(0);
        if *entry < count {
            *entry = count;
        }
    }

    /// Per-color maximum of two assortments.
    pub fn merge_max(&mut self, other: &Assortment) {
        for (color, count) in other.iter() {
            self.raise(color, count);
        }
    }

    /// Required count for a color (0 if absent).
    pub fn get(&self, color: Color) -> usize {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    pub fn contains(&self, color: Color) -> bool {
        self.counts.contains_key(&color)
    }

    /// Sum of all required counts: the minimum wire count.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct colors (including zero counts).
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(color, count)` in ascending color order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, usize)> + '_ {
        self.counts.iter().map(|(&color, &count)| (color, count))
    }

    /// Colors available to the assortment, ascending.
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.counts.keys().copied()
    }

    /// True iff the minimum fits in `budget` wires.
    pub fn validate(&self, budget: usize) -> bool {
        self.total() <= budget
    }

    /// Every distinct input ordering of `budget` wires that contains at
    /// least the required count of each color.
    ///
    /// Free slots are filled from the assortment's own colors. Each distinct
    /// sequence is yielded exactly once; calling again starts over.
    pub fn generate_candidates(&self, budget: usize) -> Result<Candidates> {
        let required = self.total();
        if required > budget {
            return Err(BraidError::InfeasibleAssortment { required, budget });
        }
        let fixed: Vec<Color> = self
            .iter()
            .flat_map(|(color, count)| std::iter::repeat(color).take(count))
            .collect();
        let pool: Vec<Color> = self.colors().collect();
        Ok(Candidates::new(fixed, pool, budget - required))
    }
}

impl FromIterator<(Color, usize)> for Assortment {
    fn from_iter<I: IntoIterator<Item = (Color, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Assortment {
    /// Format as `{0:3, 1:1}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (color, count)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}:{}", color, count)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::colors;

    fn assortment(pairs: &[(u8, usize)]) -> Assortment {
        pairs.iter().map(|&(c, n)| (Color::new(c), n)).collect()
    }

    #[test]
    fn test_from_colors() {
        let a = Assortment::from_colors(&colors(&[1, 3, 1, 0]));
        assert_eq!(a, assortment(&[(0, 1), (1, 2), (3, 1)]));
        assert_eq!(a.total(), 4);
        assert_eq!(a.get(Color::new(1)), 2);
        assert_eq!(a.get(Color::new(9)), 0);
        assert!(!a.contains(Color::new(9)));
    }

    #[test]
    fn test_raise_and_merge() {
        let mut a = assortment(&[(1, 2)]);
        a.raise(Color::new(1), 1);
        assert_eq!(a.get(Color::new(1)), 2);
        a.raise(Color::new(1), 3);
        assert_eq!(a.get(Color::new(1)), 3);

        a.merge_max(&assortment(&[(1, 1), (2, 4)]));
        assert_eq!(a, assortment(&[(1, 3), (2, 4)]));
    }

    #[test]
    fn test_validate() {
        let a = assortment(&[(1, 1), (3, 1), (5, 1)]);
        assert!(a.validate(3));
        assert!(a.validate(6));
        assert!(!a.validate(2));
        assert!(Assortment::new().validate(0));
    }

    #[test]
    fn test_infeasible() {
        let a = assortment(&[(0, 4), (1, 3)]);
        assert_eq!(
            a.generate_candidates(6).err(),
            Some(BraidError::InfeasibleAssortment {
                required: 7,
                budget: 6
            })
        );
    }

    #[test]
    fn test_zero_count_color_is_a_filler() {
        // Color 2 is not required but may fill the free slot.
        let a = assortment(&[(1, 1), (2, 0)]);
        let mut candidates: Vec<Vec<Color>> = a.generate_candidates(2).unwrap().collect();
        candidates.sort();
        assert_eq!(
            candidates,
            vec![colors(&[1, 1]), colors(&[1, 2]), colors(&[2, 1])]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(assortment(&[(3, 1), (0, 3)]).to_string(), "{0:3, 3:1}");
        assert_eq!(Assortment::new().to_string(), "{}");
    }
}
