// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Multi-column braid patterns.
//!
//! A pattern is a grid of node colors. Column `c` has the parity of `c`:
//! even columns have `wire_count / 2` nodes, odd columns one fewer. Fresh
//! nodes hold the background color.
//!
//! The pattern is an in-memory model only; how it is stored on disk is up to
//! the caller.
//!
//! # Example
//!
//! ```
//! use braid_search::geometry::Color;
//! use braid_search::pattern::Pattern;
//!
//! let mut pattern = Pattern::new(6, 4).unwrap();
//! pattern.set_node_color(0, 0, Color::new(1)).unwrap();
//! pattern.set_node_color(0, 1, Color::new(3)).unwrap();
//! pattern.set_node_color(0, 2, Color::new(5)).unwrap();
//!
//! let assortment = pattern.wire_assortment();
//! assert_eq!(assortment.to_string(), "{0:3, 1:1, 3:1, 5:1}");
//! assert!(pattern.validate_assortment(&assortment));
//! ```

use crate::assortment::{minimal_distribution, Assortment, MinimalDistribution};
use crate::chunk::ChunkSolver;
use crate::error::{BraidError, Result};
use crate::geometry::{Color, ColumnShape, Parity, BACKGROUND};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    wire_count: usize,
    columns: Vec<Vec<Color>>,
}

impl Pattern {
    /// Create a pattern filled with the background color.
    pub fn new(wire_count: usize, column_count: usize) -> Result<Self> {
        let mut pattern = Self {
            wire_count,
            columns: Vec::new(),
        };
        pattern.reshape(wire_count, column_count)?;
        Ok(pattern)
    }

    /// Build a pattern from explicit columns.
    ///
    /// Column `c` must have the node count of a column with parity `c`.
    pub fn from_columns(wire_count: usize, columns: Vec<Vec<Color>>) -> Result<Self> {
        for (index, column) in columns.iter().enumerate() {
            let shape = ColumnShape::new(wire_count, Parity::of_column(index))?;
            if column.len() != shape.node_count() {
                return Err(BraidError::ShapeMismatch {
                    what: "pattern column",
                    expected: shape.node_count(),
                    actual: column.len(),
                });
            }
        }
        // Zero columns still need a valid wire count.
        ColumnShape::new(wire_count, Parity::Even)?;
        Ok(Self {
            wire_count,
            columns,
        })
    }

    pub fn wire_count(&self) -> usize {
        self.wire_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_shape(&self, column: usize) -> Result<ColumnShape> {
        ColumnShape::new(self.wire_count, Parity::of_column(column))
    }

    pub fn node_color(&self, column: usize, row: usize) -> Option<Color> {
        self.columns.get(column)?.get(row).copied()
    }

    pub fn set_node_color(&mut self, column: usize, row: usize, color: Color) -> Result<()> {
        let node = self
            .columns
            .get_mut(column)
            .and_then(|c| c.get_mut(row))
            .ok_or(BraidError::NodeOutOfRange { column, row })?;
        *node = color;
        Ok(())
    }

    /// Target colors of one column, top to bottom.
    pub fn column(&self, column: usize) -> Option<&[Color]> {
        self.columns.get(column).map(Vec::as_slice)
    }

    pub fn columns(&self) -> impl Iterator<Item = &[Color]> {
        self.columns.iter().map(Vec::as_slice)
    }

    /// Change the wire count, keeping every node that still exists.
    pub fn set_wire_count(&mut self, wire_count: usize) -> Result<()> {
        self.reshape(wire_count, self.columns.len())
    }

    /// Change the column count, keeping every node that still exists.
    pub fn set_column_count(&mut self, column_count: usize) -> Result<()> {
        self.reshape(self.wire_count, column_count)
    }

    fn reshape(&mut self, wire_count: usize, column_count: usize) -> Result<()> {
        // Validate before touching anything.
        ColumnShape::new(wire_count, Parity::Even)?;
        self.columns.resize_with(column_count, Vec::new);
        for (index, column) in self.columns.iter_mut().enumerate() {
            let shape = ColumnShape::new(wire_count, Parity::of_column(index))?;
            column.resize(shape.node_count(), BACKGROUND);
        }
        self.wire_count = wire_count;
        Ok(())
    }

    /// Per-color maximum over all columns and the resulting wire minimum.
    pub fn minimal_distribution(&self) -> MinimalDistribution {
        minimal_distribution(&self.columns)
    }

    /// The minimum number of wires of each color the pattern needs.
    pub fn wire_assortment(&self) -> Assortment {
        self.minimal_distribution().assortment
    }

    /// True iff the assortment fits in this pattern's wires.
    pub fn validate_assortment(&self, assortment: &Assortment) -> bool {
        assortment.validate(self.wire_count)
    }

    /// A solver for one column.
    pub fn chunk(&self, column: usize) -> Result<ChunkSolver> {
        let target = self
            .columns
            .get(column)
            .ok_or(BraidError::NodeOutOfRange { column, row: 0 })?;
        ChunkSolver::new(target.clone(), self.wire_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::colors;

    #[test]
    fn test_new_pattern_shape() {
        let pattern = Pattern::new(8, 3).unwrap();
        assert_eq!(pattern.column_count(), 3);
        assert_eq!(pattern.column(0).unwrap().len(), 4);
        assert_eq!(pattern.column(1).unwrap().len(), 3);
        assert_eq!(pattern.column(2).unwrap().len(), 4);
        assert!(pattern.columns().flatten().all(|&c| c == BACKGROUND));
        assert_eq!(pattern.column(3), None);
    }

    #[test]
    fn test_invalid_wire_count() {
        assert_eq!(
            Pattern::new(7, 2),
            Err(BraidError::InvalidWireCount { wire_count: 7 })
        );
    }

    #[test]
    fn test_set_node_color() {
        let mut pattern = Pattern::new(6, 2).unwrap();
        pattern.set_node_color(1, 1, Color::new(4)).unwrap();
        assert_eq!(pattern.node_color(1, 1), Some(Color::new(4)));
        assert_eq!(
            pattern.set_node_color(1, 2, Color::new(4)),
            Err(BraidError::NodeOutOfRange { column: 1, row: 2 })
        );
        assert_eq!(pattern.node_color(5, 0), None);
    }

    #[test]
    fn test_resize_keeps_known_nodes() {
        let mut pattern = Pattern::new(6, 2).unwrap();
        pattern.set_node_color(0, 2, Color::new(7)).unwrap();
        pattern.set_node_color(1, 0, Color::new(8)).unwrap();

        pattern.set_wire_count(8).unwrap();
        assert_eq!(pattern.column(0), Some(&colors(&[0, 0, 7, 0])[..]));
        assert_eq!(pattern.column(1), Some(&colors(&[8, 0, 0])[..]));

        pattern.set_wire_count(4).unwrap();
        assert_eq!(pattern.column(0), Some(&colors(&[0, 0])[..]));
        assert_eq!(pattern.column(1), Some(&colors(&[8])[..]));

        pattern.set_column_count(3).unwrap();
        assert_eq!(pattern.column(2), Some(&colors(&[0, 0])[..]));
        pattern.set_column_count(1).unwrap();
        assert_eq!(pattern.column_count(), 1);

        assert!(pattern.set_wire_count(5).is_err());
        assert_eq!(pattern.wire_count(), 4);
    }

    #[test]
    fn test_from_columns() {
        let pattern = Pattern::from_columns(6, vec![colors(&[1, 3, 5]), colors(&[2, 2])]).unwrap();
        assert_eq!(pattern.column_shape(1).unwrap().node_count(), 2);
        assert_eq!(
            Pattern::from_columns(6, vec![colors(&[1, 3])]),
            Err(BraidError::ShapeMismatch {
                what: "pattern column",
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_wire_assortment() {
        let pattern = Pattern::from_columns(
            6,
            vec![colors(&[1, 1, 2]), colors(&[2, 2]), colors(&[0, 1, 0])],
        )
        .unwrap();
        let assortment = pattern.wire_assortment();
        assert_eq!(assortment.to_string(), "{0:2, 1:2, 2:2}");
        assert!(pattern.validate_assortment(&assortment));
        assert_eq!(pattern.minimal_distribution().minimum_wire_count, 6);

        let mut too_many = assortment.clone();
        too_many.raise(Color::new(3), 1);
        assert!(!pattern.validate_assortment(&too_many));
    }

    #[test]
    fn test_chunk() {
        let pattern = Pattern::new(6, 2).unwrap();
        assert!(pattern.chunk(0).unwrap().is_even_column());
        assert!(!pattern.chunk(1).unwrap().is_even_column());
        assert!(pattern.chunk(2).is_err());
    }
}
