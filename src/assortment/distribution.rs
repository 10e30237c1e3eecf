// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal color distribution across a whole pattern.
//!
//! Every column is solved with the same set of wires, so the pattern needs,
//! for each color, as many wires as the column that uses that color most.
//! The sum of these maxima is the smallest wire count that can work.

use crate::assortment::Assortment;
use crate::geometry::Color;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MinimalDistribution {
    /// Per-color maximum occurrence over all columns.
    pub assortment: Assortment,

    /// Sum of the per-color maxima.
    pub minimum_wire_count: usize,
}

impl MinimalDistribution {
    /// True iff the pattern fits in `wire_count` wires.
    pub fn fits(&self, wire_count: usize) -> bool {
        self.minimum_wire_count <= wire_count
    }
}

/// Aggregate the target colors of several columns.
pub fn minimal_distribution<I, C>(columns: I) -> MinimalDistribution
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Color]>,
{
    aggregate(Assortment::new(), columns)
}

/// Like [`minimal_distribution`], but every color in `0..color_count` is
/// listed, with a zero count if no column uses it.
pub fn minimal_distribution_with_palette<I, C>(columns: I, color_count: usize) -> MinimalDistribution
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Color]>,
{
    let seed: Assortment = (0..color_count.min(256))
        .map(|c| (Color::new(c as u8), 0))
        .collect();
    aggregate(seed, columns)
}

fn aggregate<I, C>(mut assortment: Assortment, columns: I) -> MinimalDistribution
where
    I: IntoIterator<Item = C>,
    C: AsRef<[Color]>,
{
    for column in columns {
        assortment.merge_max(&Assortment::from_colors(column.as_ref()));
    }
    let minimum_wire_count = assortment.total();
    MinimalDistribution {
        assortment,
        minimum_wire_count,
    }
}
