// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for braided-cord ("kumihimo") pattern columns.
//!
//! A braid is a grid of wires that cross at nodes. At every node the two
//! adjacent wires meet, one of their colors shows on the node, and the wires
//! leave either swapped or not, depending on the node's crossing rule.
//!
//! Given the colors a column should show and a wire budget, this crate finds
//! every input wire ordering and crossing-rule assignment that reproduces the
//! column exactly.
//!
//! # Architecture
//!
//! Leaves first:
//!
//! - [`geometry`]: colors, crossing rules, and column layout (which wires
//!   meet at which node)
//! - [`assortment`]: the minimum multiset of colors a column or pattern
//!   needs, and the candidate input orderings it admits
//! - [`chunk`]: the single-column solver with propagation, verification,
//!   and the lazy solution enumerator
//! - [`pattern`]: an in-memory multi-column grid
//! - [`state`]: search statistics
//!
//! # Search Algorithm
//!
//! 1. Aggregate the minimal color distribution over all columns
//! 2. Generate every distinct input ordering of the wire budget that meets
//!    the minimum
//! 3. For each ordering, try all `4^nodes` crossing assignments, aborting
//!    each check at the first node whose color is wrong
//!
//! # Parallelization
//!
//! The core never spawns threads. A [`chunk::ChunkSolver`] is immutable, and
//! [`chunk::solve_column`] is a pure function, so the columns of a pattern
//! can be solved independently; the `braid` binary does so with rayon.
//!
//! # Example
//!
//! ```
//! use braid_search::prelude::*;
//!
//! let mut pattern = Pattern::new(6, 2).unwrap();
//! for (row, color) in [1, 3, 5].into_iter().enumerate() {
//!     pattern.set_node_color(0, row, Color::new(color)).unwrap();
//! }
//!
//! let assortment = pattern.wire_assortment();
//! let solver = pattern.chunk(0).unwrap();
//! let first = solver.solve(&assortment).unwrap().next().unwrap();
//!
//! let propagation = solver.propagate(&first.input, &first.crossings).unwrap();
//! assert_eq!(propagation.node_colors_complete().unwrap(), solver.target());
//! ```

pub mod assortment;
pub mod chunk;
pub mod error;
pub mod geometry;
pub mod pattern;
pub mod state;

// Re-export commonly used types
pub use assortment::{Assortment, MinimalDistribution};
pub use chunk::{ChunkSolver, Solution, Solutions};
pub use error::{BraidError, Result};
pub use geometry::{Color, CrossingRule};
pub use pattern::Pattern;

pub mod prelude {
    pub use crate::assortment::{minimal_distribution, Assortment};
    pub use crate::chunk::{solve_column, ChunkSolver, Solution, Verification};
    pub use crate::error::BraidError;
    pub use crate::geometry::{colors, Color, CrossingRule};
    pub use crate::pattern::Pattern;
}
