// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Basic braid types.
//!
//! - Color: wire and node colors
//! - CrossingRule: how two wires combine at a node
//! - ColumnShape: which wire positions meet at which node

pub mod color;
pub mod column;
pub mod crossing;

// Re-export for convenience
pub use color::{colors, Color, ColorRegistry, BACKGROUND, DEFAULT_PALETTE_SIZE};
pub use column::{ColumnShape, Parity};
pub use crossing::CrossingRule;
