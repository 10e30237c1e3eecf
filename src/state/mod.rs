// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable per-search state.
//!
//! Solvers and assortments are immutable; the only thing that changes while
//! a search runs is its bookkeeping, kept here.

pub mod statistics;

pub use statistics::{Counters, Statistics};
