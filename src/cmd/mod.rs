// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

pub mod args;
pub mod assortment;
pub mod count;
pub mod output;
pub mod pattern;
pub mod solve;
