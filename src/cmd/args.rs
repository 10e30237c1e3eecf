// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Argument value types shared by the subcommands.

use braid_search::{Assortment, Color};
use std::str::FromStr;

/// Comma separated colors, e.g. `1,3,5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorList(pub Vec<Color>);

impl FromStr for ColorList {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Ok(ColorList(Vec::new()));
        }
        s.split(',')
            .map(|part| {
                part.parse::<Color>()
                    .map_err(|e| format!("bad color {:?}: {}", part.trim(), e))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(ColorList)
    }
}

/// Comma separated `color:count` pairs, e.g. `0:3,1:1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssortmentArg(pub Assortment);

impl FromStr for AssortmentArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut assortment = Assortment::new();
        for pair in s.split(',').filter(|p| !p.trim().is_empty()) {
            let (color, count) = pair
                .split_once(':')
                .ok_or_else(|| format!("expected color:count, got {:?}", pair.trim()))?;
            let color = color
                .parse::<Color>()
                .map_err(|e| format!("bad color {:?}: {}", color.trim(), e))?;
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("bad count {:?}: {}", count.trim(), e))?;
            assortment.insert(color, count);
        }
        Ok(AssortmentArg(assortment))
    }
}
