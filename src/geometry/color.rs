// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Color type for wires and nodes.
//!
//! A color is an opaque small integer. The search only ever compares colors
//! for equality; how a color looks is the business of [`ColorRegistry`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Number of entries in the default palette.
pub const DEFAULT_PALETTE_SIZE: usize = 12;

/// The color every node of a fresh pattern starts with.
pub const BACKGROUND: Color = Color(0);

/// A color identifier.
///
/// This is a newtype wrapper to provide type safety and prevent mixing
/// colors with wire positions or node indices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Color(u8);

impl Color {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the underlying value.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Get the color as a usize (for array indexing).
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u8>().map(Color)
    }
}

/// Build a color vector from raw values.
///
/// ```
/// use braid_search::geometry::{colors, Color};
///
/// assert_eq!(colors(&[1, 3]), vec![Color::new(1), Color::new(3)]);
/// ```
pub fn colors(values: &[u8]) -> Vec<Color> {
    values.iter().copied().map(Color).collect()
}

/// Display values (hex strings) for colors.
///
/// Presentation only: nothing in the search reads the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRegistry {
    entries: BTreeMap<Color, String>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Get the display value of a color, if registered.
    pub fn get(&self, color: Color) -> Option<&str> {
        self.entries.get(&color).map(String::as_str)
    }

    /// Register (or replace) the display value of a color.
    pub fn set(&mut self, color: Color, hex: impl Into<String>) {
        self.entries.insert(color, hex.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered colors in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &str)> {
        self.entries.iter().map(|(&c, hex)| (c, hex.as_str()))
    }
}

impl Default for ColorRegistry {
    /// White everywhere except 1 = red, 2 = green, 3 = blue.
    fn default() -> Self {
        let mut registry = Self::empty();
        for i in 0..DEFAULT_PALETTE_SIZE as u8 {
            registry.set(Color(i), "#FFFFFF");
        }
        registry.set(Color(1), "#FF0000");
        registry.set(Color(2), "#00FF00");
        registry.set(Color(3), "#0000FF");
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_new() {
        let c = Color::new(0);
        assert_eq!(c.value(), 0);

        let c = Color::new(255);
        assert_eq!(c.as_usize(), 255);
    }

    #[test]
    fn test_color_parse() {
        assert_eq!("7".parse::<Color>(), Ok(Color::new(7)));
        assert_eq!(" 3 ".parse::<Color>(), Ok(Color::new(3)));
        assert!("256".parse::<Color>().is_err());
        assert!("red".parse::<Color>().is_err());
    }

    #[test]
    fn test_color_serializes_as_number() {
        let json = serde_json::to_string(&colors(&[1, 3, 5])).unwrap();
        assert_eq!(json, "[1,3,5]");
    }

    #[test]
    fn test_default_registry() {
        let registry = ColorRegistry::default();
        assert_eq!(registry.len(), DEFAULT_PALETTE_SIZE);
        assert_eq!(registry.get(Color::new(0)), Some("#FFFFFF"));
        assert_eq!(registry.get(Color::new(1)), Some("#FF0000"));
        assert_eq!(registry.get(Color::new(2)), Some("#00FF00"));
        assert_eq!(registry.get(Color::new(3)), Some("#0000FF"));
        assert_eq!(registry.get(Color::new(12)), None);
    }

    #[test]
    fn test_registry_set() {
        let mut registry = ColorRegistry::empty();
        assert!(registry.is_empty());
        registry.set(Color::new(4), "#123456");
        registry.set(Color::new(4), "#654321");
        assert_eq!(registry.get(Color::new(4)), Some("#654321"));
        assert_eq!(registry.iter().count(), 1);
    }
}
