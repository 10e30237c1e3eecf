// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Printing solutions.

use braid_search::geometry::ColorRegistry;
use braid_search::{Color, Solution};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One JSON object per line
    Json,
    /// Human readable, with palette colors
    Text,
}

pub fn write_solution<W: Write>(
    out: &mut W,
    solution: &Solution,
    format: Format,
    registry: &ColorRegistry,
) -> anyhow::Result<()> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, solution)?;
            writeln!(out)?;
        }
        Format::Text => {
            let input: Vec<String> = solution
                .input
                .iter()
                .map(|&c| describe(c, registry))
                .collect();
            let rules: Vec<String> = solution.crossings.iter().map(|r| r.to_string()).collect();
            writeln!(out, "input {}  rules {}", input.join(" "), rules.join(" "))?;
        }
    }
    Ok(())
}

fn describe(color: Color, registry: &ColorRegistry) -> String {
    match registry.get(color) {
        Some(hex) => format!("{}({})", color, hex),
        None => color.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use braid_search::geometry::colors;
    use braid_search::CrossingRule;

    fn solution() -> Solution {
        Solution {
            input: colors(&[1, 20]),
            crossings: vec![CrossingRule::RR],
        }
    }

    #[test]
    fn test_json_line() {
        let mut out = Vec::new();
        write_solution(&mut out, &solution(), Format::Json, &ColorRegistry::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"input\":[1,20],\"crossings\":[\"RR\"]}\n"
        );
    }

    #[test]
    fn test_text_line() {
        let mut out = Vec::new();
        write_solution(&mut out, &solution(), Format::Text, &ColorRegistry::default()).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "input 1(#FF0000) 20  rules RR\n"
        );
    }
}
