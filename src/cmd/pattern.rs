// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::cmd::args::ColorList;
use crate::cmd::output::{write_solution, Format};
use anyhow::{bail, Context};
use braid_search::assortment::minimal_distribution_with_palette;
use braid_search::geometry::{ColorRegistry, Parity};
use braid_search::state::Statistics;
use braid_search::{Assortment, Pattern, Solution};
use clap::Args;
use rayon::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};
use tracing::{debug, info};

#[derive(Args, Debug)]
pub struct PatternArgs {
    /// Number of wires (even, at least 2)
    #[arg(long)]
    pub wires: usize,

    /// Target colors of one column; repeat once per column, starting with column 0
    #[arg(long = "column", required = true)]
    pub columns: Vec<ColorList>,

    /// List colors 0..N in the assortment even if unused, so they can fill free wires
    #[arg(long)]
    pub palette: Option<usize>,

    /// Stop each column after this many solutions
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

#[derive(Debug, Serialize)]
struct ColumnReport {
    column: usize,
    parity: Parity,
    node_count: usize,
    solutions: Vec<Solution>,
    #[serde(skip)]
    statistics: Statistics,
}

pub fn run(args: PatternArgs) -> anyhow::Result<()> {
    let columns: Vec<_> = args.columns.into_iter().map(|c| c.0).collect();
    let pattern = Pattern::from_columns(args.wires, columns).context("invalid pattern")?;

    let distribution = match args.palette {
        Some(color_count) => minimal_distribution_with_palette(pattern.columns(), color_count),
        None => pattern.minimal_distribution(),
    };
    info!(
        columns = pattern.column_count(),
        wires = pattern.wire_count(),
        minimum_wire_count = distribution.minimum_wire_count,
        assortment = %distribution.assortment,
        "solving pattern"
    );
    if !distribution.fits(pattern.wire_count()) {
        bail!(
            "pattern needs at least {} wires, only {} available",
            distribution.minimum_wire_count,
            pattern.wire_count()
        );
    }

    let limit = args.limit.unwrap_or(usize::MAX);
    let reports = (0..pattern.column_count())
        .into_par_iter()
        .map(|column| solve_one(&pattern, column, &distribution.assortment, limit))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let registry = ColorRegistry::default();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for report in &reports {
        info!(
            column = report.column,
            found = report.solutions.len(),
            statistics = %report.statistics,
            "column done"
        );
        match args.format {
            Format::Json => {
                serde_json::to_writer(&mut out, report)?;
                writeln!(out)?;
            }
            Format::Text => {
                writeln!(
                    out,
                    "column {} ({}, {} nodes): {} solutions",
                    report.column,
                    report.parity,
                    report.node_count,
                    report.solutions.len()
                )?;
                for solution in &report.solutions {
                    write!(out, "  ")?;
                    write_solution(&mut out, solution, Format::Text, &registry)?;
                }
            }
        }
    }
    out.flush()?;
    Ok(())
}

fn solve_one(
    pattern: &Pattern,
    column: usize,
    assortment: &Assortment,
    limit: usize,
) -> anyhow::Result<ColumnReport> {
    let solver = pattern.chunk(column)?;
    debug!(column, target = ?solver.target(), "column started");
    let mut solutions = solver
        .solve(assortment)
        .with_context(|| format!("column {}", column))?;
    let found: Vec<Solution> = solutions.by_ref().take(limit).collect();
    Ok(ColumnReport {
        column,
        parity: solver.shape().parity(),
        node_count: solver.node_count(),
        solutions: found,
        statistics: solutions.statistics().clone(),
    })
}
