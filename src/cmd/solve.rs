// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::cmd::args::{AssortmentArg, ColorList};
use crate::cmd::output::{write_solution, Format};
use anyhow::Context;
use braid_search::geometry::ColorRegistry;
use braid_search::{Assortment, ChunkSolver};
use clap::Args;
use std::io::{BufWriter, Write};
use tracing::info;

#[derive(Args, Debug)]
pub struct SolveArgs {
    /// Number of wires (even, at least 2)
    #[arg(long)]
    pub wires: usize,

    /// Target node colors, top to bottom, e.g. 1,3,5
    #[arg(long)]
    pub target: ColorList,

    /// Minimum colors as color:count pairs (default: the target's own colors)
    #[arg(long)]
    pub assortment: Option<AssortmentArg>,

    /// Stop after this many solutions
    #[arg(long)]
    pub limit: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Json)]
    pub format: Format,
}

pub fn run(args: SolveArgs) -> anyhow::Result<()> {
    let solver = ChunkSolver::new(args.target.0, args.wires).context("invalid target column")?;
    let assortment = match args.assortment {
        Some(AssortmentArg(assortment)) => assortment,
        None => Assortment::from_colors(solver.target()),
    };
    info!(
        wires = args.wires,
        parity = %solver.shape().parity(),
        %assortment,
        "solving column"
    );

    let mut solutions = solver
        .solve(&assortment)
        .with_context(|| format!("cannot solve with assortment {}", assortment))?;

    let registry = ColorRegistry::default();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut found = 0usize;
    for solution in solutions.by_ref().take(args.limit.unwrap_or(usize::MAX)) {
        write_solution(&mut out, &solution, args.format, &registry)?;
        found += 1;
    }
    out.flush()?;

    info!(found, statistics = %solutions.statistics(), "done");
    Ok(())
}
