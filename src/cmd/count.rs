// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::cmd::args::{AssortmentArg, ColorList};
use anyhow::Context;
use braid_search::{Assortment, ChunkSolver};
use clap::Args;

#[derive(Args, Debug)]
pub struct CountArgs {
    /// Number of wires (even, at least 2)
    #[arg(long)]
    pub wires: usize,

    /// Target node colors, top to bottom
    #[arg(long)]
    pub target: ColorList,

    /// Minimum colors as color:count pairs (default: the target's own colors)
    #[arg(long)]
    pub assortment: Option<AssortmentArg>,

    /// Also enumerate candidate input orderings to count them
    #[arg(long)]
    pub candidates: bool,
}

pub fn run(args: CountArgs) -> anyhow::Result<()> {
    let solver = ChunkSolver::new(args.target.0, args.wires).context("invalid target column")?;
    let assortment = match args.assortment {
        Some(AssortmentArg(assortment)) => assortment,
        None => Assortment::from_colors(solver.target()),
    };

    println!("parity            = {}", solver.shape().parity());
    println!("nodes             = {}", solver.node_count());
    println!("assignments       = {}", solver.count_crossing_assignments());
    println!("assortment        = {}", assortment);
    println!(
        "free wires        = {}",
        args.wires as i64 - assortment.total() as i64
    );

    if args.candidates {
        let mut candidates = assortment
            .generate_candidates(args.wires)
            .context("assortment does not fit")?;
        let count = candidates.by_ref().count();
        println!("filler multisets  = {}", candidates.filler_count());
        println!("candidates        = {}", count);
        println!(
            "search space      = {}",
            (count as u128).saturating_mul(solver.count_crossing_assignments())
        );
    }
    Ok(())
}
