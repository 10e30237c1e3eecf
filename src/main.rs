// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `braid`: solve braided-cord pattern columns from the command line.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "braid")]
#[command(about = "Find wire orderings and crossing rules for braid pattern columns", long_about = None)]
pub struct Cli {
    /// Log at debug level (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate every solution of a single column
    Solve(cmd::solve::SolveArgs),

    /// Minimal color distribution of a set of columns
    Assortment(cmd::assortment::AssortmentArgs),

    /// Solve every column of a pattern in parallel
    Pattern(cmd::pattern::PatternArgs),

    /// Search-space sizes for a column
    Count(cmd::count::CountArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Solve(args) => cmd::solve::run(args),
        Commands::Assortment(args) => cmd::assortment::run(args),
        Commands::Pattern(args) => cmd::pattern::run(args),
        Commands::Count(args) => cmd::count::run(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
