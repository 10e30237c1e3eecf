// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

use crate::cmd::args::ColorList;
use crate::cmd::output::Format;
use braid_search::assortment::{minimal_distribution, minimal_distribution_with_palette};
use clap::Args;
use tracing::warn;

#[derive(Args, Debug)]
pub struct AssortmentArgs {
    /// Target colors of one column; repeat once per column
    #[arg(long = "column", required = true)]
    pub columns: Vec<ColorList>,

    /// Wire budget to check the distribution against
    #[arg(long)]
    pub wires: Option<usize>,

    /// List colors 0..N even if unused
    #[arg(long)]
    pub palette: Option<usize>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

pub fn run(args: AssortmentArgs) -> anyhow::Result<()> {
    let columns: Vec<_> = args.columns.iter().map(|c| c.0.as_slice()).collect();
    let distribution = match args.palette {
        Some(color_count) => minimal_distribution_with_palette(&columns, color_count),
        None => minimal_distribution(&columns),
    };

    match args.format {
        Format::Json => println!("{}", serde_json::to_string(&distribution)?),
        Format::Text => {
            println!("assortment         = {}", distribution.assortment);
            println!("minimum_wire_count = {}", distribution.minimum_wire_count);
        }
    }

    if let Some(wires) = args.wires {
        if distribution.fits(wires) {
            println!("fits in {} wires ({} free)", wires, wires - distribution.minimum_wire_count);
        } else {
            warn!(
                wires,
                minimum_wire_count = distribution.minimum_wire_count,
                "distribution does not fit the wire budget"
            );
            println!("does not fit in {} wires", wires);
        }
    }
    Ok(())
}
