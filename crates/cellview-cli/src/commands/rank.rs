use std::path::{Path, PathBuf};

use anyhow::Result;
use cellview_core::rank::{select_extreme, Direction, Partition};
use clap::{Args, ValueEnum};

use super::load_session;

#[derive(Clone, Copy, ValueEnum)]
pub enum PartitionArg {
    Cells,
    NotCells,
}

impl From<PartitionArg> for Partition {
    fn from(p: PartitionArg) -> Self {
        match p {
            PartitionArg::Cells => Partition::Cells,
            PartitionArg::NotCells => Partition::NotCells,
        }
    }
}

#[derive(Args)]
pub struct RankArgs {
    /// Dataset JSON file
    pub dataset: PathBuf,

    /// Statistic to rank by
    #[arg(long)]
    pub stat: String,

    /// Number of ROIs to pick (defaults to the configured top count)
    #[arg(short)]
    pub n: Option<usize>,

    /// Pick the lowest values instead of the highest
    #[arg(long)]
    pub bottom: bool,

    /// Classification to rank within
    #[arg(long, value_enum, default_value = "cells")]
    pub partition: PartitionArg,
}

pub fn run(args: &RankArgs, config: Option<&Path>) -> Result<()> {
    let session = load_session(&args.dataset, config)?;
    let d = &session.dataset;
    let stat = d.stat(&args.stat)?;

    let partition = Partition::from(args.partition);
    let direction = if args.bottom {
        Direction::Bottom
    } else {
        Direction::Top
    };
    let n = args
        .n
        .unwrap_or(session.view.top_count)
        .min(session.config.max_top_count);

    let ranked = select_extreme(stat, &d.iscell, partition, n, direction);

    println!(
        "\n{} {} {} by {} (of {}):",
        direction,
        ranked.len(),
        partition,
        args.stat,
        d.partition_count(partition)
    );
    println!("{:>5}  {:>8}  {:>12}", "Rank", "ROI", "Value");
    println!("{}", "-".repeat(29));
    for (rank, &roi) in ranked.iter().enumerate() {
        println!("{:>5}  {:>8}  {:>12.6}", rank + 1, roi, stat[roi]);
    }

    if let Some(&focused) = ranked.first() {
        println!("\nFocused ROI: {}", focused);
    }
    Ok(())
}
