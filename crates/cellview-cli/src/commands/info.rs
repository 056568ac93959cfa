use std::path::{Path, PathBuf};

use anyhow::Result;
use cellview_core::rank::Partition;
use clap::Args;

use super::{field, load_session, title};

#[derive(Args)]
pub struct InfoArgs {
    /// Dataset JSON file
    pub dataset: PathBuf,
}

pub fn run(args: &InfoArgs, config: Option<&Path>) -> Result<()> {
    let session = load_session(&args.dataset, config)?;
    let d = &session.dataset;

    title("Dataset");
    field("File", args.dataset.display());
    field("Image", format!("{} x {}", d.ly, d.lx));
    field("ROIs", d.roi_count());
    field("Cells", d.partition_count(Partition::Cells));
    field("Not cells", d.partition_count(Partition::NotCells));

    let overlap: usize = d
        .rois
        .iter()
        .map(|r| r.len() - r.exclusive_pixels().count())
        .sum();
    field("Overlap px", overlap);

    if d.stats.is_empty() {
        field("Statistics", "none");
    } else {
        let names: Vec<&str> = d.stats.keys().map(String::as_str).collect();
        field("Statistics", names.join(", "));
    }
    println!();
    Ok(())
}
