use std::path::{Path, PathBuf};

use anyhow::Result;
use cellview_core::index::Pane;
use clap::Args;

use super::{load_session, PaneArg};

#[derive(Args)]
pub struct HitArgs {
    /// Dataset JSON file
    pub dataset: PathBuf,

    /// Row (y) in view coordinates
    pub row: f64,

    /// Column (x) in view coordinates
    pub col: f64,

    /// Pane the position belongs to
    #[arg(long, value_enum, default_value = "left")]
    pub pane: PaneArg,
}

pub fn run(args: &HitArgs, config: Option<&Path>) -> Result<()> {
    let session = load_session(&args.dataset, config)?;
    let pane = Pane::from(args.pane);

    if !session.panes.get(pane).contains(args.row, args.col) {
        println!("({}, {}) is outside the image", args.row, args.col);
        return Ok(());
    }
    match session.panes.hit_test(pane, args.row, args.col) {
        Some(roi) => {
            let class = if session.dataset.iscell[roi] { "cell" } else { "not cell" };
            println!("ROI {roi} ({class})");
        }
        None => println!("No ROI at ({}, {}) in the {pane} pane", args.row, args.col),
    }
    Ok(())
}
