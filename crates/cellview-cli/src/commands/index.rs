use std::path::{Path, PathBuf};

use anyhow::Result;
use cellview_core::index::{roi_index, Pane, RoiIndex};
use clap::{Args, ValueEnum};

use super::{load_session, title};

#[derive(Clone, Copy, ValueEnum)]
pub enum IndexPaneArg {
    Left,
    Right,
    /// Every ROI regardless of classification
    All,
}

#[derive(Args)]
pub struct IndexArgs {
    /// Dataset JSON file
    pub dataset: PathBuf,

    /// Which index to print
    #[arg(long, value_enum, default_value = "all")]
    pub pane: IndexPaneArg,
}

pub fn run(args: &IndexArgs, config: Option<&Path>) -> Result<()> {
    let session = load_session(&args.dataset, config)?;
    let d = &session.dataset;

    let (label, index) = match args.pane {
        IndexPaneArg::Left => ("Left pane (cells)", session.panes.get(Pane::Left).clone()),
        IndexPaneArg::Right => ("Right pane (not cells)", session.panes.get(Pane::Right).clone()),
        IndexPaneArg::All => ("All ROIs", RoiIndex::new(roi_index(d.ly, d.lx, &d.rois))),
    };

    title(label);
    print_index(&index);
    println!();
    Ok(())
}

/// One row per image row; ROI indices right-aligned, sentinel as `.`.
fn print_index(index: &RoiIndex) {
    let widest = index.data.iter().copied().max().unwrap_or(0).max(0);
    let width = widest.to_string().len();
    for row in index.data.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|&v| {
                if v < 0 {
                    format!("{:>width$}", ".")
                } else {
                    format!("{v:>width$}")
                }
            })
            .collect();
        println!("  {}", cells.join(" "));
    }
}
