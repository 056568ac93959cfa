pub mod config;
pub mod hit;
pub mod index;
pub mod info;
pub mod rank;
pub mod replay;

use std::path::Path;

use anyhow::{Context, Result};
use cellview_core::config::ViewerConfig;
use cellview_core::dataset::Dataset;
use cellview_core::index::Pane;
use cellview_core::session::Session;
use clap::ValueEnum;
use console::Style;

#[derive(Clone, Copy, ValueEnum)]
pub enum PaneArg {
    Left,
    Right,
}

impl From<PaneArg> for Pane {
    fn from(p: PaneArg) -> Self {
        match p {
            PaneArg::Left => Pane::Left,
            PaneArg::Right => Pane::Right,
        }
    }
}

pub fn load_config(path: Option<&Path>) -> Result<ViewerConfig> {
    match path {
        Some(p) => ViewerConfig::load(p)
            .with_context(|| format!("Failed to read config {}", p.display())),
        None => Ok(ViewerConfig::default()),
    }
}

pub fn load_session(dataset: &Path, config: Option<&Path>) -> Result<Session> {
    let config = load_config(config)?;
    let dataset = Dataset::load(dataset)
        .with_context(|| format!("Failed to load dataset {}", dataset.display()))?;
    Ok(Session::new(dataset, config)?)
}

pub fn title(text: &str) {
    println!();
    println!("  {}", Style::new().cyan().bold().apply_to(text));
    println!(
        "  {}",
        Style::new()
            .cyan()
            .bold()
            .apply_to("\u{2550}".repeat(text.chars().count()))
    );
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!(
        "  {:<14}{}",
        Style::new().dim().apply_to(label),
        Style::new().bold().apply_to(value)
    );
}
