use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cellview_core::event::{dispatch, Effect, EventScript};
use cellview_core::view::Freehand;
use clap::Args;
use console::Style;
use tracing::info;

use super::{field, load_session, title};

#[derive(Args)]
pub struct ReplayArgs {
    /// Dataset JSON file
    pub dataset: PathBuf,

    /// TOML file with an `[[events]]` list
    pub script: PathBuf,
}

/// Feed every scripted event through the dispatcher, acting on the effects
/// the way an interactive host would.
pub fn run(args: &ReplayArgs, config: Option<&Path>) -> Result<()> {
    let mut session = load_session(&args.dataset, config)?;
    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read script {}", args.script.display()))?;
    let script = EventScript::from_toml_str(&text)
        .with_context(|| format!("Invalid script {}", args.script.display()))?;
    info!(events = script.events.len(), "Replaying script");

    let dim = Style::new().dim();
    for (step, event) in script.events.iter().enumerate() {
        let effects = dispatch(&mut session, event);
        println!("{:>4}  {:?}", step + 1, event);
        for effect in &effects {
            println!("      {} {:?}", dim.apply_to("->"), effect);
            if let Effect::FlipClassification(_) = effect {
                session.flip_merged()?;
            }
        }
    }

    let view = &session.view;
    title("Final state");
    field("Size mode", view.size_mode);
    field(
        "Select mode",
        view.select
            .active
            .map_or_else(|| "none".to_string(), |m| m.to_string()),
    );
    field("Colour", view.color.as_deref().unwrap_or("none"));
    field("Top count", view.top_count);
    field(
        "Freehand",
        match view.freehand {
            Freehand::Idle => "none".to_string(),
            Freehand::Armed => "armed".to_string(),
            Freehand::Drawn(r) => format!("rows {}..{}, cols {}..{}", r.row0, r.row1, r.col0, r.col1),
        },
    );
    field("Axes linked", view.axes_linked);
    field(
        "Chosen",
        session
            .selection
            .chosen
            .map_or_else(|| "none".to_string(), |c| c.to_string()),
    );
    field("Merged", format!("{:?}", session.selection.merged));
    println!();
    Ok(())
}
