mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cellview", about = "Inspect and select detected cells headlessly")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Viewer config (TOML); defaults are used when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dataset dimensions, ROI counts and statistics
    Info(commands::info::InfoArgs),
    /// Print the pixel-to-ROI index of a pane
    Index(commands::index::IndexArgs),
    /// Rank ROIs by a statistic and print the top or bottom N
    Rank(commands::rank::RankArgs),
    /// Resolve a pixel to the ROI under it
    Hit(commands::hit::HitArgs),
    /// Replay a TOML script of viewer events
    Replay(commands::replay::ReplayArgs),
    /// Print or save the default viewer config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.config.as_deref();
    match &cli.command {
        Commands::Info(args) => commands::info::run(args, config),
        Commands::Index(args) => commands::index::run(args, config),
        Commands::Rank(args) => commands::rank::run(args, config),
        Commands::Hit(args) => commands::hit::run(args, config),
        Commands::Replay(args) => commands::replay::run(args, config),
        Commands::Config(args) => commands::config::run(args),
    }
}
