//! Hangman - CLI
//!
//! Terminal hangman with TUI and simple console modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    catalog,
    commands::{RoundRequest, print_categories, print_report, run_play, run_simple},
    config::Settings,
    core::Difficulty,
    logging,
    selection::Selector,
    session::SetupMode,
};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Terminal hangman with categories, difficulty tiers and hints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word catalog JSON file (default: built-in catalog)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Difficulty: easy, medium or hard (anything else asks)
    #[arg(short, long, global = true)]
    difficulty: Option<String>,

    /// Mistakes allowed before the round is lost
    #[arg(short, long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    max_mistakes: Option<u32>,

    /// Settings file (default: hangman.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Pick category and difficulty at random instead of asking
    #[arg(short, long, global = true)]
    random: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line input without TUI)
    Simple,

    /// List catalog categories with word counts per difficulty
    Categories,
}

/// Settings file first, then command-line overrides
fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::discover(cli.config.as_deref()).context("loading settings")?;

    if let Some(path) = &cli.path {
        settings.catalog_path = Some(path.clone());
    }
    if let Some(max_mistakes) = cli.max_mistakes {
        settings.max_mistakes = max_mistakes;
    }

    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(&cli)?;
    logging::init(&settings)?;
    info!(version = env!("CARGO_PKG_VERSION"), "Starting hangman");

    let catalog = catalog::load_or_default(settings.catalog_path.as_deref())
        .context("loading word catalog")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let request = RoundRequest {
        catalog: &catalog,
        difficulty: cli
            .difficulty
            .as_deref()
            .map_or(Difficulty::Unknown, Difficulty::from_name),
        mode: if cli.random {
            SetupMode::Random
        } else {
            SetupMode::Interactive
        },
        max_mistakes: settings.max_mistakes,
    };
    let mut selector = Selector::from_os();

    match command {
        Commands::Play => {
            if let Some(report) = run_play(&request, &mut selector)? {
                print_report(&report);
            }
        }
        Commands::Simple => {
            run_simple(&request, &mut selector)?;
        }
        Commands::Categories => print_categories(&catalog),
    }

    info!("Exiting");
    Ok(())
}
