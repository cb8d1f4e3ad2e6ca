//! Command implementations

pub mod categories;
pub mod play;
pub mod simple;

pub use categories::{CategorySummary, print_categories, summarize};
pub use play::run_play;
pub use simple::run_simple;

use crate::core::{Catalog, Difficulty, Outcome};
use crate::session::{RoundReport, SessionError, SetupMode};
use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

/// What the player asked for before the round starts
#[derive(Debug, Clone, Copy)]
pub struct RoundRequest<'a> {
    pub catalog: &'a Catalog,
    /// `Unknown` means "ask" (or draw, in random mode)
    pub difficulty: Difficulty,
    pub mode: SetupMode,
    pub max_mistakes: u32,
}

/// Turn a session result into the command result
///
/// Quitting is a normal end and yields `None`.
///
/// # Errors
///
/// Any other session failure, with context.
pub fn finish(result: Result<RoundReport, SessionError>) -> Result<Option<RoundReport>> {
    match result {
        Ok(report) => Ok(Some(report)),
        Err(err) if err.is_exit() => {
            info!(%err, "Session ended by player");
            Ok(None)
        }
        Err(err) => Err(err).context("playing round"),
    }
}

/// Print a one-line summary of a finished round
pub fn print_report(report: &RoundReport) {
    let summary = format!(
        "The word was: {} ({} attempts, {} / {} mistakes)",
        report.word, report.attempts, report.mistakes, report.max_mistakes
    );

    match report.outcome {
        Outcome::Won => println!("{} {summary}", "You won!".green().bold()),
        Outcome::Lost => println!("{} {summary}", "You lost!".red().bold()),
    }
}
