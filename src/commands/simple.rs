//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use super::{RoundRequest, finish};
use crate::console::{ConsoleInput, ConsoleMenu, ConsoleOutput};
use crate::selection::Selector;
use crate::session::{RoundReport, Session, TracingHooks, resolve_round};
use anyhow::Result;
use colored::Colorize;
use rand::TryRngCore;

/// Run the simple interactive CLI mode
///
/// Returns `None` when the player quit.
///
/// # Errors
///
/// Returns an error if there's an I/O error on the terminal or the round
/// cannot be set up.
pub fn run_simple<R: TryRngCore>(
    request: &RoundRequest<'_>,
    selector: &mut Selector<R>,
) -> Result<Option<RoundReport>> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║               HANGMAN                ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Guess the word one letter at a time.");
    println!("Type 'quit' or 'exit' to leave.\n");

    let mut menu = ConsoleMenu::stdout();
    let round = resolve_round(
        request.catalog,
        request.difficulty,
        request.mode,
        selector,
        &mut menu,
    );

    let result = round.and_then(|(category, difficulty)| {
        println!(
            "Category: {} | Difficulty: {}\n",
            category.name().bright_yellow().bold(),
            difficulty.to_string().bright_yellow().bold()
        );

        Session::new(
            ConsoleInput::stdin(),
            ConsoleOutput::stdout(),
            request.max_mistakes,
        )
        .with_hooks(TracingHooks)
        .play(selector, category, difficulty)
    });

    finish(result)
}
