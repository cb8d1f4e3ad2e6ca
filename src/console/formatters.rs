//! Formatting helpers shared by the console and TUI front-ends

use crate::core::{Figure, Game};

/// Height of every gallows drawing, in lines
pub const FIGURE_HEIGHT: u16 = 7;

/// Gallows drawing for a figure stage
#[must_use]
pub const fn figure_art(figure: Figure) -> &'static str {
    match figure {
        Figure::Initial => concat!(
            "   +---+\n",
            "   |   |\n",
            "       |\n",
            "       |\n",
            "       |\n",
            "       |\n",
            "=========",
        ),
        Figure::Head => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "       |\n",
            "       |\n",
            "       |\n",
            "=========",
        ),
        Figure::Body => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "   |   |\n",
            "       |\n",
            "       |\n",
            "=========",
        ),
        Figure::LeftArm => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "  /|   |\n",
            "       |\n",
            "       |\n",
            "=========",
        ),
        Figure::RightArm => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "  /|\\  |\n",
            "       |\n",
            "       |\n",
            "=========",
        ),
        Figure::LeftLeg => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "  /|\\  |\n",
            "  /    |\n",
            "       |\n",
            "=========",
        ),
        Figure::RightLeg => concat!(
            "   +---+\n",
            "   |   |\n",
            "   O   |\n",
            "  /|\\  |\n",
            "  / \\  |\n",
            "       |\n",
            "=========",
        ),
    }
}

/// The a-z alphabet paired with whether each letter was used
///
/// Used letters outside a-z (accented or other scripts) follow at the end.
#[must_use]
pub fn alphabet(game: &Game) -> Vec<(char, bool)> {
    let mut letters: Vec<(char, bool)> = ('a'..='z').map(|c| (c, game.is_used(c))).collect();
    letters.extend(
        game.used_letters()
            .into_iter()
            .filter(|c| !c.is_ascii_lowercase() && *c != ' ')
            .map(|c| (c, true)),
    );
    letters
}

/// Spread the pattern out so placeholders are countable: `a _ _ l e`
#[must_use]
pub fn spaced_pattern(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == ' ' { "  ".to_string() } else { c.to_string() })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: u32, max: u32, width: usize) -> String {
    let max = max.max(1);
    let filled = (u64::from(value.min(max)) * width as u64 / u64::from(max)) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
