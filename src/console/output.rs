//! Console rendering of the game board

use super::formatters::{alphabet, create_progress_bar, figure_art};
use crate::core::{Game, Outcome};
use crate::session::{GameOutput, InputError};
use colored::Colorize;
use crossterm::{
    cursor::MoveToPreviousLine,
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Prompt printed after the board
pub const PROMPT: &str = "Guess next letter: ";

/// Prints the board as plain lines, optionally redrawing it in place
pub struct ConsoleOutput<W> {
    writer: W,
    in_place: bool,
    /// Lines between the top of the last board and the cursor
    lines_drawn: u16,
}

impl ConsoleOutput<io::Stdout> {
    /// Write to standard output, redrawing the board in place
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout(), true)
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub const fn new(writer: W, in_place: bool) -> Self {
        Self {
            writer,
            in_place,
            lines_drawn: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn board_lines(game: &Game) -> Vec<String> {
        let mut lines = vec![
            format!("Attempts: {}", game.attempts()),
            format!(
                "Mistakes: {} / {} [{}]",
                game.mistakes(),
                game.max_mistakes(),
                create_progress_bar(game.mistakes(), game.max_mistakes(), 12)
            ),
            format!("Used: {}", used_alphabet(game)),
        ];

        lines.extend(figure_art(game.figure()).lines().map(str::to_string));
        lines.push(String::new());
        lines.push(format!("Pattern: {}", game.pattern()));

        if game.hint_available() && !game.hint().is_empty() {
            lines.push(format!("Hint: {}", game.hint()));
        }
        lines.push(String::new());
        lines
    }

    fn erase_previous(&mut self) -> io::Result<()> {
        if self.in_place && self.lines_drawn > 0 {
            queue!(
                self.writer,
                MoveToPreviousLine(self.lines_drawn),
                Clear(ClearType::FromCursorDown)
            )?;
        }
        Ok(())
    }
}

fn used_alphabet(game: &Game) -> String {
    alphabet(game)
        .into_iter()
        .map(|(letter, used)| {
            if used {
                letter.to_uppercase().to_string().bold().to_string()
            } else {
                letter.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl<W: Write> GameOutput for ConsoleOutput<W> {
    fn show_game(&mut self, game: &Game) -> io::Result<()> {
        self.erase_previous()?;

        let lines = Self::board_lines(game);
        for line in &lines {
            writeln!(self.writer, "{line}")?;
        }
        write!(self.writer, "{PROMPT}")?;
        self.writer.flush()?;

        // The player's answer ends the prompt line
        self.lines_drawn = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
        Ok(())
    }

    fn show_result(&mut self, outcome: Outcome, game: &Game) -> io::Result<()> {
        // Keep the final board; the prompt line is replaced by the result
        if self.in_place {
            queue!(self.writer, Clear(ClearType::CurrentLine))?;
        }
        writeln!(self.writer)?;

        let message = match outcome {
            Outcome::Won => format!("You won! The word was: {}", game.word())
                .green()
                .bold(),
            Outcome::Lost => format!("You lost! The word was: {}", game.word())
                .red()
                .bold(),
        };
        writeln!(self.writer, "{message}")?;
        self.writer.flush()?;

        self.lines_drawn = 0;
        Ok(())
    }

    fn show_input_error(&mut self, error: &InputError) -> io::Result<()> {
        if self.in_place {
            queue!(
                self.writer,
                MoveToPreviousLine(1),
                Clear(ClearType::CurrentLine)
            )?;
        } else {
            writeln!(self.writer)?;
        }
        write!(
            self.writer,
            "{} {}. Try again: ",
            "Error:".red().bold(),
            error
        )?;
        self.writer.flush()
    }
}
