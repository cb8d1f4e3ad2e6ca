//! Contracts between the orchestrator and a front-end
//!
//! A front-end (console or TUI) supplies letters and menu choices, and renders
//! game state. The orchestrator only sees these traits.

use crate::core::{Game, Outcome};
use std::io;
use thiserror::Error;

/// Input that has the wrong shape for a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedInput {
    #[error("not a single letter")]
    NotSingleLetter,
    #[error("'{0}' is not a letter")]
    NotAlphabetic(char),
    #[error("not valid text")]
    NotText,
}

/// Failure to obtain a letter or a menu choice
#[derive(Debug, Error)]
pub enum InputError {
    /// Bad input; the player is asked again
    #[error(transparent)]
    Malformed(#[from] MalformedInput),
    /// The player asked to leave
    #[error("player quit")]
    Quit,
    /// The input stream ended
    #[error("input closed")]
    Closed,
    #[error("input device failed: {0}")]
    Io(#[from] io::Error),
}

impl InputError {
    /// Recoverable errors re-prompt; everything else ends the round
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }

    /// The player (or the stream) ended the session deliberately
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Quit | Self::Closed)
    }
}

/// Validate raw text as a single guess letter
///
/// Returns the lowercased letter.
///
/// # Errors
/// `NotSingleLetter` unless the text is exactly one character,
/// `NotAlphabetic` when that character is not a letter.
pub fn parse_letter(text: &str) -> Result<char, MalformedInput> {
    let mut chars = text.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        return Err(MalformedInput::NotSingleLetter);
    };

    if !letter.is_alphabetic() {
        return Err(MalformedInput::NotAlphabetic(letter));
    }

    Ok(letter.to_lowercase().next().unwrap_or(letter))
}

/// Source of guesses
pub trait GameInput {
    /// Block until the player submits one letter
    ///
    /// # Errors
    /// `Malformed` for input of the wrong shape; any other variant ends the
    /// round.
    fn read_letter(&mut self) -> Result<char, InputError>;
}

/// Sink for everything the player sees during a round
pub trait GameOutput {
    /// Render the whole board
    ///
    /// # Errors
    /// Propagates write failures of the underlying device.
    fn show_game(&mut self, game: &Game) -> io::Result<()>;

    /// Announce the result of a finished round
    ///
    /// # Errors
    /// Propagates write failures of the underlying device.
    fn show_result(&mut self, outcome: Outcome, game: &Game) -> io::Result<()>;

    /// Report a rejected input without redrawing the board
    ///
    /// # Errors
    /// Propagates write failures of the underlying device.
    fn show_input_error(&mut self, error: &InputError) -> io::Result<()>;
}

/// Picks one item from a list (difficulty and category menus)
pub trait Chooser {
    /// Returns the index of the chosen item
    ///
    /// # Errors
    /// `Quit` when the player cancels, `Io` on device failure.
    fn choose(&mut self, title: &str, items: &[String]) -> Result<usize, InputError>;
}

impl<T: GameInput + ?Sized> GameInput for &mut T {
    fn read_letter(&mut self) -> Result<char, InputError> {
        (**self).read_letter()
    }
}

impl<T: GameOutput + ?Sized> GameOutput for &mut T {
    fn show_game(&mut self, game: &Game) -> io::Result<()> {
        (**self).show_game(game)
    }

    fn show_result(&mut self, outcome: Outcome, game: &Game) -> io::Result<()> {
        (**self).show_result(outcome, game)
    }

    fn show_input_error(&mut self, error: &InputError) -> io::Result<()> {
        (**self).show_input_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_single_letter() {
        assert_eq!(parse_letter("a"), Ok('a'));
        assert_eq!(parse_letter("Q"), Ok('q'));
        assert_eq!(parse_letter("ж"), Ok('ж'));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        assert_eq!(parse_letter(""), Err(MalformedInput::NotSingleLetter));
        assert_eq!(parse_letter("ab"), Err(MalformedInput::NotSingleLetter));
        assert_eq!(parse_letter("quit"), Err(MalformedInput::NotSingleLetter));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(parse_letter("1"), Err(MalformedInput::NotAlphabetic('1')));
        assert_eq!(parse_letter(" "), Err(MalformedInput::NotAlphabetic(' ')));
        assert_eq!(parse_letter("?"), Err(MalformedInput::NotAlphabetic('?')));
    }

    #[test]
    fn only_malformed_is_recoverable() {
        assert!(InputError::from(MalformedInput::NotSingleLetter).is_recoverable());
        assert!(!InputError::Quit.is_recoverable());
        assert!(!InputError::Closed.is_recoverable());
        assert!(!InputError::Io(io::Error::other("tty gone")).is_recoverable());
    }

    #[test]
    fn exit_conditions() {
        assert!(InputError::Quit.is_exit());
        assert!(InputError::Closed.is_exit());
        assert!(!InputError::from(MalformedInput::NotAlphabetic('1')).is_exit());
    }

    #[test]
    fn malformed_messages() {
        let err = InputError::from(MalformedInput::NotAlphabetic('7'));
        assert_eq!(err.to_string(), "'7' is not a letter");
        assert_eq!(
            InputError::from(MalformedInput::NotSingleLetter).to_string(),
            "not a single letter"
        );
    }
}
