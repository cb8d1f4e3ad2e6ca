//! Round orchestration
//!
//! Drives one `Game` from the first render to the final result, asking a
//! `GameInput` for letters and telling a `GameOutput` what to draw.

use super::boundary::{GameInput, GameOutput, InputError};
use crate::core::{Category, Difficulty, Game, GuessOutcome, Outcome, Word};
use crate::selection::{SelectionError, Selector};
use rand::TryRngCore;
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Why a round ended without a result
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("word selection failed: {0}")]
    Selection(#[from] SelectionError),
    #[error("reading input failed: {0}")]
    Input(InputError),
    #[error("rendering failed: {0}")]
    Output(#[from] io::Error),
}

impl SessionError {
    /// The player quit or closed the input
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        matches!(self, Self::Input(err) if err.is_exit())
    }
}

impl From<InputError> for SessionError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

/// Summary of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub outcome: Outcome,
    pub word: String,
    pub attempts: u32,
    pub mistakes: u32,
    pub max_mistakes: u32,
}

impl RoundReport {
    fn from_game(outcome: Outcome, game: &Game) -> Self {
        Self {
            outcome,
            word: game.word().to_string(),
            attempts: game.attempts(),
            mistakes: game.mistakes(),
            max_mistakes: game.max_mistakes(),
        }
    }
}

/// Observation points around each state transition of a round
///
/// Every method defaults to doing nothing.
pub trait RoundHooks {
    fn round_started(&mut self, _game: &Game) {}
    fn guess_applied(&mut self, _letter: char, _outcome: GuessOutcome, _game: &Game) {}
    fn input_rejected(&mut self, _error: &InputError) {}
    fn round_finished(&mut self, _report: &RoundReport) {}
}

/// Hooks that observe nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentHooks;

impl RoundHooks for SilentHooks {}

/// Hooks that emit `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHooks;

impl RoundHooks for TracingHooks {
    fn round_started(&mut self, game: &Game) {
        info!(
            length = game.word().chars().count(),
            max_mistakes = game.max_mistakes(),
            "Round started"
        );
        debug!(word = game.word(), "Target word");
    }

    fn guess_applied(&mut self, letter: char, outcome: GuessOutcome, game: &Game) {
        info!(
            %letter,
            ?outcome,
            attempts = game.attempts(),
            mistakes = game.mistakes(),
            pattern = %game.pattern(),
            "Guess applied"
        );
    }

    fn input_rejected(&mut self, error: &InputError) {
        warn!(%error, "Input rejected");
    }

    fn round_finished(&mut self, report: &RoundReport) {
        info!(
            outcome = ?report.outcome,
            attempts = report.attempts,
            mistakes = report.mistakes,
            "Round finished"
        );
    }
}

/// Runs rounds against one input and one output
pub struct Session<I, O, H = SilentHooks> {
    input: I,
    output: O,
    hooks: H,
    max_mistakes: u32,
}

impl<I: GameInput, O: GameOutput> Session<I, O> {
    pub const fn new(input: I, output: O, max_mistakes: u32) -> Self {
        Self {
            input,
            output,
            hooks: SilentHooks,
            max_mistakes,
        }
    }
}

impl<I: GameInput, O: GameOutput, H: RoundHooks> Session<I, O, H> {
    /// Replace the observation hooks
    pub fn with_hooks<H2: RoundHooks>(self, hooks: H2) -> Session<I, O, H2> {
        Session {
            input: self.input,
            output: self.output,
            hooks,
            max_mistakes: self.max_mistakes,
        }
    }

    #[must_use]
    pub const fn max_mistakes(&self) -> u32 {
        self.max_mistakes
    }

    pub const fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Give back the front-end halves, e.g. to restore a terminal
    pub fn into_parts(self) -> (I, O) {
        (self.input, self.output)
    }

    /// Draw a word from `category` at `difficulty`, then play it
    ///
    /// # Errors
    /// Selection failures are returned before anything is rendered; see
    /// [`Session::run`] for the rest.
    pub fn play<R: TryRngCore>(
        &mut self,
        selector: &mut Selector<R>,
        category: &Category,
        difficulty: Difficulty,
    ) -> Result<RoundReport, SessionError> {
        let word = selector.choose_word(category, difficulty)?;
        debug!(category = category.name(), %difficulty, "Word chosen");
        self.run(word)
    }

    /// Play one round of `word` to the end
    ///
    /// The board is rendered before every letter request, except after a
    /// rejected input, where only the error is shown.
    ///
    /// # Errors
    /// `Input` for any non-recoverable input failure (including quitting),
    /// `Output` when rendering fails.
    pub fn run(&mut self, word: &Word) -> Result<RoundReport, SessionError> {
        let mut game = Game::new(word, self.max_mistakes);
        self.hooks.round_started(&game);

        let mut redraw = true;

        while !game.is_finished() {
            if redraw {
                self.output.show_game(&game)?;
            }

            match self.input.read_letter() {
                Ok(letter) => {
                    let outcome = game.guess(letter);
                    self.hooks.guess_applied(letter, outcome, &game);
                    redraw = true;
                }
                Err(err) if err.is_recoverable() => {
                    self.hooks.input_rejected(&err);
                    self.output.show_input_error(&err)?;
                    redraw = false;
                }
                Err(err) => return Err(SessionError::Input(err)),
            }
        }

        let outcome = game.outcome().unwrap_or(Outcome::Lost);
        self.output.show_game(&game)?;
        self.output.show_result(outcome, &game)?;

        let report = RoundReport::from_game(outcome, &game);
        self.hooks.round_finished(&report);
        Ok(report)
    }
}
