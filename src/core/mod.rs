//! Core domain types for hangman
//!
//! The word catalog and the game engine. Nothing here performs I/O; every
//! operation is a pure state transition or query.

mod game;
mod word;

pub use game::{DEFAULT_MAX_MISTAKES, Figure, Game, GuessOutcome, Outcome, PLACEHOLDER};
pub use word::{Catalog, Category, Difficulty, Word};
