//! Hangman
//!
//! Terminal hangman with word categories, three difficulty tiers and hints,
//! playable as a full-screen TUI or a line-oriented console game.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GuessOutcome, Word};
//!
//! // Start a round
//! let mut game = Game::new(&Word::new("rust", "A language"), 6);
//!
//! // Guess letters
//! assert_eq!(game.guess('r'), GuessOutcome::Hit);
//! assert_eq!(game.guess('x'), GuessOutcome::Miss);
//! println!("Pattern: {}", game.pattern());
//! ```

// Core domain types
pub mod core;

// Random selection
pub mod selection;

// Round orchestration and front-end contracts
pub mod session;

// Word catalogs
pub mod catalog;

// Line-oriented console front-end
pub mod console;

// Interactive TUI interface
pub mod interactive;

// Command implementations
pub mod commands;

// Settings file
pub mod config;

// Log setup
pub mod logging;
