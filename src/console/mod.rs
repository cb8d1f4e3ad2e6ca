//! Line-oriented console front-end
//!
//! Reads one guess per line from standard input and prints the board as
//! plain text. Menus use arrow keys in raw mode.

pub mod formatters;
mod input;
mod menu;
mod output;

pub use input::ConsoleInput;
pub use menu::{ConsoleMenu, MenuState, MenuStep, read_key};
pub use output::{ConsoleOutput, PROMPT};
