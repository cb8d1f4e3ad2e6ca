//! Interactive TUI interface
//!
//! A full-screen ratatui front-end: letters are single key presses and menus
//! are highlighted lists.

mod app;
mod rendering;

pub use app::{
    App, BoardView, KeySource, MenuView, Message, MessageStyle, TerminalKeys, TuiInput, TuiScreen,
    run_tui,
};
