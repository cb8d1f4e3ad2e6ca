//! Session orchestration
//!
//! Connects the game engine to a front-end: settles what to play, then runs
//! the render / read / guess loop until the round is decided.

mod boundary;
mod orchestrator;
mod setup;

pub use boundary::{Chooser, GameInput, GameOutput, InputError, MalformedInput, parse_letter};
pub use orchestrator::{
    RoundHooks, RoundReport, Session, SessionError, SilentHooks, TracingHooks,
};
pub use setup::{SetupMode, resolve_round};
