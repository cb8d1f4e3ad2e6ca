//! Full-screen TUI mode

use super::{RoundRequest, finish};
use crate::interactive::{TerminalKeys, TuiInput, run_tui};
use crate::selection::Selector;
use crate::session::{RoundReport, Session, SessionError, TracingHooks, resolve_round};
use anyhow::Result;
use rand::TryRngCore;

/// Settle the round through TUI menus, then play it full-screen
///
/// Returns `None` when the player quit.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or restored, or the
/// round fails for any reason other than the player quitting.
pub fn run_play<R: TryRngCore>(
    request: &RoundRequest<'_>,
    selector: &mut Selector<R>,
) -> Result<Option<RoundReport>> {
    let result = run_tui(|screen| -> Result<RoundReport, SessionError> {
        let (category, difficulty) = resolve_round(
            request.catalog,
            request.difficulty,
            request.mode,
            selector,
            screen,
        )?;
        screen.set_caption(format!("{} ({difficulty})", category.name()));

        Session::new(TuiInput::new(TerminalKeys), &mut *screen, request.max_mistakes)
            .with_hooks(TracingHooks)
            .play(selector, category, difficulty)
    })?;

    finish(result)
}
