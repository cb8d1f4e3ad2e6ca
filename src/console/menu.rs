//! Arrow-key menu for the console front-end
//!
//! Draws a list with a `->` marker, moves with Up/Down (wrapping around),
//! selects with Enter and cancels with Esc or Ctrl-C.

use crate::session::{Chooser, InputError};
use crossterm::{
    cursor::{Hide, MoveToPreviousLine, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, info};

const INTRO_LINES: u16 = 3;

/// Terminal lines taken by `items` entries, saturating at the cursor range
fn item_lines(items: usize) -> u16 {
    u16::try_from(items).unwrap_or(u16::MAX)
}

/// Cursor position within a menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    position: usize,
    len: usize,
}

/// Result of one key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    Moved,
    Chosen(usize),
    Cancelled,
    Ignored,
}

impl MenuState {
    #[must_use]
    pub const fn new(len: usize) -> Self {
        Self { position: 0, len }
    }

    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn move_up(&mut self) {
        if self.len > 0 {
            self.position = (self.position + self.len - 1) % self.len;
        }
    }

    pub const fn move_down(&mut self) {
        if self.len > 0 {
            self.position = (self.position + 1) % self.len;
        }
    }

    pub fn handle(&mut self, key: KeyEvent) -> MenuStep {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                MenuStep::Cancelled
            }
            KeyCode::Esc => MenuStep::Cancelled,
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                MenuStep::Moved
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                MenuStep::Moved
            }
            KeyCode::Enter if self.len > 0 => MenuStep::Chosen(self.position),
            _ => MenuStep::Ignored,
        }
    }
}

/// Menu drawn on a line-oriented terminal
pub struct ConsoleMenu<W> {
    writer: W,
}

impl ConsoleMenu<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleMenu<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn draw_items(&mut self, items: &[String], state: MenuState, redraw: bool) -> io::Result<()> {
        if redraw {
            queue!(self.writer, MoveToPreviousLine(item_lines(items.len())))?;
        }
        for (i, item) in items.iter().enumerate() {
            let marker = if i == state.position() { "->" } else { "  " };
            queue!(self.writer, Clear(ClearType::CurrentLine))?;
            write!(self.writer, "{marker} {item}\r\n")?;
        }
        self.writer.flush()
    }

    fn erase(&mut self, items: &[String]) -> io::Result<()> {
        let lines = item_lines(items.len()).saturating_add(INTRO_LINES);
        queue!(
            self.writer,
            MoveToPreviousLine(lines),
            Clear(ClearType::FromCursorDown)
        )?;
        self.writer.flush()
    }

    /// Run the menu with keys from `next_key` until a choice or cancel
    ///
    /// # Errors
    /// `Quit` on cancel, `Io` when writing or reading keys fails.
    pub fn run_with<K>(
        &mut self,
        title: &str,
        items: &[String],
        mut next_key: K,
    ) -> Result<usize, InputError>
    where
        K: FnMut() -> io::Result<KeyEvent>,
    {
        let mut state = MenuState::new(items.len());

        write!(self.writer, "{title}\r\n")?;
        write!(
            self.writer,
            "Use the arrow keys to navigate and press Enter to select\r\n"
        )?;
        write!(self.writer, "Press ESC to exit\r\n")?;
        self.draw_items(items, state, false)?;

        let chosen = loop {
            let key = next_key()?;
            match state.handle(key) {
                MenuStep::Moved => self.draw_items(items, state, true)?,
                MenuStep::Chosen(index) => break Ok(index),
                MenuStep::Cancelled => break Err(InputError::Quit),
                MenuStep::Ignored => {}
            }
        };

        self.erase(items)?;
        chosen
    }
}

/// Block until the next key press
///
/// # Errors
/// Propagates terminal read failures.
pub fn read_key() -> io::Result<KeyEvent> {
    loop {
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                return Ok(key);
            }
        }
    }
}

impl<W: Write> Chooser for ConsoleMenu<W> {
    fn choose(&mut self, title: &str, items: &[String]) -> Result<usize, InputError> {
        debug!(title, items = items.len(), "Menu opened");

        enable_raw_mode()?;
        execute!(self.writer, Hide)?;

        let result = self.run_with(title, items, read_key);

        execute!(self.writer, Show)?;
        disable_raw_mode()?;

        match &result {
            Ok(index) => info!(title, choice = %items[*index], "Menu choice"),
            Err(err) => info!(title, %err, "Menu closed"),
        }
        result
    }
}
