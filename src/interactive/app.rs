//! TUI application state and logic

use super::rendering;
use crate::console::formatters::alphabet;
use crate::console::{MenuState, MenuStep, read_key};
use crate::core::{Figure, Game, Outcome};
use crate::session::{Chooser, GameInput, GameOutput, InputError, parse_letter};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io;
use tracing::debug;

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Where key presses come from
pub trait KeySource {
    /// Block until the next key press
    ///
    /// # Errors
    /// Propagates device failures.
    fn next_key(&mut self) -> io::Result<KeyEvent>;
}

/// Keys from the real terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> io::Result<KeyEvent> {
        read_key()
    }
}

fn is_cancel(key: &KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Snapshot of a game, taken at every render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub attempts: u32,
    pub mistakes: u32,
    pub max_mistakes: u32,
    pub pattern: String,
    pub hint: Option<String>,
    pub figure: Figure,
    pub letters: Vec<(char, bool)>,
    pub word: String,
}

impl BoardView {
    #[must_use]
    pub fn from_game(game: &Game) -> Self {
        let hint = (game.hint_available() && !game.hint().is_empty())
            .then(|| game.hint().to_string());

        Self {
            attempts: game.attempts(),
            mistakes: game.mistakes(),
            max_mistakes: game.max_mistakes(),
            pattern: game.pattern(),
            hint,
            figure: game.figure(),
            letters: alphabet(game),
            word: game.word().to_string(),
        }
    }
}

/// An open menu
#[derive(Debug, Clone)]
pub struct MenuView {
    pub title: String,
    pub items: Vec<String>,
    pub state: MenuState,
}

impl MenuView {
    fn new(title: &str, items: &[String]) -> Self {
        Self {
            title: title.to_string(),
            items: items.to_vec(),
            state: MenuState::new(items.len()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Application state
#[derive(Debug, Clone)]
pub struct App {
    pub caption: Option<String>,
    pub board: Option<BoardView>,
    pub menu: Option<MenuView>,
    pub outcome: Option<Outcome>,
    pub messages: Vec<Message>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    #[must_use]
    pub fn new() -> Self {
        Self {
            caption: None,
            board: None,
            menu: None,
            outcome: None,
            messages: vec![Message {
                text: "Guess the word one letter at a time.".to_string(),
                style: MessageStyle::Info,
            }],
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Full-screen front-end: draws the board and answers menus
pub struct TuiScreen<B: Backend, K> {
    terminal: Terminal<B>,
    keys: K,
    app: App,
}

impl<B: Backend, K: KeySource> TuiScreen<B, K> {
    pub fn new(terminal: Terminal<B>, keys: K) -> Self {
        Self {
            terminal,
            keys,
            app: App::new(),
        }
    }

    #[must_use]
    pub const fn app(&self) -> &App {
        &self.app
    }

    /// Text shown in the header next to the title, e.g. the category
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.app.caption = Some(caption.into());
    }

    pub fn into_terminal(self) -> Terminal<B> {
        self.terminal
    }

    /// Redraw the whole screen
    ///
    /// # Errors
    /// Propagates backend failures.
    pub fn draw(&mut self) -> io::Result<()> {
        self.terminal.draw(|f| rendering::ui(f, &self.app))?;
        Ok(())
    }

    fn run_menu(&mut self) -> Result<usize, InputError> {
        loop {
            self.draw()?;
            let key = self.keys.next_key()?;
            let Some(menu) = self.app.menu.as_mut() else {
                return Err(InputError::Closed);
            };
            match menu.state.handle(key) {
                MenuStep::Chosen(index) => return Ok(index),
                MenuStep::Cancelled => return Err(InputError::Quit),
                MenuStep::Moved | MenuStep::Ignored => {}
            }
        }
    }
}

impl<B: Backend, K: KeySource> GameOutput for TuiScreen<B, K> {
    fn show_game(&mut self, game: &Game) -> io::Result<()> {
        self.app.board = Some(BoardView::from_game(game));
        self.draw()
    }

    fn show_result(&mut self, outcome: Outcome, game: &Game) -> io::Result<()> {
        self.app.board = Some(BoardView::from_game(game));
        self.app.outcome = Some(outcome);

        let (text, style) = match outcome {
            Outcome::Won => (
                format!("You won! The word was: {}", game.word()),
                MessageStyle::Success,
            ),
            Outcome::Lost => (
                format!("You lost! The word was: {}", game.word()),
                MessageStyle::Error,
            ),
        };
        self.app.add_message(&text, style);
        self.app.add_message("Press any key to exit.", MessageStyle::Info);
        self.draw()?;

        // Keep the final board up until the player has seen it
        self.keys.next_key()?;
        Ok(())
    }

    fn show_input_error(&mut self, error: &InputError) -> io::Result<()> {
        self.app
            .add_message(&format!("Error: {error}. Try again."), MessageStyle::Error);
        self.draw()
    }
}

impl<B: Backend, K: KeySource> Chooser for TuiScreen<B, K> {
    fn choose(&mut self, title: &str, items: &[String]) -> Result<usize, InputError> {
        self.app.menu = Some(MenuView::new(title, items));
        let result = self.run_menu();
        self.app.menu = None;

        debug!(title, ?result, "Menu closed");
        result
    }
}

/// Letter input from single key presses
///
/// Esc and Ctrl-C quit; keys that produce no character are ignored.
pub struct TuiInput<K> {
    keys: K,
}

impl<K: KeySource> TuiInput<K> {
    pub const fn new(keys: K) -> Self {
        Self { keys }
    }
}

impl<K: KeySource> GameInput for TuiInput<K> {
    fn read_letter(&mut self) -> Result<char, InputError> {
        loop {
            let key = self.keys.next_key()?;
            if is_cancel(&key) {
                return Err(InputError::Quit);
            }
            if let KeyCode::Char(c) = key.code {
                return Ok(parse_letter(&c.to_string())?);
            }
        }
    }
}

/// Run `body` inside a full-screen terminal, restoring it afterwards
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails. Errors from `body` are
/// part of its return value.
pub fn run_tui<T, F>(body: F) -> anyhow::Result<T>
where
    F: FnOnce(&mut TuiScreen<CrosstermBackend<io::Stdout>, TerminalKeys>) -> T,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let mut screen = TuiScreen::new(terminal, TerminalKeys);
    let res = body(&mut screen);

    // Restore terminal
    let mut terminal = screen.into_terminal();
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(res)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::{MalformedInput, Session};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Replays keys, then fails like a closed device
    struct Script(VecDeque<KeyEvent>);

    impl Script {
        fn codes(codes: &[KeyCode]) -> Self {
            Self(
                codes
                    .iter()
                    .map(|code| KeyEvent::new(*code, KeyModifiers::NONE))
                    .collect(),
            )
        }

        fn letters(letters: &str) -> Self {
            Self::codes(&letters.chars().map(KeyCode::Char).collect::<Vec<_>>())
        }
    }

    impl KeySource for Script {
        fn next_key(&mut self) -> io::Result<KeyEvent> {
            self.0
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script ended"))
        }
    }

    fn screen(keys: Script) -> TuiScreen<TestBackend, Script> {
        TuiScreen::new(Terminal::new(TestBackend::new(80, 30)).unwrap(), keys)
    }

    fn items(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn board_view_hides_hint_until_available() {
        let mut game = Game::new(&Word::new("apple", "A fruit"), 4);
        assert_eq!(BoardView::from_game(&game).hint, None);

        game.guess('x');
        game.guess('y');
        let view = BoardView::from_game(&game);
        assert_eq!(view.hint.as_deref(), Some("A fruit"));
        assert_eq!(view.mistakes, 2);
        assert_eq!(view.pattern, "_____");
    }

    #[test]
    fn messages_are_capped() {
        let mut app = App::new();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages[0].text, "message 5");
    }

    #[test]
    fn input_maps_keys() {
        let mut input = TuiInput::new(Script::codes(&[
            KeyCode::Left,
            KeyCode::Char('Q'),
            KeyCode::Char('7'),
            KeyCode::Esc,
        ]));

        assert_eq!(input.read_letter().unwrap(), 'q');
        assert!(matches!(
            input.read_letter(),
            Err(InputError::Malformed(MalformedInput::NotAlphabetic('7')))
        ));
        assert!(matches!(input.read_letter(), Err(InputError::Quit)));
        assert!(matches!(input.read_letter(), Err(InputError::Io(_))));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut input = TuiInput::new(Script(VecDeque::from([KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )])));
        assert!(matches!(input.read_letter(), Err(InputError::Quit)));
    }

    #[test]
    fn menu_returns_choice_and_closes() {
        let mut screen = screen(Script::codes(&[KeyCode::Down, KeyCode::Down, KeyCode::Enter]));
        let choice = screen
            .choose("Choose difficulty:", &items(&["Easy", "Medium", "Hard"]))
            .unwrap();
        assert_eq!(choice, 2);
        assert!(screen.app().menu.is_none());
    }

    #[test]
    fn menu_escape_quits() {
        let mut screen = screen(Script::codes(&[KeyCode::Up, KeyCode::Esc]));
        let err = screen.choose("Choose category:", &items(&["A", "B"])).unwrap_err();
        assert!(matches!(err, InputError::Quit));
        assert!(screen.app().menu.is_none());
    }

    #[test]
    fn input_error_becomes_message() {
        let mut screen = screen(Script::letters(""));
        screen
            .show_input_error(&MalformedInput::NotSingleLetter.into())
            .unwrap();
        let last = screen.app().messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("not a single letter"));
    }

    #[test]
    fn result_waits_for_a_key() {
        let mut game = Game::new(&Word::bare("ox"), 6);
        game.guess('o');
        game.guess('x');

        let mut screen = screen(Script::letters("z"));
        screen.show_result(Outcome::Won, &game).unwrap();
        assert_eq!(screen.app().outcome, Some(Outcome::Won));
        assert!(screen.keys.0.is_empty());

        // Without a key to wait for, the device error surfaces
        let mut screen = self::screen(Script::letters(""));
        assert!(screen.show_result(Outcome::Won, &game).is_err());
    }

    #[test]
    fn full_round_through_tui() {
        let mut screen = screen(Script::letters(" "));
        let input = TuiInput::new(Script::letters("c1at"));

        let report = Session::new(input, &mut screen, 6)
            .run(&Word::bare("cat"))
            .unwrap();

        assert_eq!(report.outcome, Outcome::Won);
        assert_eq!(report.attempts, 3);
        let board = screen.app().board.as_ref().unwrap();
        assert_eq!(board.pattern, "cat");
        assert!(
            screen
                .app()
                .messages
                .iter()
                .any(|m| m.text.contains("'1' is not a letter"))
        );
    }
}
