//! TUI rendering with ratatui
//!
//! Gallows, board status, alphabet and messages, with menus drawn in place of
//! the board while a choice is pending.

use super::app::{App, BoardView, MenuView, MessageStyle};
use crate::console::formatters::{FIGURE_HEIGHT, figure_art, spaced_pattern};
use crate::core::Outcome;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, ListState, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    if let Some(menu) = &app.menu {
        render_menu(f, menu, chunks[1]);
    } else if let Some(board) = &app.board {
        render_board(f, board, app.outcome, chunks[1]);
    } else {
        let waiting = Paragraph::new("Preparing the round...")
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(waiting, chunks[1]);
    }

    render_messages(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match &app.caption {
        Some(caption) => format!("HANGMAN - {caption}"),
        None => "HANGMAN".to_string(),
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_menu(f: &mut Frame, menu: &MenuView, area: Rect) {
    let items: Vec<ListItem> = menu
        .items
        .iter()
        .map(|item| ListItem::new(item.as_str()))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", menu.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("-> ");

    let mut state = ListState::default().with_selected(Some(menu.state.position()));
    f.render_stateful_widget(list, area, &mut state);
}

fn render_board(f: &mut Frame, board: &BoardView, outcome: Option<Outcome>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(17), // Gallows
            Constraint::Min(30),    // Status
        ])
        .split(area);

    // Drawing plus its borders; the rest of the column stays empty
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FIGURE_HEIGHT + 2), Constraint::Min(0)])
        .split(chunks[0]);
    render_gallows(f, board, outcome, left[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Word
            Constraint::Length(3), // Mistakes gauge
            Constraint::Length(4), // Alphabet
        ])
        .split(chunks[1]);

    render_word(f, board, right[0]);
    render_mistakes(f, board, right[1]);
    render_alphabet(f, board, right[2]);
}

fn render_gallows(f: &mut Frame, board: &BoardView, outcome: Option<Outcome>, area: Rect) {
    let color = match outcome {
        Some(Outcome::Won) => Color::Green,
        Some(Outcome::Lost) => Color::Red,
        None => Color::White,
    };

    let gallows = Paragraph::new(figure_art(board.figure))
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_word(f: &mut Frame, board: &BoardView, area: Rect) {
    let mut content = vec![
        Line::from(vec![
            Span::raw("Word:     "),
            Span::styled(
                spaced_pattern(&board.pattern),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Attempts: {}", board.attempts)),
    ];

    if let Some(hint) = &board.hint {
        content.push(Line::from(vec![
            Span::raw("Hint:     "),
            Span::styled(hint.as_str(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_mistakes(f: &mut Frame, board: &BoardView, area: Rect) {
    let max = board.max_mistakes.max(1);
    let ratio = (f64::from(board.mistakes) / f64::from(max)).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Mistakes ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio)
        .label(format!("{} / {}", board.mistakes, board.max_mistakes));

    f.render_widget(gauge, area);
}

fn render_alphabet(f: &mut Frame, board: &BoardView, area: Rect) {
    let spans: Vec<Span> = board
        .letters
        .iter()
        .flat_map(|&(letter, used)| {
            let span = if used {
                Span::styled(
                    letter.to_uppercase().to_string(),
                    Style::default().fg(Color::DarkGray),
                )
            } else {
                Span::styled(
                    letter.to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                )
            };
            [span, Span::raw(" ")]
        })
        .collect();

    let alphabet = Paragraph::new(Line::from(spans))
        .block(Block::default().title(" Letters ").borders(Borders::ALL))
        .wrap(Wrap { trim: true });

    f.render_widget(alphabet, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = if app.menu.is_some() {
        "Up/Down: Move | Enter: Select | Esc: Quit"
    } else if app.outcome.is_some() {
        "Any key: Exit"
    } else {
        "a-z: Guess a letter | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Game, Word};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_board() {
        let mut game = Game::new(&Word::new("apple", "A fruit"), 2);
        game.guess('p');
        game.guess('z');

        let mut app = App::new();
        app.caption = Some("Fruits (Easy)".to_string());
        app.board = Some(BoardView::from_game(&game));

        let screen = render(&app);
        assert!(screen.contains("HANGMAN - Fruits (Easy)"));
        assert!(screen.contains("_ p p _ _"));
        assert!(screen.contains("Attempts: 2"));
        assert!(screen.contains("1 / 2"));
        assert!(screen.contains("Hint:     A fruit"));
        assert!(screen.contains("   O   |"));
        assert!(screen.contains("a-z: Guess a letter"));
    }

    #[test]
    fn gallows_panel_fits_the_figure() {
        let mut app = App::new();
        app.board = Some(BoardView::from_game(&Game::new(&Word::bare("fig"), 6)));

        let screen = render(&app);
        let rows: Vec<&str> = screen.lines().collect();
        // Main content starts below the three-line header
        let bottom = 3 + usize::from(FIGURE_HEIGHT) + 1;
        let left = |y: usize| rows[y].chars().take(17).collect::<String>();

        assert!(left(bottom - 1).contains("========="));
        assert!(!left(bottom).trim().is_empty());
        assert!(left(bottom + 1).trim().is_empty());
    }

    #[test]
    fn renders_menu_over_board() {
        let mut app = App::new();
        app.board = Some(BoardView::from_game(&Game::new(&Word::bare("fig"), 6)));
        let mut view = MenuView {
            title: "Choose category:".to_string(),
            items: vec!["Animals".to_string(), "Fruits".to_string()],
            state: crate::console::MenuState::new(2),
        };
        view.state.move_down();
        app.menu = Some(view);

        let screen = render(&app);
        assert!(screen.contains("Choose category:"));
        assert!(screen.contains("-> Fruits"));
        assert!(!screen.contains("Attempts:"));
    }

    #[test]
    fn renders_placeholder_before_round() {
        let screen = render(&App::new());
        assert!(screen.contains("Preparing the round..."));
        assert!(screen.contains("Guess the word one letter at a time."));
    }

    #[test]
    fn renders_result_help() {
        let mut app = App::new();
        app.board = Some(BoardView::from_game(&Game::new(&Word::bare("fig"), 6)));
        app.outcome = Some(Outcome::Lost);
        assert!(render(&app).contains("Any key: Exit"));
    }
}
