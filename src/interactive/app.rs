//! TUI application state and logic

use crate::core::{Color, PegColor};
use crate::game::{BoardEvent, GameState, Session, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub session: Session,
    pub help_text: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub show_help: bool,
    pub should_quit: bool,
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

impl App {
    #[must_use]
    pub fn new(session: Session, help_text: String) -> Self {
        Self {
            session,
            help_text,
            messages: vec![
                Message {
                    text: "Welcome! Crack the hidden pattern of four colors.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Pick colors with 1-6 (or r y b g k w). Press 'h' for help.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            show_help: false,
            should_quit: false,
        }
    }

    /// Add the palette color at zero-based `index` to the current guess
    pub fn pick_color(&mut self, index: usize) {
        let result = Color::from_index(index)
            .map_err(|e| e.to_string())
            .and_then(|color| {
                self.session
                    .select_peg(PegColor::Guess(color))
                    .map_err(|e| e.to_string())
            });

        match result {
            Ok(events) => self.apply_events(&events),
            Err(reason) => self.add_message(&reason, MessageStyle::Error),
        }
    }

    fn apply_events(&mut self, events: &[BoardEvent]) {
        for event in events {
            match event {
                BoardEvent::RowScored { row, feedback } if !feedback.is_win() => {
                    self.add_message(
                        &format!("Row {}: {feedback}", row + 1),
                        MessageStyle::Info,
                    );
                }
                BoardEvent::GameOver(state) => {
                    self.stats.record(*state);
                    let (text, style) = match state {
                        GameState::Won { rows_used: 1 } => {
                            ("🎯 FIRST ROW! Extraordinary! 🌟".to_string(), MessageStyle::Success)
                        }
                        GameState::Won { rows_used } => (
                            format!("🎉 You win! Solved in {rows_used} rows 🎉"),
                            MessageStyle::Success,
                        ),
                        GameState::Lost => ("You lose.".to_string(), MessageStyle::Error),
                        GameState::Revealed => {
                            ("Solution shown. Game over.".to_string(), MessageStyle::Info)
                        }
                        GameState::InProgress { .. } => continue,
                    };
                    self.add_message(&text, style);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                }
                _ => {}
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New game started! Good luck.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_solution(&mut self) {
        let events = self.session.reveal();
        self.apply_events(&events);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            // Any key closes the help panel
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.show_solution(),
            KeyCode::Char('h' | '?') => self.show_help = true,
            KeyCode::Char(c @ '1'..='9') => {
                self.pick_color(c as usize - '1' as usize);
            }
            KeyCode::Char(c) => {
                if let Some(index) = "rybgkw".find(c.to_ascii_lowercase()) {
                    self.pick_color(index);
                }
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn app() -> App {
        let session = Session::with_seed(GameConfig::default(), 8).unwrap();
        App::new(session, "help".to_string())
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn number_keys_pick_palette_colors() {
        let mut app = app();
        press(&mut app, '1');
        press(&mut app, '3');
        assert_eq!(app.session.guess().colors(), &[Color::Red, Color::Blue]);
    }

    #[test]
    fn letter_keys_pick_palette_colors() {
        let mut app = app();
        press(&mut app, 'k');
        press(&mut app, 'W');
        assert_eq!(app.session.guess().colors(), &[Color::Black, Color::White]);
    }

    #[test]
    fn duplicate_pick_shows_error() {
        let mut app = app();
        press(&mut app, '2');
        press(&mut app, '2');
        assert_eq!(app.session.guess().len(), 1);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("already contains yellow"));
    }

    #[test]
    fn out_of_palette_key_shows_error() {
        let mut app = app();
        press(&mut app, '9');
        assert!(app.session.guess().is_empty());
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn show_solution_ends_game_and_counts() {
        let mut app = app();
        press(&mut app, 's');
        assert_eq!(app.session.state(), GameState::Revealed);
        assert_eq!(app.stats.total_games, 1);

        press(&mut app, '1');
        assert!(app.messages.last().unwrap().text.contains("game is over"));

        press(&mut app, 'n');
        assert_eq!(app.session.state(), GameState::InProgress { rows_used: 0 });
    }

    #[test]
    fn help_toggles_and_swallows_next_key() {
        let mut app = app();
        press(&mut app, 'h');
        assert!(app.show_help);
        press(&mut app, 'q');
        assert!(!app.show_help);
        assert!(!app.should_quit);
        press(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
