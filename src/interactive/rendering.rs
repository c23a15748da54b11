//! TUI rendering with ratatui
//!
//! Draws the board, palette, messages and status bar.

use super::app::{App, MessageStyle};
use crate::core::{Color as GuessColor, Feedback, FeedbackColor, Peg, PegColor, PegKind};
use crate::game::GameState;
use crate::output::formatters::peg_glyph;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Board background (saddle brown)
const BOARD_BG: Color = Color::Rgb(139, 69, 19);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Palette and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);

    if app.show_help {
        render_help(f, app, chunks[1]);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 PATTERN GUESS")
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

/// Terminal color for a guess-palette color
const fn peg_color(color: GuessColor) -> Color {
    match color {
        GuessColor::Red => Color::Red,
        GuessColor::Yellow => Color::Yellow,
        GuessColor::Blue => Color::Blue,
        GuessColor::Green => Color::Green,
        GuessColor::Black => Color::Black,
        GuessColor::White => Color::White,
    }
}

/// Terminal color for a feedback peg
const fn feedback_color(color: FeedbackColor) -> Color {
    match color {
        FeedbackColor::Exact => Color::White,
        FeedbackColor::Partial => Color::Black,
    }
}

fn pattern_span(color: GuessColor) -> Span<'static> {
    Span::styled(
        format!("{} ", peg_glyph(PegKind::Pattern)),
        Style::default().fg(peg_color(color)).bg(BOARD_BG),
    )
}

fn empty_span(marker: &'static str) -> Span<'static> {
    Span::styled(
        format!("{marker} "),
        Style::default().fg(Color::DarkGray).bg(BOARD_BG),
    )
}

/// Feedback pegs laid out two per line
///
/// Returns one entry per feedback line, each holding up to two pegs.
#[must_use]
pub fn feedback_grid(feedback: Feedback) -> Vec<Vec<Peg>> {
    let pegs: Vec<Peg> = feedback.pegs().collect();
    let lines = usize::from(feedback.slots()).div_ceil(2);
    (0..lines)
        .map(|line| {
            pegs.iter()
                .filter(|peg| peg.slot / 2 == line)
                .copied()
                .collect()
        })
        .collect()
}

fn feedback_spans(pegs: &[Peg]) -> Vec<Span<'static>> {
    pegs.iter()
        .filter_map(|peg| match peg.color {
            PegColor::Feedback(color) => Some(Span::styled(
                format!("{} ", peg_glyph(peg.kind())),
                Style::default().fg(feedback_color(color)).bg(BOARD_BG),
            )),
            PegColor::Guess(_) => None,
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let width = session.config().code_length;
    let mut lines = Vec::new();

    // Solution row, hidden until the game ends
    let mut solution_line = vec![Span::raw("  Solution  ")];
    match session.revealed_solution() {
        Some(solution) => solution_line.extend(solution.colors().iter().map(|&c| pattern_span(c))),
        None => solution_line.extend((0..width).map(|_| empty_span("?"))),
    }
    lines.push(Line::from(solution_line));
    lines.push(Line::from("  ".to_string() + &"─".repeat(12 + width * 2 + 6)));

    for row in 0..session.config().max_rows {
        let mut guess_spans = vec![Span::raw(format!("  {:>2}.      ", row + 1))];
        let mut feedback_lines: Vec<Vec<Peg>> = vec![Vec::new(), Vec::new()];

        if let Some(scored) = session.rows().get(row) {
            guess_spans.extend(scored.guess.iter().map(|&c| pattern_span(c)));
            feedback_lines = feedback_grid(scored.feedback);
        } else if row == session.rows().len() && !session.state().is_over() {
            let placed = session.guess().colors();
            guess_spans.extend(placed.iter().map(|&c| pattern_span(c)));
            guess_spans.extend((placed.len()..width).map(|_| empty_span("_")));
            guess_spans.push(Span::styled(
                " ◀",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            guess_spans.extend((0..width).map(|_| empty_span("·")));
        }

        let mut first = guess_spans;
        first.push(Span::raw("  "));
        first.extend(feedback_spans(
            feedback_lines.first().map(Vec::as_slice).unwrap_or_default(),
        ));
        lines.push(Line::from(first));

        let mut second = vec![Span::raw(" ".repeat(12 + width * 2 + 2))];
        for extra in feedback_lines.iter().skip(1) {
            second.extend(feedback_spans(extra));
        }
        lines.push(Line::from(second));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_side_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(app.session.config().palette_size).unwrap_or(6) + 5),
            Constraint::Min(5), // Messages
        ])
        .split(area);

    render_palette(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_palette(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .session
        .config()
        .palette()
        .iter()
        .enumerate()
        .map(|(i, &color)| {
            let used = app.session.guess().contains(color);
            let label_style = if used {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(format!(" {} ", i + 1)),
                pattern_span(color),
                Span::styled(format!(" {color}"), label_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", peg_glyph(PegKind::Info)),
            Style::default().fg(Color::White).bg(BOARD_BG),
        ),
        Span::raw(" right color, right slot"),
    ]));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} ", peg_glyph(PegKind::Info)),
            Style::default().fg(Color::Black).bg(BOARD_BG),
        ),
        Span::raw(" right color, wrong slot"),
    ]));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Colors ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
    let popup = Rect {
        x: area.x + area.width / 10,
        y: area.y + 1,
        width: area.width - area.width / 5,
        height: area.height.saturating_sub(2),
    };

    let help = Paragraph::new(app.help_text.as_str())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Help | any key to close ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Cyan)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(help, popup);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let mode_text = match app.session.state() {
        GameState::InProgress { .. } => "Playing",
        GameState::Won { .. } => "Won",
        GameState::Lost => "Lost",
        GameState::Revealed => "Revealed",
    };
    let mode = Paragraph::new(format!("Game: {mode_text}")).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let rows_text = format!("Rows left: {}", app.session.rows_left());
    let rows = Paragraph::new(rows_text).alignment(Alignment::Center);
    f.render_widget(rows, chunks[2]);

    let help_text = if app.session.state().is_over() {
        "q: Quit | n: New Game | h: Help"
    } else {
        "1-6: Color | s: Show | n: New | h: Help | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
