//! Simple text mode
//!
//! Line-oriented game without the TUI

use crate::core::PegColor;
use crate::game::{BoardEvent, Session, Statistics};
use crate::output::{write_board, write_events};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the text game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(session: &mut Session, help_text: &str) -> io::Result<Statistics> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(session, help_text, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the text game on arbitrary input and output
///
/// Returns the win/loss tally when the player quits or input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut Session,
    help_text: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<Statistics> {
    let mut stats = Statistics::default();

    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║          Pattern Guess - Text Mode       ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    writeln!(out, "Pick colors by name or number:")?;
    for (i, color) in session.config().palette().iter().enumerate() {
        writeln!(out, "  {} {}", i + 1, color)?;
    }
    writeln!(out, "\nSeveral colors may go on one line, e.g. 'red blue 3 6'.")?;
    writeln!(out, "Commands: 'new', 'show' (reveal solution), 'help', 'quit'\n")?;

    loop {
        write_board(out, session)?;

        if session.state().is_over() {
            let Some(answer) = get_user_input(input, out, "Play again? (yes/no)")? else {
                break;
            };
            if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                new_game(session, out)?;
                continue;
            }
            break;
        }

        let prompt = format!(
            "Row {}, slot {}",
            session.rows().len() + 1,
            session.guess().len() + 1
        );
        let Some(line) = get_user_input(input, out, &prompt)? else {
            break;
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => break,
            "new" | "n" => new_game(session, out)?,
            "show" | "s" => {
                let events = session.reveal();
                record_outcome(&mut stats, &events);
                write_events(out, &events)?;
            }
            "help" | "h" | "?" => writeln!(out, "\n{help_text}")?,
            _ => {
                for token in line
                    .split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                {
                    let result = token
                        .parse::<PegColor>()
                        .map_err(|e| e.to_string())
                        .and_then(|color| session.select_peg(color).map_err(|e| e.to_string()));

                    match result {
                        Ok(events) => {
                            record_outcome(&mut stats, &events);
                            write_events(out, &events)?;
                        }
                        Err(reason) => {
                            writeln!(out, "{} {reason}", "❌".red())?;
                            break;
                        }
                    }
                }
            }
        }
    }

    writeln!(
        out,
        "\n👋 Thanks for playing! Won {} of {} games.\n",
        stats.games_won, stats.total_games
    )?;
    Ok(stats)
}

fn new_game<W: Write>(session: &mut Session, out: &mut W) -> io::Result<()> {
    match session.new_game() {
        Ok(()) => writeln!(out, "\n🔄 New game started!\n"),
        Err(e) => writeln!(out, "{} {e}", "❌".red()),
    }
}

fn record_outcome(stats: &mut Statistics, events: &[BoardEvent]) {
    for event in events {
        if let BoardEvent::GameOver(state) = event {
            stats.record(*state);
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
