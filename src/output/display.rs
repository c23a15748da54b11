//! Display functions for command results and the text-mode board

use super::formatters::{code_to_letters, colored_code, colored_peg, feedback_to_symbols};
use crate::commands::EvaluationResult;
use crate::core::PegColor;
use crate::game::{BoardEvent, GameState, Session};
use colored::Colorize;
use std::io::{self, Write};

/// Print the result of scoring one guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Solution: {}  {}",
        colored_code(result.solution.colors()),
        code_to_letters(result.solution.colors()).bright_black()
    );
    println!(
        "Guess:    {}  {}",
        colored_code(&result.guess),
        code_to_letters(&result.guess).bright_black()
    );
    println!("{}", "─".repeat(40).cyan());

    println!(
        "\nFeedback: {}  ({})",
        feedback_to_symbols(result.feedback).bright_white().bold(),
        result.feedback
    );
    if result.feedback.is_win() {
        println!("{}", "✅ Exact match!".green().bold());
    }
}

/// Write the board: solution row (hidden until the game ends) then each scored row
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_board<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let width = session.config().code_length;

    match session.revealed_solution() {
        Some(solution) => writeln!(out, "  Solution  {}", colored_code(solution.colors()))?,
        None => writeln!(out, "  Solution  {}", vec!["?"; width].join(" ").bright_black())?,
    }
    writeln!(out, "  {}", "─".repeat(24).bright_black())?;

    for (i, row) in session.rows().iter().enumerate() {
        writeln!(
            out,
            "  {:>2}.  {}  {}",
            i + 1,
            colored_code(&row.guess),
            feedback_to_symbols(row.feedback)
        )?;
    }

    if !session.state().is_over() {
        let mut pending = session
            .guess()
            .colors()
            .iter()
            .map(|&c| colored_peg(c).to_string())
            .collect::<Vec<_>>();
        pending.resize(width, "_".bright_black().to_string());
        writeln!(
            out,
            "  {:>2}.  {}",
            session.rows().len() + 1,
            pending.join(" ")
        )?;
    }

    Ok(())
}

/// Write a line for each board event worth announcing in text mode
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_events<W: Write>(out: &mut W, events: &[BoardEvent]) -> io::Result<()> {
    for event in events {
        match event {
            BoardEvent::RowScored { row, feedback } => {
                writeln!(
                    out,
                    "Row {}: {}  ({feedback})",
                    row + 1,
                    feedback_to_symbols(*feedback)
                )?;
            }
            BoardEvent::SolutionRevealed(pegs) => {
                let colors: Vec<_> = pegs
                    .iter()
                    .filter_map(|peg| match peg.color {
                        PegColor::Guess(c) => Some(c),
                        PegColor::Feedback(_) => None,
                    })
                    .collect();
                writeln!(out, "Solution: {}", colored_code(&colors))?;
            }
            BoardEvent::GameOver(state) => writeln!(out, "{}", outcome_message(*state))?,
            BoardEvent::GuessPeg { .. } | BoardEvent::FeedbackPeg { .. } => {}
        }
    }
    Ok(())
}

/// Player-facing message for a finished game
#[must_use]
pub fn outcome_message(state: GameState) -> String {
    match state {
        GameState::Won { rows_used: 1 } => "🏆 You win! Cracked it on the first row!"
            .green()
            .bold()
            .to_string(),
        GameState::Won { rows_used } => format!("🎉 You win! Solved in {rows_used} rows.")
            .green()
            .bold()
            .to_string(),
        GameState::Lost => "❌ You lose.".red().bold().to_string(),
        GameState::Revealed => "Game ended.".yellow().to_string(),
        GameState::InProgress { rows_used } => format!("{rows_used} rows played"),
    }
}
