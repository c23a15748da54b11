//! Evaluate command
//!
//! Scores a single guess against an explicit solution.

use crate::core::{CodeError, Color, ColorError, Feedback, Guess, GuessError, Solution};
use thiserror::Error;

/// Result of scoring one guess
pub struct EvaluationResult {
    pub solution: Solution,
    pub guess: Vec<Color>,
    pub feedback: Feedback,
}

/// Error type for the evaluate command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error("invalid solution: {0}")]
    Solution(#[from] CodeError),
    #[error("invalid guess: {0}")]
    Guess(#[from] GuessError),
    #[error("guess has {guess} colors but the solution has {solution}")]
    LengthMismatch { solution: usize, guess: usize },
}

/// Parse a list of colors separated by commas and/or whitespace
///
/// # Errors
/// Returns `ColorError` for the first token that is not a guess color.
///
/// # Examples
/// ```
/// use pattern_guess::commands::evaluate::parse_colors;
/// use pattern_guess::core::Color;
///
/// let colors = parse_colors("red, blue 3").unwrap();
/// assert_eq!(colors, vec![Color::Red, Color::Blue, Color::Blue]);
/// ```
pub fn parse_colors(list: &str) -> Result<Vec<Color>, ColorError> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse::<Color>)
        .collect()
}

/// Score `guess` against `solution`, both given as color lists
///
/// # Errors
///
/// Returns an error if:
/// - Either list contains an unknown color
/// - The solution is empty or repeats a color
/// - The guess length differs from the solution, or the guess repeats a color
pub fn evaluate_codes(solution: &str, guess: &str) -> Result<EvaluationResult, EvaluateError> {
    let solution = Solution::from_colors(parse_colors(solution)?)?;
    let guess_colors = parse_colors(guess)?;

    if guess_colors.len() != solution.len() {
        return Err(EvaluateError::LengthMismatch {
            solution: solution.len(),
            guess: guess_colors.len(),
        });
    }

    let mut guess = Guess::new(solution.len());
    for &color in &guess_colors {
        guess.push(color)?;
    }

    let feedback = Feedback::evaluate(&solution, &guess);

    Ok(EvaluationResult {
        solution,
        guess: guess_colors,
        feedback,
    })
}
