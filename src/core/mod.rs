//! Core domain types for Pattern Guess
//!
//! Colors, pegs, solutions, guesses and the scoring rule. Nothing here knows
//! about terminals, input devices or the session that drives a game.

mod code;
mod color;
mod feedback;

pub use code::{CodeError, ConfigError, Guess, GuessError, Solution, check_dimensions};
pub use color::{Color, ColorError, FeedbackColor, Peg, PegColor, PegKind};
pub use feedback::Feedback;
