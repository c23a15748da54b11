//! Terminal output formatting
//!
//! Display utilities for CLI results and the text-mode board.

pub mod display;
pub mod formatters;

pub use display::{outcome_message, print_evaluation, write_board, write_events};
