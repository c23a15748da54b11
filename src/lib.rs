//! Pattern Guess
//!
//! A Mastermind-style code-breaking game: find the hidden pattern of four
//! distinct colors in at most nine rows, guided by exact/partial feedback.
//!
//! # Quick Start
//!
//! ```rust
//! use pattern_guess::core::{Color, Feedback};
//!
//! let solution = [Color::Red, Color::Blue, Color::Green, Color::Yellow];
//! let guess = [Color::Red, Color::Green, Color::Blue, Color::Black];
//!
//! let feedback = Feedback::score(&solution, &guess);
//! assert_eq!((feedback.exact(), feedback.partial()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// How-to-play text
pub mod help;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
