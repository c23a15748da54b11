//! Interactive TUI
//!
//! Full-screen board driven by single key presses.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::{feedback_grid, ui};
