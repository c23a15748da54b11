//! How-to-play text
//!
//! A default help text is compiled into the binary; a replacement can be
//! loaded from a plain text file.

mod embedded;
pub mod loader;

pub use embedded::{HELP_TEXT, HELP_TEXT_LINES};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_matches_const() {
        assert_eq!(HELP_TEXT.lines().count(), HELP_TEXT_LINES);
    }

    #[test]
    fn help_mentions_feedback_pegs() {
        assert!(HELP_TEXT.contains("white peg"));
        assert!(HELP_TEXT.contains("black peg"));
    }
}
