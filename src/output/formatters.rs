//! Formatting utilities for terminal output

use crate::core::{Color, Feedback, PegKind};
use colored::{ColoredString, Colorize};

/// Glyph for a peg, sized by kind
#[must_use]
pub const fn peg_glyph(kind: PegKind) -> &'static str {
    match kind {
        PegKind::Pattern => "●",
        PegKind::Info => "•",
    }
}

/// Single-letter code for a color (black is `K` so it does not clash with blue)
#[must_use]
pub const fn color_letter(color: Color) -> char {
    match color {
        Color::Red => 'R',
        Color::Yellow => 'Y',
        Color::Blue => 'B',
        Color::Green => 'G',
        Color::Black => 'K',
        Color::White => 'W',
    }
}

/// Pattern peg painted in its color
#[must_use]
pub fn colored_peg(color: Color) -> ColoredString {
    let glyph = peg_glyph(PegKind::Pattern);
    match color {
        Color::Red => glyph.red(),
        Color::Yellow => glyph.yellow(),
        Color::Blue => glyph.blue(),
        Color::Green => glyph.green(),
        Color::Black => glyph.bright_black(),
        Color::White => glyph.white(),
    }
}

/// Colored pegs separated by spaces
#[must_use]
pub fn colored_code(colors: &[Color]) -> String {
    colors
        .iter()
        .map(|&c| colored_peg(c).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Feedback as symbols: `●` exact, `○` partial, `·` miss
#[must_use]
pub fn feedback_to_symbols(feedback: Feedback) -> String {
    let mut result = String::with_capacity(usize::from(feedback.slots()) * 3);
    result.push_str(&"●".repeat(usize::from(feedback.exact())));
    result.push_str(&"○".repeat(usize::from(feedback.partial())));
    result.push_str(&"·".repeat(usize::from(feedback.misses())));
    result
}

/// Colors as letter codes, e.g. `RYBG`
#[must_use]
pub fn code_to_letters(colors: &[Color]) -> String {
    colors.iter().map(|&c| color_letter(c)).collect()
}

/// Remove ANSI color sequences
#[cfg(test)]
pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_symbols_exact_then_partial() {
        assert_eq!(feedback_to_symbols(Feedback::new(1, 2, 4)), "●○○·");
        assert_eq!(feedback_to_symbols(Feedback::new(4, 0, 4)), "●●●●");
        assert_eq!(feedback_to_symbols(Feedback::new(0, 0, 4)), "····");
    }

    #[test]
    fn letters_are_unique() {
        let letters = code_to_letters(&Color::ALL);
        assert_eq!(letters, "RYBGKW");
    }

    #[test]
    fn glyph_sizes_differ_by_kind() {
        assert_ne!(peg_glyph(PegKind::Pattern), peg_glyph(PegKind::Info));
    }

    #[test]
    fn colored_code_has_one_peg_per_color() {
        assert_eq!(strip_ansi(&colored_code(&[Color::Red, Color::Blue])), "● ●");
    }
}
