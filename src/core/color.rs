//! Peg colors and pegs
//!
//! Two disjoint palettes exist: the guess palette used by solutions and
//! guesses, and the feedback palette used only to report match quality.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A color from the guess palette, in palette order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Red,
    Yellow,
    Blue,
    Green,
    Black,
    White,
}

impl Color {
    /// The full guess palette in order
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Yellow,
        Self::Blue,
        Self::Green,
        Self::Black,
        Self::White,
    ];

    /// Look up a color by its zero-based palette index
    ///
    /// # Errors
    /// Returns `ColorError::IndexOutOfRange` if `index` is past the end of the palette.
    pub fn from_index(index: usize) -> Result<Self, ColorError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(ColorError::IndexOutOfRange(index))
    }

    /// Zero-based position in the palette
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Yellow => "yellow",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color from the feedback palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedbackColor {
    /// Right color, right slot (drawn white)
    Exact,
    /// Right color, wrong slot (drawn black)
    Partial,
}

impl FeedbackColor {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Partial => "partial",
        }
    }
}

impl fmt::Display for FeedbackColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color tagged with the palette it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PegColor {
    Guess(Color),
    Feedback(FeedbackColor),
}

/// Error type for unrecognized color input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unknown color '{0}'")]
    Unknown(String),
    #[error("no color at palette position {}", .0.saturating_add(1))]
    IndexOutOfRange(usize),
}

impl FromStr for PegColor {
    type Err = ColorError;

    /// Parse a color name or a 1-based palette position
    ///
    /// # Examples
    /// ```
    /// use pattern_guess::core::{Color, FeedbackColor, PegColor};
    ///
    /// assert_eq!("Blue".parse::<PegColor>(), Ok(PegColor::Guess(Color::Blue)));
    /// assert_eq!("3".parse::<PegColor>(), Ok(PegColor::Guess(Color::Blue)));
    /// assert_eq!("exact".parse::<PegColor>(), Ok(PegColor::Feedback(FeedbackColor::Exact)));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();

        if let Ok(position) = token.parse::<usize>() {
            let index = position
                .checked_sub(1)
                .ok_or_else(|| ColorError::Unknown(token.clone()))?;
            return Color::from_index(index).map(Self::Guess);
        }

        if let Some(color) = Color::ALL.into_iter().find(|c| c.name() == token) {
            return Ok(Self::Guess(color));
        }

        match token.as_str() {
            "exact" => Ok(Self::Feedback(FeedbackColor::Exact)),
            "partial" => Ok(Self::Feedback(FeedbackColor::Partial)),
            _ => Err(ColorError::Unknown(s.trim().to_string())),
        }
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<PegColor>()? {
            PegColor::Guess(color) => Ok(color),
            PegColor::Feedback(_) => Err(ColorError::Unknown(s.trim().to_string())),
        }
    }
}

/// Which part of the board a peg sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegKind {
    /// Guess and solution pegs
    Pattern,
    /// Feedback pegs
    Info,
}

impl PegKind {
    /// Drawing diameter in board units
    #[must_use]
    pub const fn diameter(self) -> u16 {
        match self {
            Self::Pattern => 25,
            Self::Info => 10,
        }
    }
}

/// A colored peg at a slot within its row
///
/// Equality compares color only; slot and kind are placement details.
#[derive(Debug, Clone, Copy)]
pub struct Peg {
    pub color: PegColor,
    pub slot: usize,
}

impl Peg {
    #[must_use]
    pub const fn pattern(color: Color, slot: usize) -> Self {
        Self {
            color: PegColor::Guess(color),
            slot,
        }
    }

    #[must_use]
    pub const fn info(color: FeedbackColor, slot: usize) -> Self {
        Self {
            color: PegColor::Feedback(color),
            slot,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PegKind {
        match self.color {
            PegColor::Guess(_) => PegKind::Pattern,
            PegColor::Feedback(_) => PegKind::Info,
        }
    }
}

impl PartialEq for Peg {
    fn eq(&self, other: &Self) -> bool {
        self.color == other.color
    }
}

impl Eq for Peg {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_order_matches_index() {
        for (i, color) in Color::ALL.into_iter().enumerate() {
            assert_eq!(color.index(), i);
            assert_eq!(Color::from_index(i), Ok(color));
        }
        assert_eq!(Color::from_index(6), Err(ColorError::IndexOutOfRange(6)));
    }

    #[test]
    fn parse_names_case_insensitive() {
        assert_eq!("RED".parse::<PegColor>(), Ok(PegColor::Guess(Color::Red)));
        assert_eq!(" white ".parse::<PegColor>(), Ok(PegColor::Guess(Color::White)));
        assert_eq!("Green".parse::<Color>(), Ok(Color::Green));
    }

    #[test]
    fn parse_palette_positions() {
        assert_eq!("1".parse::<PegColor>(), Ok(PegColor::Guess(Color::Red)));
        assert_eq!("6".parse::<PegColor>(), Ok(PegColor::Guess(Color::White)));
        assert!(matches!(
            "7".parse::<PegColor>(),
            Err(ColorError::IndexOutOfRange(6))
        ));
        assert!("0".parse::<PegColor>().is_err());
    }

    #[test]
    fn feedback_names_are_not_guess_colors() {
        assert_eq!(
            "partial".parse::<PegColor>(),
            Ok(PegColor::Feedback(FeedbackColor::Partial))
        );
        assert!("exact".parse::<Color>().is_err());
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            "purple".parse::<PegColor>(),
            Err(ColorError::Unknown("purple".to_string()))
        );
    }

    #[test]
    fn peg_equality_ignores_slot_and_kind_size() {
        assert_eq!(Peg::pattern(Color::Blue, 0), Peg::pattern(Color::Blue, 3));
        assert_ne!(Peg::pattern(Color::Blue, 0), Peg::pattern(Color::Red, 0));
        assert_ne!(
            Peg::pattern(Color::White, 0),
            Peg::info(FeedbackColor::Exact, 0)
        );
    }

    #[test]
    fn peg_kind_sizes() {
        assert_eq!(Peg::pattern(Color::Red, 0).kind(), PegKind::Pattern);
        assert_eq!(Peg::info(FeedbackColor::Partial, 1).kind(), PegKind::Info);
        assert!(PegKind::Pattern.diameter() > PegKind::Info.diameter());
    }

    #[test]
    fn display_uses_names() {
        assert_eq!(Color::Yellow.to_string(), "yellow");
        assert_eq!(FeedbackColor::Exact.to_string(), "exact");
    }
}
