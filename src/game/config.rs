//! Board dimensions

use crate::core::{Color, ConfigError, check_dimensions};

/// Fixed board dimensions for a game
///
/// The defaults describe the classic board: four slots, six colors, nine rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub code_length: usize,
    pub palette_size: usize,
    pub max_rows: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            code_length: 4,
            palette_size: Color::ALL.len(),
            max_rows: 9,
        }
    }
}

impl GameConfig {
    /// Check that a game can be played with these dimensions
    ///
    /// # Errors
    /// Returns `ConfigError` if there are no rows or the code cannot be drawn
    /// from the palette.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::NoRows);
        }
        check_dimensions(self.palette_size, self.code_length)
    }

    /// Colors a player may pick from
    #[must_use]
    pub fn palette(&self) -> &'static [Color] {
        let all: &'static [Color] = &Color::ALL;
        all.get(..self.palette_size).unwrap_or(all)
    }
}
