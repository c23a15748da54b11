//! Solutions and guesses
//!
//! Both are ordered sequences of distinct guess-palette colors. A solution is
//! generated whole; a guess is assembled one slot at a time.

use super::{Color, Peg};
use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// Invalid code length / palette size combination
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("code length must be at least 1")]
    EmptyCode,
    #[error("cannot pick {length} distinct colors from a palette of {palette}")]
    CodeLongerThanPalette { length: usize, palette: usize },
    #[error("palette size {palette} exceeds the {available} available colors")]
    PaletteTooLarge { palette: usize, available: usize },
    #[error("a game needs at least one row")]
    NoRows,
}

/// Invalid explicit color sequence
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("a code needs at least one color")]
    Empty,
    #[error("color {0} appears more than once")]
    DuplicateColor(Color),
}

/// Rejected attempt to add a color to a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("current guess already contains {0}")]
    DuplicateColor(Color),
    #[error("guess already has all {capacity} pegs")]
    Complete { capacity: usize },
    #[error("slot {got} is not the next open slot ({expected})")]
    SlotOutOfOrder { expected: usize, got: usize },
}

/// Check that `length` distinct colors can be drawn from the first `palette_size` colors
///
/// # Errors
/// Returns `ConfigError` if the length is zero, the palette is larger than
/// the guess palette, or the length exceeds the palette size.
pub const fn check_dimensions(palette_size: usize, length: usize) -> Result<(), ConfigError> {
    if length == 0 {
        return Err(ConfigError::EmptyCode);
    }
    if palette_size > Color::ALL.len() {
        return Err(ConfigError::PaletteTooLarge {
            palette: palette_size,
            available: Color::ALL.len(),
        });
    }
    if length > palette_size {
        return Err(ConfigError::CodeLongerThanPalette {
            length,
            palette: palette_size,
        });
    }
    Ok(())
}

/// The hidden sequence of distinct colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    colors: Vec<Color>,
}

impl Solution {
    /// Draw `length` distinct colors from the first `palette_size` palette colors
    ///
    /// Each slot redraws uniformly until it hits a color not yet used, so every
    /// unused color is equally likely at every step.
    ///
    /// # Errors
    /// Returns `ConfigError` if the dimensions are invalid (see [`check_dimensions`]).
    ///
    /// # Examples
    /// ```
    /// use pattern_guess::core::Solution;
    /// use rand::{SeedableRng, rngs::StdRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let solution = Solution::generate(6, 4, &mut rng).unwrap();
    /// assert_eq!(solution.len(), 4);
    ///
    /// assert!(Solution::generate(3, 4, &mut rng).is_err());
    /// ```
    pub fn generate<R: Rng + ?Sized>(
        palette_size: usize,
        length: usize,
        rng: &mut R,
    ) -> Result<Self, ConfigError> {
        check_dimensions(palette_size, length)?;

        let mut used: FxHashSet<Color> = FxHashSet::default();
        let mut colors = Vec::with_capacity(length);

        while colors.len() < length {
            let color = Color::ALL[rng.random_range(0..palette_size)];
            if used.insert(color) {
                colors.push(color);
            }
        }

        Ok(Self { colors })
    }

    /// Build a solution from explicit colors
    ///
    /// # Errors
    /// Returns `CodeError` if `colors` is empty or repeats a color.
    pub fn from_colors(colors: Vec<Color>) -> Result<Self, CodeError> {
        if colors.is_empty() {
            return Err(CodeError::Empty);
        }
        let mut seen: FxHashSet<Color> = FxHashSet::default();
        if let Some(&dup) = colors.iter().find(|&&c| !seen.insert(c)) {
            return Err(CodeError::DuplicateColor(dup));
        }
        Ok(Self { colors })
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Solution as pattern pegs, one per slot
    pub fn pegs(&self) -> impl Iterator<Item = Peg> + '_ {
        self.colors
            .iter()
            .enumerate()
            .map(|(slot, &color)| Peg::pattern(color, slot))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_colors(f, &self.colors)
    }
}

/// A guess under construction, filled left to right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    colors: Vec<Color>,
    capacity: usize,
}

impl Guess {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            colors: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Put `color` into `slot`, which must be the next open slot
    ///
    /// Returns the slot that was filled. On error the guess is unchanged.
    ///
    /// # Errors
    /// - `GuessError::Complete` if every slot is already filled
    /// - `GuessError::SlotOutOfOrder` if `slot` is not the next open slot
    /// - `GuessError::DuplicateColor` if `color` is already in the guess
    pub fn place(&mut self, color: Color, slot: usize) -> Result<usize, GuessError> {
        if self.is_complete() {
            return Err(GuessError::Complete {
                capacity: self.capacity,
            });
        }
        if slot != self.colors.len() {
            return Err(GuessError::SlotOutOfOrder {
                expected: self.colors.len(),
                got: slot,
            });
        }
        if self.contains(color) {
            return Err(GuessError::DuplicateColor(color));
        }

        self.colors.push(color);
        Ok(slot)
    }

    /// Put `color` into the next open slot
    ///
    /// # Errors
    /// Same as [`Guess::place`], minus the slot ordering case.
    pub fn push(&mut self, color: Color) -> Result<usize, GuessError> {
        self.place(color, self.colors.len())
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(&color)
    }

    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.colors.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_colors(f, &self.colors)
    }
}

fn write_colors(f: &mut fmt::Formatter<'_>, colors: &[Color]) -> fmt::Result {
    for (i, color) in colors.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{color}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn check_dimensions_rejects_bad_combinations() {
        assert_eq!(check_dimensions(6, 0), Err(ConfigError::EmptyCode));
        assert_eq!(
            check_dimensions(3, 4),
            Err(ConfigError::CodeLongerThanPalette {
                length: 4,
                palette: 3
            })
        );
        assert_eq!(
            check_dimensions(7, 4),
            Err(ConfigError::PaletteTooLarge {
                palette: 7,
                available: 6
            })
        );
        assert_eq!(check_dimensions(6, 4), Ok(()));
        assert_eq!(check_dimensions(6, 6), Ok(()));
    }

    #[test]
    fn generate_rejects_length_over_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            Solution::generate(4, 5, &mut rng),
            Err(ConfigError::CodeLongerThanPalette { .. })
        ));
        assert_eq!(
            Solution::generate(6, 0, &mut rng),
            Err(ConfigError::EmptyCode)
        );
    }

    #[test]
    fn generate_full_palette_is_permutation() {
        let mut rng = StdRng::seed_from_u64(99);
        let solution = Solution::generate(6, 6, &mut rng).unwrap();

        let mut sorted = solution.colors().to_vec();
        sorted.sort();
        assert_eq!(sorted, Color::ALL.to_vec());
    }

    #[test]
    fn generate_is_deterministic_for_seed() {
        let a = Solution::generate(6, 4, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = Solution::generate(6, 4, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_reaches_every_color() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut seen: FxHashSet<Color> = FxHashSet::default();
        for _ in 0..200 {
            seen.extend(Solution::generate(6, 4, &mut rng).unwrap().colors());
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn from_colors_validates() {
        assert_eq!(Solution::from_colors(vec![]), Err(CodeError::Empty));
        assert_eq!(
            Solution::from_colors(vec![Color::Red, Color::Blue, Color::Red]),
            Err(CodeError::DuplicateColor(Color::Red))
        );
        let solution = Solution::from_colors(vec![Color::Green, Color::Red]).unwrap();
        assert_eq!(solution.colors(), &[Color::Green, Color::Red]);
    }

    #[test]
    fn solution_pegs_carry_slots() {
        let solution = Solution::from_colors(vec![Color::Blue, Color::White]).unwrap();
        let pegs: Vec<Peg> = solution.pegs().collect();
        assert_eq!(pegs[0], Peg::pattern(Color::Blue, 0));
        assert_eq!(pegs[1].slot, 1);
    }

    #[test]
    fn guess_fills_left_to_right() {
        let mut guess = Guess::new(4);
        assert_eq!(guess.push(Color::Red), Ok(0));
        assert_eq!(guess.place(Color::Blue, 1), Ok(1));
        assert_eq!(
            guess.place(Color::Green, 3),
            Err(GuessError::SlotOutOfOrder {
                expected: 2,
                got: 3
            })
        );
        assert_eq!(guess.len(), 2);
    }

    #[test]
    fn guess_rejects_duplicate_color() {
        let mut guess = Guess::new(4);
        guess.push(Color::Yellow).unwrap();
        guess.push(Color::Black).unwrap();

        assert_eq!(
            guess.push(Color::Yellow),
            Err(GuessError::DuplicateColor(Color::Yellow))
        );
        assert_eq!(guess.len(), 2);
        assert_eq!(guess.colors(), &[Color::Yellow, Color::Black]);
    }

    #[test]
    fn guess_rejects_when_complete() {
        let mut guess = Guess::new(2);
        guess.push(Color::Red).unwrap();
        guess.push(Color::Blue).unwrap();
        assert!(guess.is_complete());

        assert_eq!(
            guess.push(Color::Green),
            Err(GuessError::Complete { capacity: 2 })
        );
        assert_eq!(guess.len(), 2);
    }

    #[test]
    fn guess_clear_resets() {
        let mut guess = Guess::new(4);
        guess.push(Color::White).unwrap();
        guess.clear();
        assert!(guess.is_empty());
        assert_eq!(guess.capacity(), 4);
        assert_eq!(guess.push(Color::White), Ok(0));
    }

    #[test]
    fn display_lists_colors() {
        let solution =
            Solution::from_colors(vec![Color::Red, Color::Blue, Color::Green]).unwrap();
        assert_eq!(solution.to_string(), "red blue green");
    }

    proptest! {
        #[test]
        fn generated_solutions_are_valid(
            seed in any::<u64>(),
            (palette, length) in (1usize..=6).prop_flat_map(|p| (Just(p), 1..=p)),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let solution = Solution::generate(palette, length, &mut rng).unwrap();

            prop_assert_eq!(solution.len(), length);
            let distinct: FxHashSet<Color> = solution.colors().iter().copied().collect();
            prop_assert_eq!(distinct.len(), length);
            for color in solution.colors() {
                prop_assert!(color.index() < palette);
            }
        }
    }
}
