//! Guess scoring
//!
//! Feedback counts how many guess pegs are the right color in the right slot
//! (exact) and how many are the right color in the wrong slot (partial).
//! Each solution slot can back at most one feedback peg.

use super::{Color, FeedbackColor, Guess, Peg, Solution};
use std::fmt;

/// Score for one completed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    exact: u8,
    partial: u8,
    slots: u8,
}

impl Feedback {
    /// Create feedback from raw counts
    ///
    /// # Panics
    /// Panics in debug mode if `exact + partial > slots`
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, partial: u8, slots: u8) -> Self {
        debug_assert!(exact + partial <= slots, "Feedback exceeds slot count");
        Self {
            exact,
            partial,
            slots,
        }
    }

    /// Score a completed guess against the solution
    ///
    /// # Examples
    /// ```
    /// use pattern_guess::core::{Color, Feedback, Guess, Solution};
    ///
    /// let solution = Solution::from_colors(vec![
    ///     Color::Red, Color::Blue, Color::Green, Color::Yellow,
    /// ]).unwrap();
    /// let mut guess = Guess::new(4);
    /// for color in [Color::Red, Color::Green, Color::Blue, Color::Black] {
    ///     guess.push(color).unwrap();
    /// }
    ///
    /// let feedback = Feedback::evaluate(&solution, &guess);
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.partial(), 2);
    /// ```
    #[must_use]
    pub fn evaluate(solution: &Solution, guess: &Guess) -> Self {
        debug_assert_eq!(solution.len(), guess.len(), "Guess must be complete");
        Self::score(solution.colors(), guess.colors())
    }

    /// Score two color sequences of equal length
    #[must_use]
    pub fn score(solution: &[Color], guess: &[Color]) -> Self {
        Self::score_in_order(solution, guess, 0..guess.len())
    }

    /// Score, visiting leftover guess slots in `order` during the partial pass
    ///
    /// # Algorithm
    /// 1. Exact pass: every slot where guess and solution agree is consumed on both sides
    /// 2. Partial pass: each unconsumed guess slot consumes the first unconsumed
    ///    solution slot of the same color, if any
    pub(crate) fn score_in_order<I>(solution: &[Color], guess: &[Color], order: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let mut solution_used = vec![false; solution.len()];
        let mut guess_used = vec![false; guess.len()];
        let mut exact = 0u8;

        // First pass: exact matches
        for (i, (s, g)) in solution.iter().zip(guess).enumerate() {
            if s == g {
                exact += 1;
                solution_used[i] = true;
                guess_used[i] = true;
            }
        }

        // Second pass: right color, wrong slot, from what is left
        let mut partial = 0u8;
        for i in order {
            match guess_used.get_mut(i) {
                Some(used) if !*used => *used = true,
                _ => continue,
            }

            let color = guess[i];
            if let Some(j) =
                (0..solution.len()).find(|&j| !solution_used[j] && solution[j] == color)
            {
                solution_used[j] = true;
                partial += 1;
            }
        }

        Self::new(exact, partial, solution.len() as u8)
    }

    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    #[inline]
    #[must_use]
    pub const fn partial(self) -> u8 {
        self.partial
    }

    /// Guess pegs that earned no feedback peg
    #[inline]
    #[must_use]
    pub const fn misses(self) -> u8 {
        self.slots - self.exact - self.partial
    }

    #[inline]
    #[must_use]
    pub const fn slots(self) -> u8 {
        self.slots
    }

    /// Every slot matched exactly
    #[inline]
    #[must_use]
    pub const fn is_win(self) -> bool {
        self.exact == self.slots
    }

    /// Feedback pegs in placement order: exact pegs first, then partial
    pub fn pegs(self) -> impl Iterator<Item = Peg> {
        std::iter::repeat_n(FeedbackColor::Exact, usize::from(self.exact))
            .chain(std::iter::repeat_n(
                FeedbackColor::Partial,
                usize::from(self.partial),
            ))
            .enumerate()
            .map(|(slot, color)| Peg::info(color, slot))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PegColor;
    use crate::core::Color::{Black, Blue, Green, Red, White, Yellow};
    use proptest::prelude::*;
    use proptest::sample::subsequence;

    const SOLUTION: [Color; 4] = [Red, Blue, Green, Yellow];

    fn counts(feedback: Feedback) -> (u8, u8) {
        (feedback.exact(), feedback.partial())
    }

    #[test]
    fn all_present_none_in_place() {
        let feedback = Feedback::score(&SOLUTION, &[Blue, Red, Yellow, Green]);
        assert_eq!(counts(feedback), (0, 4));
        assert!(!feedback.is_win());
    }

    #[test]
    fn mixed_exact_partial_and_absent() {
        let feedback = Feedback::score(&SOLUTION, &[Red, Green, Blue, Black]);
        assert_eq!(counts(feedback), (1, 2));
        assert_eq!(feedback.misses(), 1);
    }

    #[test]
    fn nothing_matches() {
        let feedback = Feedback::score(&SOLUTION, &[Black, White, Black, White]);
        assert_eq!(counts(feedback), (0, 0));
        assert_eq!(feedback.misses(), 4);

        let feedback = Feedback::score(&[Red, Blue], &[Black, White]);
        assert_eq!(counts(feedback), (0, 0));
        assert_eq!(feedback.misses(), 2);
    }

    #[test]
    fn repeated_guess_color_does_not_double_count() {
        // Distinct colors are enforced upstream; scoring still has to cope.
        let feedback = Feedback::score(&SOLUTION, &[Black, Red, Red, White]);
        assert_eq!(counts(feedback), (0, 1));

        let feedback = Feedback::score(&SOLUTION, &[Red, Red, White, Black]);
        assert_eq!(counts(feedback), (1, 0));
    }

    #[test]
    fn exact_guess_wins() {
        let feedback = Feedback::score(&SOLUTION, &SOLUTION);
        assert_eq!(counts(feedback), (4, 0));
        assert!(feedback.is_win());
    }

    #[test]
    fn evaluate_matches_score() {
        let solution = Solution::from_colors(SOLUTION.to_vec()).unwrap();
        let mut guess = Guess::new(4);
        for color in [Yellow, Blue, White, Red] {
            guess.push(color).unwrap();
        }
        let feedback = Feedback::evaluate(&solution, &guess);
        assert_eq!(counts(feedback), (1, 2));
        assert_eq!(feedback.slots(), 4);
    }

    #[test]
    fn pegs_exact_first() {
        let feedback = Feedback::new(1, 2, 4);
        let pegs: Vec<Peg> = feedback.pegs().collect();

        assert_eq!(pegs.len(), 3);
        assert_eq!(pegs[0].color, PegColor::Feedback(FeedbackColor::Exact));
        assert_eq!(pegs[1].color, PegColor::Feedback(FeedbackColor::Partial));
        assert_eq!(pegs[2].color, PegColor::Feedback(FeedbackColor::Partial));
        assert_eq!(pegs[2].slot, 2);
    }

    #[test]
    fn display_counts() {
        assert_eq!(Feedback::new(2, 1, 4).to_string(), "2 exact, 1 partial");
    }

    fn distinct_code(len: usize) -> impl Strategy<Value = Vec<Color>> {
        subsequence(Color::ALL.to_vec(), len).prop_shuffle()
    }

    proptest! {
        #[test]
        fn self_score_is_perfect(code in distinct_code(4)) {
            let feedback = Feedback::score(&code, &code);
            prop_assert_eq!(counts(feedback), (4, 0));
            prop_assert!(feedback.is_win());
        }

        #[test]
        fn counts_never_exceed_length(solution in distinct_code(4), guess in distinct_code(4)) {
            let feedback = Feedback::score(&solution, &guess);
            prop_assert!(feedback.exact() + feedback.partial() <= 4);
        }

        #[test]
        fn partial_pass_order_is_irrelevant(
            solution in distinct_code(4),
            guess in distinct_code(4),
            order in Just((0..4).collect::<Vec<usize>>()).prop_shuffle(),
        ) {
            let forward = Feedback::score(&solution, &guess);
            let shuffled = Feedback::score_in_order(&solution, &guess, order);
            prop_assert_eq!(forward, shuffled);
        }

        #[test]
        fn win_only_when_identical(solution in distinct_code(4), guess in distinct_code(4)) {
            let feedback = Feedback::score(&solution, &guess);
            prop_assert_eq!(feedback.is_win(), solution == guess);
            if feedback.is_win() {
                prop_assert_eq!(feedback.partial(), 0);
            }
        }
    }
}
