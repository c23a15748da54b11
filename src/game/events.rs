//! Draw requests for whatever renders the board

use super::GameState;
use crate::core::{Feedback, Peg};

/// Something that changed on the board
///
/// Rows and slots are zero-based. Hosts map them to screen positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// A guess peg was placed at `peg.slot` of `row`
    GuessPeg { row: usize, peg: Peg },
    /// A feedback peg was placed at feedback slot `peg.slot` of `row`
    FeedbackPeg { row: usize, peg: Peg },
    /// `row` is complete and was scored
    RowScored { row: usize, feedback: Feedback },
    /// The solution is now visible
    SolutionRevealed(Vec<Peg>),
    /// The game reached a terminal state
    GameOver(GameState),
}
