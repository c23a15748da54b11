//! Game session state machine
//!
//! A session owns the solution, the guess being assembled and the scored
//! rows. Hosts feed it one color at a time and render the events it returns.

use super::{BoardEvent, GameConfig};
use crate::core::{
    Color, ConfigError, Feedback, FeedbackColor, Guess, GuessError, Peg, PegColor, Solution,
};
use log::{debug, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use thiserror::Error;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress { rows_used: usize },
    Won { rows_used: usize },
    Lost,
    /// The player asked to see the solution
    Revealed,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Vec<Color>,
    pub feedback: Feedback,
}

/// Rejected player input; the session is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error("{0} is a feedback color and cannot be part of a guess")]
    FeedbackColor(FeedbackColor),
    #[error("{0} is not in this game's palette")]
    OutsidePalette(Color),
    #[error("the game is over; start a new game")]
    GameOver,
}

/// Win/loss tally across games in one sitting
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl Statistics {
    /// Count a finished game; games still in progress are ignored
    pub fn record(&mut self, state: GameState) {
        match state {
            GameState::Won { .. } => {
                self.total_games += 1;
                self.games_won += 1;
            }
            GameState::Lost | GameState::Revealed => self.total_games += 1,
            GameState::InProgress { .. } => {}
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

/// One game at a time, restartable
pub struct Session {
    config: GameConfig,
    rng: StdRng,
    solution: Solution,
    guess: Guess,
    rows: Vec<Row>,
    state: GameState,
}

impl Session {
    /// Start a session seeded from the operating system
    ///
    /// # Errors
    /// Returns `ConfigError` if `config` does not describe a playable board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Start a session whose solutions are reproducible from `seed`
    ///
    /// # Errors
    /// Returns `ConfigError` if `config` does not describe a playable board.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: GameConfig, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let solution = Solution::generate(config.palette_size, config.code_length, &mut rng)?;
        debug!(
            "New session: {} slots, {} colors, {} rows",
            config.code_length, config.palette_size, config.max_rows
        );

        Ok(Self {
            config,
            rng,
            solution,
            guess: Guess::new(config.code_length),
            rows: Vec::with_capacity(config.max_rows),
            state: GameState::InProgress { rows_used: 0 },
        })
    }

    /// Throw away the board and draw a fresh solution
    ///
    /// # Errors
    /// Returns `ConfigError` if a solution cannot be drawn; the current game
    /// is kept in that case.
    pub fn new_game(&mut self) -> Result<(), ConfigError> {
        self.solution = Solution::generate(
            self.config.palette_size,
            self.config.code_length,
            &mut self.rng,
        )?;
        self.guess.clear();
        self.rows.clear();
        self.state = GameState::InProgress { rows_used: 0 };
        debug!("New game started");
        Ok(())
    }

    /// Add a color from any palette to the current guess
    ///
    /// # Errors
    /// Returns `SessionError::FeedbackColor` for feedback-only colors, plus
    /// everything [`Session::select`] can return.
    pub fn select_peg(&mut self, color: PegColor) -> Result<Vec<BoardEvent>, SessionError> {
        match color {
            PegColor::Guess(color) => self.select(color),
            PegColor::Feedback(color) => {
                warn!("Rejected feedback color {color} as guess input");
                Err(SessionError::FeedbackColor(color))
            }
        }
    }

    /// Add `color` to the next open slot, scoring the row once it is full
    ///
    /// # Errors
    /// - `SessionError::GameOver` once the game has ended
    /// - `SessionError::OutsidePalette` for colors past this board's palette
    /// - `SessionError::Guess` if the guess already holds `color`
    pub fn select(&mut self, color: Color) -> Result<Vec<BoardEvent>, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        if color.index() >= self.config.palette_size {
            warn!("Rejected {color}: outside palette");
            return Err(SessionError::OutsidePalette(color));
        }

        let row = self.rows.len();
        let slot = self.guess.push(color).inspect_err(|e| {
            warn!("Rejected {color} for row {}: {e}", row + 1);
        })?;

        let mut events = vec![BoardEvent::GuessPeg {
            row,
            peg: Peg::pattern(color, slot),
        }];

        if self.guess.is_complete() {
            self.finish_row(&mut events);
        }

        Ok(events)
    }

    fn finish_row(&mut self, events: &mut Vec<BoardEvent>) {
        let row = self.rows.len();
        let feedback = Feedback::evaluate(&self.solution, &self.guess);
        debug!("Row {} scored: {feedback}", row + 1);

        events.extend(feedback.pegs().map(|peg| BoardEvent::FeedbackPeg { row, peg }));
        events.push(BoardEvent::RowScored { row, feedback });

        self.rows.push(Row {
            guess: self.guess.colors().to_vec(),
            feedback,
        });
        self.guess.clear();

        let rows_used = self.rows.len();
        if feedback.is_win() {
            self.state = GameState::Won { rows_used };
            info!("Game won in {rows_used} rows");
            events.push(BoardEvent::GameOver(self.state));
        } else if rows_used >= self.config.max_rows {
            self.state = GameState::Lost;
            info!("Game lost after {rows_used} rows");
            events.push(BoardEvent::SolutionRevealed(self.solution.pegs().collect()));
            events.push(BoardEvent::GameOver(self.state));
        } else {
            self.state = GameState::InProgress { rows_used };
        }
    }

    /// Show the solution, ending the game if it was still running
    pub fn reveal(&mut self) -> Vec<BoardEvent> {
        let mut events = vec![BoardEvent::SolutionRevealed(self.solution.pegs().collect())];
        if !self.state.is_over() {
            self.state = GameState::Revealed;
            self.guess.clear();
            info!("Solution revealed after {} rows", self.rows.len());
            events.push(BoardEvent::GameOver(self.state));
        }
        events
    }

    /// The solution, once the game is over
    #[must_use]
    pub fn revealed_solution(&self) -> Option<&Solution> {
        self.state.is_over().then_some(&self.solution)
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Guess {
        &self.guess
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[must_use]
    pub fn rows_left(&self) -> usize {
        self.config.max_rows.saturating_sub(self.rows.len())
    }
}
