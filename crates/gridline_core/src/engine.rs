//! Game orchestration.
//!
//! The engine owns the board and the current outcome and drives the
//! opponent's reply inside the same move call: a successful
//! `apply_human_move` runs the whole turn (human mark, win/draw check,
//! computer reply, win/draw check) to completion before returning.

use crate::ai::OpponentStrategy;
use crate::board::Board;
use crate::config::GameConfig;
use crate::rules;
use crate::types::{Cell, GameMode, Outcome, Player};
use tracing::{debug, info, instrument};

/// Error cases for a rejected move.
///
/// A rejection never mutates the board or the outcome; callers may
/// ignore it and retry with another cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No game has been started yet.
    #[display("No game in progress")]
    NotStarted,

    /// The game already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,

    /// The cell lies outside the field.
    #[display("Cell ({_0}, {_1}) is outside the field")]
    OutOfBounds(i32, i32),

    /// The cell is already occupied.
    #[display("Cell ({_0}, {_1}) is already occupied")]
    CellOccupied(i32, i32),
}

impl std::error::Error for MoveError {}

/// State of one configured game.
#[derive(Debug)]
struct ActiveGame {
    board: Board,
    mode: GameMode,
    outcome: Outcome,
}

/// Game engine: state machine from NotStarted through InProgress to a
/// terminal outcome.
///
/// NotStarted is the absence of an active game; terminal outcomes are
/// absorbing until [`GameEngine::start_new_game`] replaces the game.
#[derive(Debug)]
pub struct GameEngine {
    strategy: OpponentStrategy,
    game: Option<ActiveGame>,
}

impl GameEngine {
    /// Creates an engine with an OS-seeded opponent.
    pub fn new() -> Self {
        Self::with_strategy(OpponentStrategy::new())
    }

    /// Creates an engine with an injected opponent strategy, e.g. a
    /// seeded one for reproducible games.
    pub fn with_strategy(strategy: OpponentStrategy) -> Self {
        Self {
            strategy,
            game: None,
        }
    }

    /// Configures and starts a fresh game, discarding any prior state.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self, config: GameConfig) {
        info!(
            width = *config.width(),
            height = *config.height(),
            win_length = *config.win_length(),
            mode = ?config.mode(),
            "Starting new game"
        );
        self.game = Some(ActiveGame {
            board: Board::new(*config.width(), *config.height(), *config.win_length()),
            mode: *config.mode(),
            outcome: Outcome::InProgress,
        });
    }

    /// Applies the human move at `(x, y)` and, in human-vs-computer
    /// mode, the computer's reply.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] without touching any state when no game
    /// is active, the game is over, or the cell is invalid or occupied.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, x: i32, y: i32) -> Result<(), MoveError> {
        let Some(game) = self.game.as_mut() else {
            return Err(MoveError::NotStarted);
        };
        if game.outcome.is_over() {
            return Err(MoveError::GameOver);
        }
        if !game.board.is_valid_cell(x, y) {
            return Err(MoveError::OutOfBounds(x, y));
        }
        if !game.board.is_empty_cell(x, y) {
            return Err(MoveError::CellOccupied(x, y));
        }

        game.board.set(x, y, Cell::Occupied(Player::Human));
        debug!(x, y, "human move");

        if rules::check_win(&game.board, Player::Human) {
            game.outcome = Outcome::Won(Player::Human);
            info!("human wins");
            return Ok(());
        }
        if rules::is_full(&game.board) {
            game.outcome = Outcome::Draw;
            info!("draw");
            return Ok(());
        }

        if game.mode == GameMode::HumanVsComputer {
            let (cx, cy) = self.strategy.choose_move(&mut game.board);
            debug!(x = cx, y = cy, "computer reply");

            if rules::check_win(&game.board, Player::Computer) {
                game.outcome = Outcome::Won(Player::Computer);
                info!("computer wins");
            } else if rules::is_full(&game.board) {
                game.outcome = Outcome::Draw;
                info!("draw");
            }
        }

        Ok(())
    }

    /// The active game's board, if a game has been started.
    pub fn board(&self) -> Option<&Board> {
        self.game.as_ref().map(|g| &g.board)
    }

    /// The active game's outcome, if a game has been started.
    pub fn outcome(&self) -> Option<Outcome> {
        self.game.as_ref().map(|g| g.outcome)
    }

    /// True iff a game is active and has reached a terminal outcome.
    pub fn is_over(&self) -> bool {
        self.outcome().is_some_and(Outcome::is_over)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
