//! Core domain types for the grid game.

use serde::{Deserialize, Serialize};

/// Owner of a mark on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// The human player (moves first).
    Human,
    /// The computer opponent.
    Computer,
}

impl Player {
    /// Returns the opposing player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell marked by a player.
    Occupied(Player),
}

/// Classification of the current game.
///
/// Set exactly once per game: once a terminal value is reached it never
/// changes until a new game replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    InProgress,
    /// Board filled with no winning run.
    Draw,
    /// A player completed a winning run.
    Won(Player),
}

impl Outcome {
    /// True for the terminal outcomes (`Draw` or `Won`).
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Configured opponent mode.
///
/// Both modes are accepted at configuration time, but only
/// [`HumanVsComputer`](GameMode::HumanVsComputer) drives the opponent
/// strategy. In `HumanVsHuman` the engine places the human mark and
/// stops; turn handling between two humans lives outside the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    /// Human against the built-in opponent.
    HumanVsComputer,
    /// Two humans sharing the board.
    HumanVsHuman,
}
