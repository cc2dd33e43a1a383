//! Grid game engine: generalized tic-tac-toe on a W×H board.
//!
//! A human plays against a simple computer opponent on a board of
//! configurable size, trying to line up `win_length` marks along a
//! row, column, or diagonal.
//!
//! # Architecture
//!
//! - **Board**: cell storage with bounds and occupancy accessors
//! - **Rules**: pure win/draw detection over board contents
//! - **OpponentStrategy**: win-or-block probe with a random fallback
//! - **GameEngine**: state machine owning board, outcome, and opponent
//!
//! The engine is single-threaded and synchronous: applying a human
//! move runs the computer's reply before returning. Rendering and
//! input handling belong to the caller, which feeds cell coordinates
//! into [`GameEngine::apply_human_move`] and reads cells and outcome
//! back for display.
//!
//! # Example
//!
//! ```
//! use gridline_core::{GameConfig, GameEngine, GameMode, OpponentStrategy, Outcome};
//!
//! let mut engine = GameEngine::with_strategy(OpponentStrategy::seeded(1));
//! let config = GameConfig::new(GameMode::HumanVsComputer, 3, 3, 3)?;
//! engine.start_new_game(config);
//!
//! engine.apply_human_move(1, 1)?;
//! assert_eq!(engine.outcome(), Some(Outcome::InProgress));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod board;
mod config;
mod engine;
pub mod rules;
mod types;

pub use ai::OpponentStrategy;
pub use board::Board;
pub use config::{ConfigError, GameConfig};
pub use engine::{GameEngine, MoveError};
pub use types::{Cell, GameMode, Outcome, Player};
