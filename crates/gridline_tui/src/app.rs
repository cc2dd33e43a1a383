//! Application state and logic.

use crate::input;
use crossterm::event::KeyCode;
use gridline_core::{GameConfig, GameEngine, Outcome, Player};
use tracing::debug;

/// Main application state.
pub struct App {
    engine: GameEngine,
    config: GameConfig,
    cursor: (i32, i32),
    status: String,
}

impl App {
    /// Creates the application and starts the first game.
    pub fn new(config: GameConfig, engine: GameEngine) -> Self {
        let mut app = Self {
            engine,
            config,
            cursor: (0, 0),
            status: String::new(),
        };
        app.restart();
        app
    }

    /// The game engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Currently selected cell.
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    /// Current status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Starts a fresh game with the configured settings.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.engine.start_new_game(self.config);
        self.cursor = (0, 0);
        self.status =
            "Your turn. Arrows move, Enter places, mouse clicks work too.".to_string();
    }

    /// Moves the cursor by arrow key, clamped to the field.
    pub fn handle_cursor_key(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(
            self.cursor,
            key,
            *self.config.width(),
            *self.config.height(),
        );
    }

    /// Places a mark at the cursor.
    pub fn place_at_cursor(&mut self) {
        let (x, y) = self.cursor;
        self.place(x, y);
    }

    /// Places a mark at the given cell.
    pub fn place(&mut self, x: i32, y: i32) {
        debug!(x, y, "Placing mark");
        match self.engine.apply_human_move(x, y) {
            Ok(()) => self.update_status(),
            Err(e) => self.status = format!("{}. Try another cell.", e),
        }
    }

    fn update_status(&mut self) {
        self.status = match self.engine.outcome() {
            Some(Outcome::InProgress) => "Your turn.".to_string(),
            Some(Outcome::Won(Player::Human)) => {
                "You win! Press 'r' for a new game or 'q' to quit.".to_string()
            }
            Some(Outcome::Won(Player::Computer)) => {
                "The computer wins. Press 'r' for a new game or 'q' to quit.".to_string()
            }
            Some(Outcome::Draw) => {
                "Draw. Press 'r' for a new game or 'q' to quit.".to_string()
            }
            None => "No game in progress.".to_string(),
        };
    }
}
