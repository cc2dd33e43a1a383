//! Game configuration.

use crate::types::GameMode;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Opponent mode.
    #[serde(default = "default_mode")]
    mode: GameMode,

    /// Field width in cells.
    #[serde(default = "default_dimension")]
    width: i32,

    /// Field height in cells.
    #[serde(default = "default_dimension")]
    height: i32,

    /// Run length required to win.
    #[serde(default = "default_win_length")]
    win_length: i32,
}

fn default_mode() -> GameMode {
    GameMode::HumanVsComputer
}

fn default_dimension() -> i32 {
    3
}

fn default_win_length() -> i32 {
    3
}

impl GameConfig {
    /// Creates a validated configuration.
    ///
    /// Dimensions and win length must be positive. A win length larger
    /// than both dimensions is accepted: no run can complete, so the
    /// game can only end in a draw.
    pub fn new(mode: GameMode, width: i32, height: i32, win_length: i32) -> Result<Self, ConfigError> {
        if width <= 0 || height <= 0 {
            return Err(ConfigError::new(format!(
                "Field dimensions must be positive, got {width}x{height}"
            )));
        }
        if win_length <= 0 {
            return Err(ConfigError::new(format!(
                "Win length must be positive, got {win_length}"
            )));
        }
        Ok(Self {
            mode,
            width,
            height,
            win_length,
        })
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        // Field defaults bypass the constructor, so re-validate.
        let config = Self::new(config.mode, config.width, config.height, config.win_length)?;
        info!(
            width = config.width,
            height = config.height,
            win_length = config.win_length,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            width: default_dimension(),
            height: default_dimension(),
            win_length: default_win_length(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
