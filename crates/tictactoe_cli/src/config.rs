//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "tictactoe.toml";

/// Presentation and pacing settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pause before the computer moves, in milliseconds.
    think_delay_ms: u64,

    /// Pause before the computer's first move of a turn, in milliseconds.
    opening_think_delay_ms: u64,

    /// Pause after a turn result is shown, in milliseconds.
    result_pause_ms: u64,

    /// Colorize symbols and the scoreboard.
    color: bool,

    /// Clear the screen before each frame.
    clear_screen: bool,

    /// Where tracing output goes.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            think_delay_ms: 1000,
            opening_think_delay_ms: 500,
            result_pause_ms: 2000,
            color: true,
            clear_screen: true,
            log_file: PathBuf::from("tictactoe.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    ///
    /// An explicitly named file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Turns off all pauses. Used by scripted sessions.
    pub fn without_delays(mut self) -> Self {
        self.think_delay_ms = 0;
        self.opening_think_delay_ms = 0;
        self.result_pause_ms = 0;
        self
    }

    /// Overrides the color setting.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Overrides the screen clearing setting.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// Pause before a computer move.
    pub fn think_delay(&self, opening: bool) -> Duration {
        if opening {
            Duration::from_millis(self.opening_think_delay_ms)
        } else {
            Duration::from_millis(self.think_delay_ms)
        }
    }

    /// Pause after a turn result.
    pub fn result_pause(&self) -> Duration {
        Duration::from_millis(self.result_pause_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
