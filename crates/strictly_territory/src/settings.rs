//! Game settings, loadable from TOML.

use crate::{Dimension, Difficulty};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Board sizes offered to players.
pub const SIZE_RANGE: RangeInclusive<usize> = 3..=21;

/// Who plays the second sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Opponent {
    /// A second human sharing the same input.
    Human,
    /// An automated contestant.
    Automated {
        /// Strength of the automated contestant.
        #[serde(default)]
        difficulty: Difficulty,
    },
}

impl Opponent {
    /// Whether the opponent is automated.
    pub fn is_automated(&self) -> bool {
        matches!(self, Opponent::Automated { .. })
    }
}

impl Default for Opponent {
    fn default() -> Self {
        Opponent::Automated {
            difficulty: Difficulty::default(),
        }
    }
}

/// Settings for a new game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameSettings {
    /// Rows and columns of the square board.
    #[serde(default = "default_size")]
    size: usize,

    /// Opponent of the human playing X.
    #[serde(default)]
    opponent: Opponent,

    /// Pause before an automated contestant moves, in milliseconds.
    #[serde(default = "default_delay_ms")]
    automated_move_delay_ms: u64,

    /// Seed for the random source; entropy when absent.
    #[serde(default)]
    #[setters(strip_option)]
    seed: Option<u64>,
}

#[instrument]
fn default_size() -> usize {
    3
}

#[instrument]
fn default_delay_ms() -> u64 {
    400
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            size: default_size(),
            opponent: Opponent::default(),
            automated_move_delay_ms: default_delay_ms(),
            seed: None,
        }
    }
}

impl GameSettings {
    /// Loads settings from a TOML file and validates them.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SettingsError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| SettingsError::new(format!("Failed to parse settings: {}", e)))?;

        settings.validate()?;
        info!(size = settings.size, opponent = ?settings.opponent, "Settings loaded");
        Ok(settings)
    }

    /// Checks that the board size is one players are offered.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SIZE_RANGE.contains(&self.size) {
            return Err(SettingsError::new(format!(
                "Board size {} is outside {}..={}",
                self.size,
                SIZE_RANGE.start(),
                SIZE_RANGE.end()
            )));
        }
        Ok(())
    }

    /// Square board shape for these settings.
    pub fn dimension(&self) -> Dimension {
        Dimension::square(self.size)
    }

    /// Pause before an automated contestant moves.
    pub fn automated_move_delay(&self) -> Duration {
        Duration::from_millis(self.automated_move_delay_ms)
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Settings error: {} at {}:{}", message, file, line)]
pub struct SettingsError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SettingsError {
    /// Creates a new settings error.
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
