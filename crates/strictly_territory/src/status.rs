//! Lifecycle status of a game.

use crate::Sign;
use serde::{Deserialize, Serialize};

/// Current status of the game.
///
/// `Draw` and `Won` are terminal: no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Board is full and no line was completed.
    Draw,
    /// The contestant with this sign completed a line.
    Won(Sign),
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Sign> {
        match self {
            GameStatus::Won(sign) => Some(*sign),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// Whether the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Draw => write!(f, "Draw"),
            GameStatus::Won(sign) => write!(f, "Player {} wins", sign),
        }
    }
}
