//! The two contestants of a game and where their moves come from.

use crate::{Sign, Strategy};
use serde::{Deserialize, Serialize};

/// Where a contestant's moves come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveSource {
    /// Moves are submitted from outside (keyboard, click, ...).
    Human,
    /// Moves are computed by the engine with the given strategy.
    Automated(Strategy),
}

/// A contestant, identified by its sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contestant {
    sign: Sign,
    source: MoveSource,
}

impl Contestant {
    /// Creates a human contestant.
    pub fn human(sign: Sign) -> Self {
        Self {
            sign,
            source: MoveSource::Human,
        }
    }

    /// Creates an automated contestant playing the given strategy.
    pub fn automated(sign: Sign, strategy: Strategy) -> Self {
        Self {
            sign,
            source: MoveSource::Automated(strategy),
        }
    }

    /// Sign this contestant marks tiles with.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Where this contestant's moves come from.
    pub fn source(&self) -> MoveSource {
        self.source
    }

    /// Whether moves are submitted from outside.
    pub fn is_human(&self) -> bool {
        matches!(self.source, MoveSource::Human)
    }

    /// Whether moves are computed by the engine.
    pub fn is_automated(&self) -> bool {
        !self.is_human()
    }

    /// Strategy of an automated contestant.
    pub fn strategy(&self) -> Option<Strategy> {
        match self.source {
            MoveSource::Human => None,
            MoveSource::Automated(strategy) => Some(strategy),
        }
    }
}

impl std::fmt::Display for Contestant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            MoveSource::Human => write!(f, "{} (human)", self.sign),
            MoveSource::Automated(strategy) => write!(f, "{} ({})", self.sign, strategy),
        }
    }
}
