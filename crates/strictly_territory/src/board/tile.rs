//! A single cell of the board.

use crate::{GameError, Location, Sign};
use serde::{Deserialize, Serialize};

/// A board cell, identified by its location.
///
/// Starts unmarked and is marked at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct Tile {
    location: Location,
    #[new(default)]
    marked_by: Option<Sign>,
}

impl Tile {
    /// Location of this tile.
    pub fn location(&self) -> Location {
        self.location
    }

    /// Sign of the contestant that marked this tile, if any.
    pub fn marked_by(&self) -> Option<Sign> {
        self.marked_by
    }

    /// Whether the tile carries a sign.
    pub fn is_marked(&self) -> bool {
        self.marked_by.is_some()
    }

    /// Whether the tile carries exactly this sign.
    pub fn is_marked_by(&self, sign: Sign) -> bool {
        self.marked_by == Some(sign)
    }

    pub(super) fn mark(&mut self, sign: Sign) -> Result<(), GameError> {
        if self.is_marked() {
            return Err(GameError::AlreadyMarked(self.location));
        }
        self.marked_by = Some(sign);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_tile_is_unmarked() {
        let tile = Tile::new(Location::new(1, 2));
        assert!(!tile.is_marked());
        assert_eq!(tile.marked_by(), None);
    }

    #[test]
    fn test_second_mark_rejected() {
        let mut tile = Tile::new(Location::new(0, 0));
        tile.mark(Sign::X).unwrap();
        assert_eq!(
            tile.mark(Sign::O),
            Err(GameError::AlreadyMarked(Location::new(0, 0)))
        );
        assert!(tile.is_marked_by(Sign::X));
    }
}
