//! Move-selection policies for automated contestants.
//!
//! Each policy only looks at the current board and the acting sign; none
//! of them keeps state between moves.

mod random;
mod threat;

pub use random::pick_random;
pub use threat::{all_but_one, find_all_but_one};

use crate::{Board, Difficulty, Location, Sign};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Policy an automated contestant uses to choose its next tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Strategy {
    /// Uniformly random free tile.
    Random,
    /// Block any line the opponent is one tile from completing.
    BlockOpponent,
    /// Complete an own line if possible, otherwise block.
    WinOrBlock,
}

impl Strategy {
    /// Strategy played at the given difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Strategy::Random,
            Difficulty::Medium => Strategy::BlockOpponent,
            Difficulty::Hard => Strategy::WinOrBlock,
        }
    }

    /// Chooses a free tile for the contestant playing `sign`.
    ///
    /// Returns `None` only when the board has no free tile; callers are
    /// expected never to ask for a move on a full board.
    #[instrument(skip(self, board, rng), fields(strategy = %self))]
    pub fn select<R: Rng + ?Sized>(
        self,
        board: &Board,
        sign: Sign,
        rng: &mut R,
    ) -> Option<Location> {
        let scripted = match self {
            Strategy::Random => None,
            Strategy::BlockOpponent => find_all_but_one(board, sign.opponent()),
            Strategy::WinOrBlock => {
                find_all_but_one(board, sign).or_else(|| find_all_but_one(board, sign.opponent()))
            }
        };

        if let Some(location) = scripted {
            debug!(%location, "Scripted line move");
            return Some(location);
        }

        let location = pick_random(board, rng);
        debug!(location = ?location, "Random fallback");
        location
    }
}

impl From<Difficulty> for Strategy {
    fn from(difficulty: Difficulty) -> Self {
        Self::for_difficulty(difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dimension;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board_with(size: usize, marks: &[(usize, usize, Sign)]) -> Board {
        let mut board = Board::new(Dimension::square(size));
        for &(row, column, sign) in marks {
            board.mark(Location::new(row, column), sign).unwrap();
        }
        board
    }

    #[test]
    fn test_difficulty_mapping() {
        assert_eq!(Strategy::from(Difficulty::Easy), Strategy::Random);
        assert_eq!(Strategy::from(Difficulty::Medium), Strategy::BlockOpponent);
        assert_eq!(Strategy::from(Difficulty::Hard), Strategy::WinOrBlock);
    }

    #[test]
    fn test_block_opponent_blocks_row() {
        let board = board_with(3, &[(1, 0, Sign::X), (1, 2, Sign::X), (0, 0, Sign::O)]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                Strategy::BlockOpponent.select(&board, Sign::O, &mut rng),
                Some(Location::new(1, 1))
            );
        }
    }

    /// 4x4 board where `own` holds row 1 and `other` holds row 3, each
    /// missing only the last column.
    fn race_board(own: Sign, other: Sign) -> Board {
        board_with(
            4,
            &[
                (1, 0, own),
                (1, 1, own),
                (1, 2, own),
                (3, 0, other),
                (3, 1, other),
                (3, 2, other),
            ],
        )
    }

    #[test]
    fn test_block_opponent_ignores_own_opportunity() {
        let board = race_board(Sign::O, Sign::X);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            Strategy::BlockOpponent.select(&board, Sign::O, &mut rng),
            Some(Location::new(3, 3))
        );
    }

    #[test]
    fn test_block_opponent_falls_back_to_free_tile() {
        let board = board_with(3, &[(0, 0, Sign::X), (1, 1, Sign::O)]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let location = Strategy::BlockOpponent
                .select(&board, Sign::O, &mut rng)
                .unwrap();
            assert!(!board.tile_at(location).unwrap().is_marked());
        }
    }

    #[test]
    fn test_win_or_block_prefers_win() {
        let board = race_board(Sign::O, Sign::X);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            Strategy::WinOrBlock.select(&board, Sign::O, &mut rng),
            Some(Location::new(1, 3))
        );
    }

    #[test]
    fn test_win_or_block_uses_own_sign() {
        let board = race_board(Sign::X, Sign::O);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            Strategy::WinOrBlock.select(&board, Sign::X, &mut rng),
            Some(Location::new(1, 3))
        );
    }

    #[test]
    fn test_win_or_block_blocks_threat() {
        let board = board_with(3, &[(2, 0, Sign::X), (2, 1, Sign::X), (0, 0, Sign::O)]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(
                Strategy::WinOrBlock.select(&board, Sign::O, &mut rng),
                Some(Location::new(2, 2))
            );
        }
    }

    #[test]
    fn test_random_never_picks_marked_tile() {
        let board = board_with(3, &[(0, 0, Sign::X), (0, 1, Sign::O), (2, 2, Sign::X)]);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let location = Strategy::Random.select(&board, Sign::O, &mut rng).unwrap();
            assert!(!board.tile_at(location).unwrap().is_marked());
        }
    }
}
