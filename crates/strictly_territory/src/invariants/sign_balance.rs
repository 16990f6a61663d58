//! Sign balance invariant: contestants alternate, so mark counts stay close.

use super::Invariant;
use crate::{Game, Sign};

/// Invariant: the numbers of X and O tiles differ by at most one.
pub struct SignBalanceInvariant;

impl Invariant for SignBalanceInvariant {
    const NAME: &'static str = "sign balance";

    fn holds(game: &Game) -> bool {
        let xs = game.board().count_marked_by(Sign::X);
        let os = game.board().count_marked_by(Sign::O);
        xs.abs_diff(os) <= 1
    }
}
