//! Uniformly random tile selection.

use crate::{Board, Location};
use rand::Rng;
use rand::seq::IteratorRandom;

/// Picks a uniformly random free tile.
///
/// Equivalent to drawing random locations until a free one turns up, but
/// terminates in a single pass. Returns `None` on a full board.
pub fn pick_random<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Location> {
    board.unmarked_locations().choose(rng)
}
