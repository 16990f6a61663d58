//! "All-but-one" line detection shared by the blocking strategies.

use crate::{Board, Line, Location, Sign};
use tracing::instrument;

/// Free tile of a line that `sign` holds all but one tile of.
///
/// The line qualifies only if exactly one tile is free and every other
/// tile carries `sign`. A line with one free tile and mixed signs on the
/// rest is neither a threat nor an opportunity.
pub fn all_but_one(board: &Board, line: Line, sign: Sign) -> Option<Location> {
    let tiles = board.line(line);
    let len = tiles.len();
    let mut free = None;
    let mut free_count = 0;
    let mut held = 0;

    for tile in tiles {
        match tile.marked_by() {
            None => {
                free_count += 1;
                free = Some(tile.location());
            }
            Some(owner) if owner == sign => held += 1,
            Some(_) => return None,
        }
    }

    if free_count == 1 && held + 1 == len {
        free
    } else {
        None
    }
}

/// Scans every line in order and returns the first all-but-one free tile for `sign`.
#[instrument(skip(board))]
pub fn find_all_but_one(board: &Board, sign: Sign) -> Option<Location> {
    board.lines().find_map(|line| all_but_one(board, line, sign))
}
