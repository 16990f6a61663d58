//! Draw detection.

use super::win::check_winner;
use crate::Board;
use tracing::instrument;

/// Checks if every tile on the board is marked.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_fully_marked()
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
