//! Win detection.

use crate::{Board, Line, Sign};
use tracing::instrument;

/// Finds the first completed line in scan order.
///
/// Rows are checked first, then columns, then the main diagonal and the
/// anti-diagonal. The first line owned by a single sign wins; later lines
/// are not inspected.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Line, Sign)> {
    board
        .lines()
        .find_map(|line| board.line_owner(line).map(|sign| (line, sign)))
}

/// Every completed line on the board, in scan order.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = (Line, Sign)> + '_ {
    board
        .lines()
        .filter_map(|line| board.line_owner(line).map(|sign| (line, sign)))
}
