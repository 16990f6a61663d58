//! Lines of the board: rows, columns and the two main diagonals.

use super::{Board, Tile};
use crate::{Dimension, Location};
use serde::{Deserialize, Serialize};

/// A row, a column, or one of the two main diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row with the given index, read left to right.
    #[display("row {}", _0)]
    Row(usize),
    /// Column with the given index, read top to bottom.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right diagonal, starting at (0, 0).
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left diagonal, starting at (0, columns - 1).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Number of tiles on this line for the given board shape.
    ///
    /// Lines with an index past the board edge are empty.
    pub fn len(&self, dimension: Dimension) -> usize {
        match *self {
            Line::Row(row) if row < dimension.rows() => dimension.columns(),
            Line::Column(column) if column < dimension.columns() => dimension.rows(),
            Line::Row(_) | Line::Column(_) => 0,
            Line::MainDiagonal | Line::AntiDiagonal => dimension.rows().min(dimension.columns()),
        }
    }

    /// Location of the `step`-th tile along this line, if the line has one.
    pub(super) fn location_at(&self, step: usize, dimension: Dimension) -> Option<Location> {
        if step >= self.len(dimension) {
            return None;
        }
        Some(match *self {
            Line::Row(row) => Location::new(row, step),
            Line::Column(column) => Location::new(step, column),
            Line::MainDiagonal => Location::new(step, step),
            Line::AntiDiagonal => Location::new(step, dimension.columns() - 1 - step),
        })
    }

    /// Every line in the canonical scan order: rows, columns, main diagonal,
    /// anti-diagonal. Diagonals are only included for square boards.
    pub fn all(dimension: Dimension) -> impl Iterator<Item = Line> + Clone {
        let diagonals: &'static [Line] = if dimension.is_square() {
            &[Line::MainDiagonal, Line::AntiDiagonal]
        } else {
            &[]
        };
        (0..dimension.rows())
            .map(Line::Row)
            .chain((0..dimension.columns()).map(Line::Column))
            .chain(diagonals.iter().copied())
    }
}

/// Lazy, restartable sequence of the tiles on one line.
///
/// Clone the iterator to walk the same line again.
#[derive(Debug, Clone)]
pub struct LineTiles<'a> {
    board: &'a Board,
    line: Line,
    step: usize,
    len: usize,
}

impl<'a> LineTiles<'a> {
    pub(super) fn new(board: &'a Board, line: Line) -> Self {
        Self {
            board,
            line,
            step: 0,
            len: line.len(board.dimension()),
        }
    }

    /// The line being walked.
    pub fn line(&self) -> Line {
        self.line
    }
}

impl<'a> Iterator for LineTiles<'a> {
    type Item = &'a Tile;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step >= self.len {
            return None;
        }
        let location = self.line.location_at(self.step, self.board.dimension())?;
        self.step += 1;
        self.board.tiles().get(self.board.tile_index_of(location))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for LineTiles<'_> {}
