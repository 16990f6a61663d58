//! Board model: grid geometry, per-tile marking and line queries.

mod line;
mod tile;

pub use line::{Line, LineTiles};
pub use tile::Tile;

use crate::{Dimension, GameError, Location, Sign};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Square grid of tiles stored in row-major order.
///
/// Holds exactly one tile per location. Marking a tile is the only
/// mutation and succeeds at most once per location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    dimension: Dimension,
    tiles: Vec<Tile>,
}

impl Board {
    /// Creates an unmarked board of the given shape.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        let tiles = (0..dimension.rows())
            .flat_map(|row| (0..dimension.columns()).map(move |column| Location::new(row, column)))
            .map(Tile::new)
            .collect();
        Self { dimension, tiles }
    }

    /// Shape of the board.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Row-major storage index: `row * columns + column`.
    pub fn tile_index_of(&self, location: Location) -> usize {
        location.row() * self.dimension.columns() + location.column()
    }

    /// Whether the location is on this board.
    pub fn contains(&self, location: Location) -> bool {
        self.dimension.contains(location)
    }

    /// Looks up the tile at a location.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` if the location is not on the board.
    #[instrument(skip(self))]
    pub fn tile_at(&self, location: Location) -> Result<&Tile, GameError> {
        if !self.contains(location) {
            return Err(GameError::OutOfBounds(location));
        }
        Ok(&self.tiles[self.tile_index_of(location)])
    }

    /// Marks the tile at a location with a sign.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfBounds` for a location off the board and
    /// `GameError::AlreadyMarked` if the tile already carries a sign. The
    /// board is unchanged on error.
    #[instrument(skip(self))]
    pub fn mark(&mut self, location: Location, sign: Sign) -> Result<(), GameError> {
        if !self.contains(location) {
            return Err(GameError::OutOfBounds(location));
        }
        let index = self.tile_index_of(location);
        self.tiles[index].mark(sign)?;
        debug!(%location, %sign, "Tile marked");
        Ok(())
    }

    /// Tiles on an arbitrary line.
    pub fn line(&self, line: Line) -> LineTiles<'_> {
        LineTiles::new(self, line)
    }

    /// Tiles of row `row`, left to right.
    pub fn row_line(&self, row: usize) -> LineTiles<'_> {
        self.line(Line::Row(row))
    }

    /// Tiles of column `column`, top to bottom.
    pub fn column_line(&self, column: usize) -> LineTiles<'_> {
        self.line(Line::Column(column))
    }

    /// Tiles of the top-left to bottom-right diagonal.
    pub fn main_diagonal_line(&self) -> LineTiles<'_> {
        self.line(Line::MainDiagonal)
    }

    /// Tiles of the top-right to bottom-left diagonal.
    pub fn anti_diagonal_line(&self) -> LineTiles<'_> {
        self.line(Line::AntiDiagonal)
    }

    /// Every line in scan order (rows, columns, then diagonals on square boards).
    pub fn lines(&self) -> impl Iterator<Item = Line> + Clone + use<> {
        Line::all(self.dimension)
    }

    /// Sign owning a completed line.
    ///
    /// Returns the sign of the line's first tile when every tile on the line
    /// carries that same sign. An empty, partially marked or mixed line has
    /// no owner.
    pub fn line_owner(&self, line: Line) -> Option<Sign> {
        let mut tiles = self.line(line);
        let first = tiles.next()?.marked_by()?;
        tiles.all(|tile| tile.is_marked_by(first)).then_some(first)
    }

    /// Whether every tile on the line is marked by the same contestant.
    #[instrument(skip(self))]
    pub fn is_line_fully_marked_by_same_contestant(&self, line: Line) -> bool {
        self.line_owner(line).is_some()
    }

    /// Whether every tile on the board is marked.
    pub fn is_fully_marked(&self) -> bool {
        self.tiles.iter().all(Tile::is_marked)
    }

    /// Number of tiles carrying the given sign.
    pub fn count_marked_by(&self, sign: Sign) -> usize {
        self.tiles.iter().filter(|tile| tile.is_marked_by(sign)).count()
    }

    /// Locations that are still free, in row-major order.
    pub fn unmarked_locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.tiles
            .iter()
            .filter(|tile| !tile.is_marked())
            .map(Tile::location)
    }

    /// Formats the board as a plain-text grid (`X`, `O`, `.` for free).
    pub fn display(&self) -> String {
        let columns = self.dimension.columns().max(1);
        self.tiles
            .chunks(columns)
            .map(|row| {
                row.iter()
                    .map(|tile| match tile.marked_by() {
                        Some(sign) => sign.to_string(),
                        None => ".".to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Sign)]) -> Board {
        let mut board = Board::new(Dimension::square(size));
        for &(row, column, sign) in marks {
            board.mark(Location::new(row, column), sign).unwrap();
        }
        board
    }

    #[test]
    fn test_tile_count_matches_area() {
        let board = Board::new(Dimension::square(5));
        assert_eq!(board.tiles().len(), 25);
    }

    #[test]
    fn test_tile_index_is_bijective_and_round_trips() {
        for size in 1..=7 {
            let board = Board::new(Dimension::square(size));
            let mut seen = vec![false; size * size];
            for row in 0..size {
                for column in 0..size {
                    let location = Location::new(row, column);
                    let index = board.tile_index_of(location);
                    assert!(!seen[index], "index {index} produced twice");
                    seen[index] = true;
                    assert_eq!(board.tiles()[index].location(), location);
                    assert_eq!(board.tile_at(location).unwrap().location(), location);
                }
            }
            assert!(seen.iter().all(|hit| *hit));
        }
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let board = Board::new(Dimension::square(3));
        assert_eq!(
            board.tile_at(Location::new(3, 0)),
            Err(GameError::OutOfBounds(Location::new(3, 0)))
        );
        assert_eq!(
            board.tile_at(Location::new(0, 3)),
            Err(GameError::OutOfBounds(Location::new(0, 3)))
        );
    }

    #[test]
    fn test_mark_twice_keeps_first_owner() {
        let mut board = Board::new(Dimension::square(3));
        let location = Location::new(1, 1);
        board.mark(location, Sign::O).unwrap();
        assert_eq!(
            board.mark(location, Sign::X),
            Err(GameError::AlreadyMarked(location))
        );
        assert_eq!(board.tile_at(location).unwrap().marked_by(), Some(Sign::O));
    }

    #[test]
    fn test_mark_out_of_bounds_leaves_board_unchanged() {
        let mut board = Board::new(Dimension::square(3));
        let before = board.clone();
        assert!(board.mark(Location::new(9, 9), Sign::X).is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_unmarked_line_has_no_owner() {
        let board = Board::new(Dimension::square(3));
        assert!(!board.is_line_fully_marked_by_same_contestant(Line::Row(0)));
    }

    #[test]
    fn test_partial_line_has_no_owner() {
        let board = board_with(3, &[(0, 0, Sign::X), (0, 1, Sign::X)]);
        assert_eq!(board.line_owner(Line::Row(0)), None);
    }

    #[test]
    fn test_line_with_unmarked_first_tile_has_no_owner() {
        let board = board_with(3, &[(1, 1, Sign::X), (2, 2, Sign::X)]);
        assert_eq!(board.line_owner(Line::MainDiagonal), None);
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let board = board_with(3, &[(0, 0, Sign::X), (1, 0, Sign::O), (2, 0, Sign::X)]);
        assert_eq!(board.line_owner(Line::Column(0)), None);
    }

    #[test]
    fn test_completed_lines_have_owner() {
        let board = board_with(3, &[(0, 2, Sign::O), (1, 1, Sign::O), (2, 0, Sign::O)]);
        assert_eq!(board.line_owner(Line::AntiDiagonal), Some(Sign::O));
        assert!(board.is_line_fully_marked_by_same_contestant(Line::AntiDiagonal));
    }

    #[test]
    fn test_fully_marked() {
        let mut board = Board::new(Dimension::square(2));
        assert!(!board.is_fully_marked());
        for (index, location) in [(0, 0), (0, 1), (1, 0), (1, 1)].into_iter().enumerate() {
            let sign = if index % 2 == 0 { Sign::X } else { Sign::O };
            board.mark(Location::new(location.0, location.1), sign).unwrap();
        }
        assert!(board.is_fully_marked());
        assert_eq!(board.unmarked_locations().count(), 0);
    }

    #[test]
    fn test_display() {
        let board = board_with(3, &[(0, 0, Sign::X), (1, 1, Sign::O)]);
        assert_eq!(board.display(), "X . .\n. O .\n. . .");
    }
}
