//! Core value types for the territory board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Mark distinguishing the two contestants.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Sign {
    /// Sign of the first (always human) contestant.
    X,
    /// Sign of the second contestant.
    O,
}

impl Sign {
    /// Returns the opposing sign.
    pub fn opponent(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }
}

/// Row and column counts of a board.
///
/// The type itself does not enforce squareness or positivity; game
/// construction validates both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{}x{}", rows, columns)]
pub struct Dimension {
    rows: usize,
    columns: usize,
}

impl Dimension {
    /// Creates a dimension from row and column counts.
    pub const fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns }
    }

    /// Creates a square dimension.
    pub const fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether rows equal columns.
    pub fn is_square(&self) -> bool {
        self.rows == self.columns
    }

    /// Whether the location lies inside `[0, rows) x [0, columns)`.
    #[instrument]
    pub fn contains(&self, location: Location) -> bool {
        location.row() < self.rows && location.column() < self.columns
    }
}

/// Zero-indexed cell coordinate; rows grow downward, columns rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({}, {})", row, column)]
pub struct Location {
    row: usize,
    column: usize,
}

impl Location {
    /// Creates a location.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    pub fn column(&self) -> usize {
        self.column
    }
}

/// Strength of the automated opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Marks a random free cell.
    Easy,
    /// Blocks lines the opponent is about to complete.
    #[default]
    Medium,
    /// Completes its own lines first, then blocks.
    Hard,
}
