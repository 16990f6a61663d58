//! Error types for game construction and move submission.

use crate::{Location, Sign};

/// Error that can occur when creating a game or applying a move.
///
/// Every variant except `InvalidConfiguration` is recoverable: the move is
/// rejected and the game is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// Construction parameters are malformed.
    #[display("Invalid configuration: {}", _0)]
    InvalidConfiguration(#[error(not(source))] String),

    /// The location is not on the board.
    #[display("Location {} is outside the board", _0)]
    OutOfBounds(#[error(not(source))] Location),

    /// The tile at the location already carries a sign.
    #[display("Tile at {} is already marked", _0)]
    AlreadyMarked(#[error(not(source))] Location),

    /// The contestant with this sign may not move right now.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(#[error(not(source))] Sign),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}
