//! Terminal consistency: the status always agrees with the board.

use super::Invariant;
use crate::rules::{check_winner, completed_lines, is_full};
use crate::{Game, GameStatus};

/// Invariant: the status matches what the board shows.
///
/// - `InProgress`: no completed line and at least one free tile.
/// - `Draw`: full board, no completed line.
/// - `Won(s)`: the winning line is completed by `s`.
pub struct TerminalConsistentInvariant;

impl Invariant for TerminalConsistentInvariant {
    const NAME: &'static str = "terminal consistency";

    fn holds(game: &Game) -> bool {
        let board = game.board();
        match game.status() {
            GameStatus::InProgress => check_winner(board).is_none() && !is_full(board),
            GameStatus::Draw => is_full(board) && check_winner(board).is_none(),
            GameStatus::Won(sign) => {
                game.winning_line()
                    .is_some_and(|line| board.line_owner(line) == Some(sign))
                    && completed_lines(board).all(|(_, owner)| owner == sign)
            }
        }
    }
}
