//! Properties a game keeps from one move to the next.
//!
//! [`Game`] runs [`assert_invariants`] after every move it applies; release
//! builds skip the check.

pub mod sign_balance;
pub mod terminal_consistent;

pub use sign_balance::SignBalanceInvariant;
pub use terminal_consistent::TerminalConsistentInvariant;

use crate::{Game, GameStatus};
use derive_more::{Display, Error};
use tracing::warn;

/// A property of a [`Game`] that no applied move may break.
pub trait Invariant {
    /// Name used when reporting a violation.
    const NAME: &'static str;

    /// Whether the game currently satisfies the property.
    fn holds(game: &Game) -> bool;
}

/// A broken invariant and the game it was observed on.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{} broken with status {}:\n{}", name, status, board)]
pub struct InvariantViolation {
    /// Name of the broken invariant.
    #[error(not(source))]
    pub name: &'static str,
    /// Status at the time of the check.
    #[error(not(source))]
    pub status: GameStatus,
    /// Board rendered with [`crate::Board::display`].
    #[error(not(source))]
    pub board: String,
}

impl InvariantViolation {
    fn observed<I: Invariant>(game: &Game) -> Self {
        Self {
            name: I::NAME,
            status: game.status(),
            board: game.board().display(),
        }
    }
}

/// Invariants checked together; implemented for tuples of [`Invariant`]s.
pub trait InvariantSet {
    /// Every invariant in the set that `game` breaks, in tuple order.
    fn violations(game: &Game) -> Vec<InvariantViolation>;
}

macro_rules! impl_invariant_set {
    ($($name:ident),+) => {
        impl<$($name: Invariant),+> InvariantSet for ($($name,)+) {
            fn violations(game: &Game) -> Vec<InvariantViolation> {
                let mut found = Vec::new();
                $(
                    if !$name::holds(game) {
                        found.push(InvariantViolation::observed::<$name>(game));
                    }
                )+
                found
            }
        }
    };
}

impl_invariant_set!(A);
impl_invariant_set!(A, B);
impl_invariant_set!(A, B, C);

/// Invariants every game keeps after each move.
pub type GameInvariants = (SignBalanceInvariant, TerminalConsistentInvariant);

/// Panics in debug builds if the game breaks one of [`GameInvariants`].
pub fn assert_invariants(game: &Game) {
    if !cfg!(debug_assertions) {
        return;
    }
    let violations = GameInvariants::violations(game);
    if violations.is_empty() {
        return;
    }
    for violation in &violations {
        warn!(invariant = violation.name, status = %violation.status, "Invariant broken");
    }
    panic!("{}", violations[0]);
}
