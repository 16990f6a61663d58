//! Game rules for territory games.
//!
//! Pure functions over a board. Rules are kept apart from board storage so
//! the game state machine and the invariant checks share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, completed_lines};
