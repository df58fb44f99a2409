//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from board
//! storage so the controller and the front ends share one definition.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, winning_line};
