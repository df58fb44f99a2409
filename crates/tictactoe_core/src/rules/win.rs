//! Win detection logic for tic-tac-toe.

use crate::{Board, Marker, Square};
use tracing::instrument;

/// The eight index triples that win the game.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first win line fully occupied by `marker`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, marker: Marker) -> Option<[usize; 3]> {
    WIN_LINES.into_iter().find(|line| {
        line.iter()
            .all(|&index| board.square(index) == Some(Square::Occupied(marker)))
    })
}
