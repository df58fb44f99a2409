//! The 3x3 board.

use crate::error::MoveError;
use crate::marker::{Marker, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of squares on the board.
pub const BOARD_SIZE: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// An occupied square is never overwritten; only [`Board::reset`] clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; BOARD_SIZE],
        }
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; BOARD_SIZE];
        debug!("Board cleared");
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; BOARD_SIZE] {
        &self.squares
    }

    /// Gets the square at the given index (0-8).
    pub fn square(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if the square at the index exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.square(index), Some(Square::Empty))
    }

    /// Places `marker` at `index` if the square is on the board and empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] or [`MoveError::SquareOccupied`];
    /// the board is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn set_move(&mut self, index: usize, marker: Marker) -> Result<(), MoveError> {
        match self.squares.get_mut(index) {
            None => Err(MoveError::OutOfBounds(index)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(index)),
            Some(square) => {
                *square = Square::Occupied(marker);
                debug!("Marker placed");
                Ok(())
            }
        }
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        crate::rules::is_full(self)
    }
}

/// Renders the grid with free squares numbered 1-9.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => write!(f, "{}", pos + 1)?,
                    Square::Occupied(marker) => write!(f, "{}", marker)?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
