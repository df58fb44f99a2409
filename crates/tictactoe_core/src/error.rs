//! Move errors.

/// Why a move was rejected.
///
/// Every variant is non-fatal: the game state is left untouched and the
/// controller reports an illegal move to its presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board (0-8).
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The square at the index is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// No game has been started yet.
    #[display("Game has not started")]
    NotStarted,
}

impl std::error::Error for MoveError {}
