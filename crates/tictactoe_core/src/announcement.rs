//! User-facing messages.

/// A message the controller asks its presenter to show.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Announcement {
    /// It is the named player's turn.
    #[display("{}'s turn!", _0)]
    Turn(String),

    /// A move was rejected.
    #[display("Illegal Move!")]
    IllegalMove,

    /// The named player completed a line.
    #[display("{} wins!", _0)]
    Winner(String),

    /// The board filled with no line.
    #[display("It's a tie!")]
    Tie,

    /// The game was reset back to player setup.
    #[display("Game reset! Start a new game.")]
    Reset,
}
