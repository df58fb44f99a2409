//! Pure tic-tac-toe game logic.
//!
//! The crate has no UI dependencies. A [`GameController`] owns a [`Board`],
//! the two [`Player`]s, and a [`Presenter`] it reports to after every
//! operation. Front ends implement [`Presenter`] and feed user input into
//! [`GameController::play_round`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Announcement, GameController, ResetMode, Transcript};
//!
//! let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
//! game.start_game("Ada", "");
//! game.play_round(4).unwrap();
//!
//! assert_eq!(
//!     game.presenter().last_announcement(),
//!     Some(&Announcement::Turn("Player 2".to_string()))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod announcement;
mod board;
mod controller;
mod error;
mod marker;
mod player;
mod position;
mod presenter;
pub mod rules;

pub use announcement::Announcement;
pub use board::{BOARD_SIZE, Board};
pub use controller::{GameController, GameState, Outcome, Phase, ResetMode, RoundOutcome};
pub use error::MoveError;
pub use marker::{Marker, Square};
pub use player::{Player, Seat};
pub use position::Position;
pub use presenter::{Presenter, PresenterEvent, Transcript};
