//! Turn-based game controller.
//!
//! Lifecycle: `NotStarted -> InProgress -> Finished -> (reset)`. A reset goes
//! back to `NotStarted` or straight into a rematch, depending on
//! [`ResetMode`].

use crate::{Announcement, Board, MoveError, Player, Presenter, Seat, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What [`GameController::reset_game`] returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetMode {
    /// Back to the setup view; players must be entered again.
    #[default]
    ReturnToSetup,
    /// Keep both players and start a fresh board immediately.
    Rematch,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// A seat completed a win line.
    Won {
        /// The winning seat.
        seat: Seat,
        /// The completed line.
        line: [usize; 3],
    },
    /// The board filled with no line.
    Tie,
}

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No players yet.
    #[default]
    NotStarted,
    /// Accepting moves.
    InProgress,
    /// Win or tie reached; moves are rejected until reset.
    Finished(Outcome),
}

impl Phase {
    /// Returns true once a win or tie has been reached.
    pub fn is_finished(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }
}

/// Mutable per-game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    active: Seat,
    phase: Phase,
}

impl GameState {
    fn new() -> Self {
        Self {
            active: Seat::One,
            phase: Phase::NotStarted,
        }
    }

    /// The seat whose move is expected.
    pub fn active(&self) -> Seat {
        self.active
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once a win or tie has been reached.
    pub fn is_over(&self) -> bool {
        self.phase.is_finished()
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Play passes to `next`.
    Continue {
        /// The seat now to move.
        next: Seat,
    },
    /// The mover completed `line`.
    Won {
        /// The winning seat.
        winner: Seat,
        /// The completed line.
        line: [usize; 3],
    },
    /// The move filled the board with no line.
    Tie,
}

/// Orchestrates turns, win/tie detection, and the game lifecycle.
///
/// Every operation reports its visible effects to the presenter `P`.
#[derive(Debug)]
pub struct GameController<P> {
    board: Board,
    players: Option<[Player; 2]>,
    state: GameState,
    reset_mode: ResetMode,
    presenter: P,
}

impl<P: Presenter> GameController<P> {
    /// Creates a controller that has not started a game.
    #[instrument(skip(presenter))]
    pub fn new(presenter: P, reset_mode: ResetMode) -> Self {
        Self {
            board: Board::new(),
            players: None,
            state: GameState::new(),
            reset_mode,
            presenter,
        }
    }

    /// Starts a game between two players.
    ///
    /// Blank names fall back to `"Player 1"` / `"Player 2"`. Any game in
    /// progress is discarded.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, name_one: &str, name_two: &str) {
        let one = Player::for_seat(Seat::One, name_one);
        let two = Player::for_seat(Seat::Two, name_two);
        info!(player_one = %one, player_two = %two, "Starting game");

        self.board.reset();
        self.state = GameState {
            active: Seat::One,
            phase: Phase::InProgress,
        };

        self.presenter.show_game_view(true);
        self.presenter.update_player_names(&one, &two);
        self.presenter.render_board(&self.board);
        self.presenter.announce(&Announcement::Turn(one.name().clone()));

        self.players = Some([one, two]);
    }

    /// Plays the active player's marker at `index`.
    ///
    /// # Errors
    ///
    /// Rejected moves leave the board and the active player unchanged and
    /// announce [`Announcement::IllegalMove`]:
    /// - [`MoveError::NotStarted`] before [`start_game`](Self::start_game)
    /// - [`MoveError::GameOver`] after a win or tie
    /// - [`MoveError::OutOfBounds`] / [`MoveError::SquareOccupied`] from the board
    #[instrument(skip(self), fields(active = ?self.state.active))]
    pub fn play_round(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        self.apply_round(index).inspect_err(|err| {
            warn!(%err, "Move rejected");
            self.presenter.announce(&Announcement::IllegalMove);
        })
    }

    fn apply_round(&mut self, index: usize) -> Result<RoundOutcome, MoveError> {
        match self.state.phase {
            Phase::InProgress => {}
            Phase::Finished(_) => return Err(MoveError::GameOver),
            Phase::NotStarted => return Err(MoveError::NotStarted),
        }
        let Some(players) = self.players.as_ref() else {
            return Err(MoveError::NotStarted);
        };

        let seat = self.state.active;
        let mover = &players[seat.index()];
        self.board.set_move(index, mover.marker())?;
        debug!(index, marker = %mover.marker(), "Move applied");
        self.presenter.render_board(&self.board);

        if let Some(line) = rules::winning_line(&self.board, mover.marker()) {
            self.state.phase = Phase::Finished(Outcome::Won { seat, line });
            info!(winner = %mover, ?line, "Game won");
            self.presenter.announce(&Announcement::Winner(mover.name().clone()));
            return Ok(RoundOutcome::Won { winner: seat, line });
        }

        if rules::is_full(&self.board) {
            self.state.phase = Phase::Finished(Outcome::Tie);
            info!("Game tied");
            self.presenter.announce(&Announcement::Tie);
            return Ok(RoundOutcome::Tie);
        }

        let next = seat.other();
        self.state.active = next;
        self.presenter.announce(&Announcement::Turn(players[next.index()].name().clone()));
        Ok(RoundOutcome::Continue { next })
    }

    /// Clears the board and hands the first move back to player one.
    ///
    /// With [`ResetMode::ReturnToSetup`], or before any game was started, the
    /// controller returns to `NotStarted` and the presenter goes back to the
    /// setup view. With [`ResetMode::Rematch`] the same players start over.
    #[instrument(skip(self), fields(mode = ?self.reset_mode))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        self.state.active = Seat::One;

        match (self.reset_mode, self.players.as_ref()) {
            (ResetMode::Rematch, Some([one, _])) => {
                info!("Rematch");
                self.state.phase = Phase::InProgress;
                self.presenter.render_board(&self.board);
                self.presenter.announce(&Announcement::Turn(one.name().clone()));
            }
            _ => {
                info!("Game reset to setup");
                self.state.phase = Phase::NotStarted;
                self.presenter.show_game_view(false);
                self.presenter.render_board(&self.board);
                self.presenter.announce(&Announcement::Reset);
            }
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Active seat and phase.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Returns true once a win or tie has been reached.
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Both players, once a game has been started.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// The player in `seat`, once a game has been started.
    pub fn player(&self, seat: Seat) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[seat.index()])
    }

    /// The player whose move is expected.
    pub fn active_player(&self) -> Option<&Player> {
        self.player(self.state.active)
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// The presenter, mutably.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consumes the controller and returns its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PresenterEvent, Transcript};

    fn started() -> GameController<Transcript> {
        let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
        game.start_game("Ada", "Grace");
        game
    }

    #[test]
    fn test_new_controller_is_not_started() {
        let game = GameController::new(Transcript::new(), ResetMode::Rematch);
        assert_eq!(game.phase(), Phase::NotStarted);
        assert!(game.players().is_none());
        assert!(game.presenter().events().is_empty());
    }

    #[test]
    fn test_start_game_presenter_sequence() {
        let game = started();
        assert_eq!(
            game.presenter().events(),
            &[
                PresenterEvent::GameViewShown(true),
                PresenterEvent::PlayerNamesUpdated("Ada (X)".into(), "Grace (O)".into()),
                PresenterEvent::BoardRendered(Board::new()),
                PresenterEvent::Announced(Announcement::Turn("Ada".into())),
            ]
        );
    }

    #[test]
    fn test_rejected_move_does_not_rerender() {
        let mut game = started();
        game.play_round(0).unwrap();
        game.presenter_mut().clear();

        assert_eq!(game.play_round(0), Err(MoveError::SquareOccupied(0)));
        assert_eq!(
            game.presenter().events(),
            &[PresenterEvent::Announced(Announcement::IllegalMove)]
        );
    }

    #[test]
    fn test_move_before_start_is_illegal() {
        let mut game = GameController::new(Transcript::new(), ResetMode::ReturnToSetup);
        assert_eq!(game.play_round(4), Err(MoveError::NotStarted));
        assert_eq!(game.board(), &Board::new());
        assert_eq!(
            game.presenter().last_announcement(),
            Some(&Announcement::IllegalMove)
        );
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let mut game = started();
        assert_eq!(game.play_round(9), Err(MoveError::OutOfBounds(9)));
        assert_eq!(game.state().active(), Seat::One);
    }
}
