//! The presentation capability the controller reports to.

use crate::{Announcement, Board, Player};

/// Front-end capability set used by [`GameController`](crate::GameController).
///
/// The controller never reads from a presenter; user input flows back in
/// through [`GameController::play_round`](crate::GameController::play_round).
pub trait Presenter {
    /// Redraws the board from a read-only view of its squares.
    fn render_board(&mut self, board: &Board);

    /// Shows a single message, replacing the previous one.
    fn announce(&mut self, announcement: &Announcement);

    /// Switches between the setup view (`false`) and the game view (`true`).
    ///
    /// Front ends without separate views ignore this.
    fn show_game_view(&mut self, _visible: bool) {}

    /// Shows the labels of both players.
    fn update_player_names(&mut self, _one: &Player, _two: &Player) {}
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn render_board(&mut self, board: &Board) {
        (**self).render_board(board)
    }

    fn announce(&mut self, announcement: &Announcement) {
        (**self).announce(announcement)
    }

    fn show_game_view(&mut self, visible: bool) {
        (**self).show_game_view(visible)
    }

    fn update_player_names(&mut self, one: &Player, two: &Player) {
        (**self).update_player_names(one, two)
    }
}

/// One recorded presenter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterEvent {
    /// `render_board` with a copy of the board.
    BoardRendered(Board),
    /// `announce`.
    Announced(Announcement),
    /// `show_game_view`.
    GameViewShown(bool),
    /// `update_player_names` with both display labels.
    PlayerNamesUpdated(String, String),
}

/// Presenter that records every call in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    events: Vec<PresenterEvent>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Announcements only, in order.
    pub fn announcements(&self) -> impl Iterator<Item = &Announcement> {
        self.events.iter().filter_map(|event| match event {
            PresenterEvent::Announced(announcement) => Some(announcement),
            _ => None,
        })
    }

    /// The most recent announcement.
    pub fn last_announcement(&self) -> Option<&Announcement> {
        self.announcements().last()
    }

    /// The most recently rendered board.
    pub fn last_board(&self) -> Option<&Board> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::BoardRendered(board) => Some(board),
            _ => None,
        })
    }

    /// Forgets everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Presenter for Transcript {
    fn render_board(&mut self, board: &Board) {
        self.events.push(PresenterEvent::BoardRendered(board.clone()));
    }

    fn announce(&mut self, announcement: &Announcement) {
        self.events.push(PresenterEvent::Announced(announcement.clone()));
    }

    fn show_game_view(&mut self, visible: bool) {
        self.events.push(PresenterEvent::GameViewShown(visible));
    }

    fn update_player_names(&mut self, one: &Player, two: &Player) {
        self.events.push(PresenterEvent::PlayerNamesUpdated(
            one.to_string(),
            two.to_string(),
        ));
    }
}
