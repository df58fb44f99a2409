//! Players and seats.

use crate::Marker;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// Player one, plays `X` and moves first.
    One,
    /// Player two, plays `O`.
    Two,
}

impl Seat {
    /// Returns the other seat.
    pub fn other(self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }

    /// The marker assigned to this seat.
    pub fn marker(self) -> Marker {
        match self {
            Seat::One => Marker::X,
            Seat::Two => Marker::O,
        }
    }

    /// Name used when the player leaves theirs blank.
    pub fn default_name(self) -> &'static str {
        match self {
            Seat::One => "Player 1",
            Seat::Two => "Player 2",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

/// A named player and the marker they place. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    #[getter(skip)]
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, marker: Marker) -> Self {
        Self {
            name: name.into(),
            marker,
        }
    }

    /// Creates the player for `seat` from raw name input.
    ///
    /// Surrounding whitespace is trimmed; blank input falls back to
    /// [`Seat::default_name`].
    #[instrument]
    pub fn for_seat(seat: Seat, name_input: &str) -> Self {
        let trimmed = name_input.trim();
        let name = if trimmed.is_empty() {
            seat.default_name()
        } else {
            trimmed
        };
        Self::new(name, seat.marker())
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }
}

/// `"{name} ({marker})"`, the label shown above the board.
impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
