//! Player markers and board squares.

use serde::{Deserialize, Serialize};

/// The symbol a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Marker {
    /// Player one's marker (moves first).
    X,
    /// Player two's marker.
    O,
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a marker.
    Occupied(Marker),
}

impl Square {
    /// Returns the marker on this square, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Square::Empty => None,
            Square::Occupied(marker) => Some(marker),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_markers_display_as_symbols() {
        let symbols: Vec<String> = Marker::iter().map(|m| m.to_string()).collect();
        assert_eq!(symbols, ["X", "O"]);
    }

    #[test]
    fn test_square_marker() {
        assert_eq!(Square::Empty.marker(), None);
        assert_eq!(Square::Occupied(Marker::O).marker(), Some(Marker::O));
        assert!(Square::default().is_empty());
    }
}
