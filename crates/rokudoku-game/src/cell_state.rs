//! Per-cell state of a game board.

use rokudoku_core::Digit;

/// The state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    /// A cell pre-filled by puzzle carving; immutable for the duration of
    /// the game.
    Given(Digit),
    /// A cell filled by the player; can be replaced or cleared.
    Filled(Digit),
    /// An empty cell.
    #[default]
    Empty,
}

impl CellState {
    /// Returns the digit in the cell, whether given or player-filled.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Given(digit) | Self::Filled(digit) => Some(digit),
            Self::Empty => None,
        }
    }

    /// Returns `true` if the cell is a given.
    #[must_use]
    pub const fn is_given(self) -> bool {
        matches!(self, Self::Given(_))
    }

    /// Returns `true` if the cell holds a player-entered digit.
    #[must_use]
    pub const fn is_filled(self) -> bool {
        matches!(self, Self::Filled(_))
    }

    /// Returns `true` if the cell is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_digit() {
        assert_eq!(CellState::Given(Digit::D3).as_digit(), Some(Digit::D3));
        assert_eq!(CellState::Filled(Digit::D5).as_digit(), Some(Digit::D5));
        assert_eq!(CellState::Empty.as_digit(), None);
    }

    #[test]
    fn test_predicates() {
        assert!(CellState::Given(Digit::D1).is_given());
        assert!(!CellState::Given(Digit::D1).is_filled());
        assert!(CellState::Filled(Digit::D1).is_filled());
        assert!(!CellState::Filled(Digit::D1).is_given());
        assert!(CellState::Empty.is_empty());
        assert_eq!(CellState::default(), CellState::Empty);
    }
}
