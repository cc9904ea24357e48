//! Game session state for Rokudoku.
//!
//! A [`Game`] tracks the live board of one puzzle: which cells are given,
//! which the player has filled, and which are still empty. Placements are
//! validated against the row/column/block rules of the *current board* before
//! they are committed, so a board with no empty cells is always rule
//! consistent.
//!
//! # Examples
//!
//! ```
//! use rokudoku_game::Game;
//! use rokudoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let mut game = Game::new(generator.generate());
//!
//! // Fill the first empty cell with its correct value
//! let (pos, digit) = game.hint().expect("a new game has empty cells");
//! assert!(game.place(pos, digit).is_accepted());
//! ```

use derive_more::{Display, Error, IsVariant};

pub mod cell_state;
pub mod game;

pub use self::{cell_state::CellState, game::Game};

/// Error returned when constructing a [`Game`] from incompatible grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The filled grid holds a digit in a position that is a given.
    #[display("Cannot modify a given cell")]
    CannotModifyGivenCell,
    /// The solution grid has empty cells.
    #[display("Solution grid must be fully populated")]
    IncompleteSolution,
}

/// The result of a [`Game::place`] or [`Game::clear`] call.
///
/// None of the rejected outcomes are fatal: the board is left unchanged and
/// the caller decides how to surface the condition to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PlaceOutcome {
    /// The digit was written to the cell.
    Placed,
    /// The cell was cleared.
    Cleared,
    /// The digit already appears in the cell's row, column, or block; the
    /// board is unchanged.
    Conflict,
    /// The cell is a given and cannot be modified; the board is unchanged.
    GivenCell,
}

impl PlaceOutcome {
    /// Returns `true` if the board was modified.
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Placed | Self::Cleared)
    }
}
