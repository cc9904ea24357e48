//! The game session type.

use rokudoku_core::{CELL_COUNT, Digit, DigitGrid, Position};
use rokudoku_generator::GeneratedPuzzle;

use crate::{CellState, GameError, PlaceOutcome};

/// A Rokudoku game session.
///
/// Owns the live board (given, player-filled, and empty cells) together with
/// the hidden solution of the current puzzle. The board is mutated only
/// through [`place`](Self::place) and [`clear`](Self::clear), both of which
/// protect given cells; `place` additionally validates the digit against the
/// row, column, and block of the target cell before committing it.
///
/// Because every committed digit passed that validation, a board with no
/// empty cells contains no rule violations, and
/// [`is_complete`](Self::is_complete) only needs to look for empty cells.
///
/// Validation is purely local: it consults the current board, never the
/// hidden solution. A player can therefore fill the board in a way that is
/// rule consistent but diverges from the generated solution, and such a
/// board still counts as complete.
///
/// # Examples
///
/// ```
/// use rokudoku_game::Game;
/// use rokudoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let mut game = Game::new(generator.generate());
///
/// while let Some((pos, digit)) = game.hint() {
///     assert!(game.place(pos, digit).is_accepted());
/// }
/// assert!(game.is_complete());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    cells: [CellState; CELL_COUNT],
    solution: [Digit; CELL_COUNT],
}

impl Game {
    /// Creates a new game from a generated puzzle.
    ///
    /// All cells present in the puzzle's problem grid become given cells;
    /// the rest start empty.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle's solution grid is not fully populated, which
    /// the generator guarantees never to produce.
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle) -> Self {
        Self::from_parts(&puzzle.problem, &puzzle.solution, &DigitGrid::new())
            .expect("generated puzzles carry a complete solution")
    }

    /// Creates a game from a problem grid, solution grid, and a filled
    /// (player input) grid.
    ///
    /// Cells with digits in `problem` are treated as givens. Digits in
    /// `filled` are applied as player-entered values without rule checking,
    /// so callers can reconstruct any board state they previously observed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::IncompleteSolution`] if `solution` has empty
    /// cells, or [`GameError::CannotModifyGivenCell`] if `filled` holds a
    /// digit in a position that is a given in `problem`.
    pub fn from_parts(
        problem: &DigitGrid,
        solution: &DigitGrid,
        filled: &DigitGrid,
    ) -> Result<Self, GameError> {
        let mut solution_digits = [Digit::D1; CELL_COUNT];
        for pos in Position::ALL {
            solution_digits[pos.cell_index()] =
                solution.get(pos).ok_or(GameError::IncompleteSolution)?;
        }

        let mut cells = [CellState::Empty; CELL_COUNT];
        for pos in Position::ALL {
            if let Some(digit) = problem.get(pos) {
                cells[pos.cell_index()] = CellState::Given(digit);
            }
        }
        for pos in Position::ALL {
            if let Some(digit) = filled.get(pos) {
                if cells[pos.cell_index()].is_given() {
                    return Err(GameError::CannotModifyGivenCell);
                }
                cells[pos.cell_index()] = CellState::Filled(digit);
            }
        }

        Ok(Self {
            cells,
            solution: solution_digits,
        })
    }

    /// Replaces the current puzzle with a freshly generated one.
    ///
    /// The previous solution, givens, and player input are all discarded.
    ///
    /// # Panics
    ///
    /// Panics if the puzzle's solution grid is not fully populated, which
    /// the generator guarantees never to produce.
    pub fn start_new_game(&mut self, puzzle: GeneratedPuzzle) {
        *self = Self::new(puzzle);
    }

    /// Returns the state of the cell at the given position.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellState {
        self.cells[pos.cell_index()]
    }

    /// Returns a snapshot of the current board as a digit grid.
    ///
    /// Given and player-filled cells hold their digit; empty cells are
    /// `None`.
    #[must_use]
    pub fn board(&self) -> DigitGrid {
        let mut board = DigitGrid::new();
        for pos in Position::ALL {
            board.set(pos, self.cell(pos).as_digit());
        }
        board
    }

    /// Returns `true` if the cell at the given position is a given.
    #[must_use]
    pub fn is_given(&self, pos: Position) -> bool {
        self.cell(pos).is_given()
    }

    /// Returns the solution's digit for the given position.
    ///
    /// Valid for any cell regardless of board state; this is the lookup
    /// behind hints.
    #[must_use]
    pub fn correct_value(&self, pos: Position) -> Digit {
        self.solution[pos.cell_index()]
    }

    /// Returns `true` if placing `digit` at `pos` would not duplicate a
    /// digit already present in the cell's row, column, or block.
    ///
    /// This is a pure query against the current board; the cell itself is
    /// excluded, so replacing a player-filled digit with itself is valid.
    /// The hidden solution is never consulted.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        pos.house_peers()
            .into_iter()
            .all(|peer| self.cell(peer).as_digit() != Some(digit))
    }

    /// Attempts to place a digit at the given position.
    ///
    /// Given cells are never modified and report
    /// [`PlaceOutcome::GivenCell`]. A digit that duplicates one already in
    /// the cell's row, column, or block reports [`PlaceOutcome::Conflict`]
    /// and leaves the board unchanged. Otherwise the digit is committed
    /// (replacing any previous player digit in the cell) and the call
    /// reports [`PlaceOutcome::Placed`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_game::{Game, PlaceOutcome};
    /// use rokudoku_generator::PuzzleGenerator;
    ///
    /// let generator = PuzzleGenerator::new();
    /// let mut game = Game::new(generator.generate());
    ///
    /// let pos = game.first_empty_cell().expect("new game has empty cells");
    /// let digit = game.correct_value(pos);
    /// assert_eq!(game.place(pos, digit), PlaceOutcome::Placed);
    /// ```
    pub fn place(&mut self, pos: Position, digit: Digit) -> PlaceOutcome {
        if self.is_given(pos) {
            return PlaceOutcome::GivenCell;
        }
        if !self.is_valid_placement(pos, digit) {
            return PlaceOutcome::Conflict;
        }
        self.cells[pos.cell_index()] = CellState::Filled(digit);
        PlaceOutcome::Placed
    }

    /// Clears the player digit at the given position.
    ///
    /// Erasing is always allowed on non-given cells, even when the cell is
    /// already empty. Given cells report [`PlaceOutcome::GivenCell`].
    pub fn clear(&mut self, pos: Position) -> PlaceOutcome {
        if self.is_given(pos) {
            return PlaceOutcome::GivenCell;
        }
        self.cells[pos.cell_index()] = CellState::Empty;
        PlaceOutcome::Cleared
    }

    /// Returns `true` if no cell is empty.
    ///
    /// Completion does not re-verify rule satisfaction: every non-empty cell
    /// was either carved as a given or committed through the validated
    /// [`place`](Self::place) path, so a full board is always rule
    /// consistent.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Resets every player-filled cell back to empty.
    ///
    /// Given cells and the hidden solution are untouched; this restarts the
    /// current puzzle rather than generating a new one.
    pub fn reset_progress(&mut self) {
        for cell in &mut self.cells {
            if !cell.is_given() {
                *cell = CellState::Empty;
            }
        }
    }

    /// Returns the first empty cell in row-major order, or `None` if the
    /// board is complete.
    #[must_use]
    pub fn first_empty_cell(&self) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|&pos| self.cell(pos).is_empty())
    }

    /// Returns the first empty cell together with its correct value, or
    /// `None` if the board is complete.
    #[must_use]
    pub fn hint(&self) -> Option<(Position, Digit)> {
        let pos = self.first_empty_cell()?;
        Some((pos, self.correct_value(pos)))
    }
}
