//! A 6×6 grid of optional digits.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{CELL_COUNT, Digit, DigitSet, House, Position, PositionSet};

/// A 6×6 grid where each cell holds an optional digit.
///
/// This is the basic container for both problem grids (with empty cells) and
/// solution grids (fully populated). Cells are addressed by [`Position`].
///
/// Grids can be parsed from and formatted as 36-character strings in
/// row-major order, where `.`, `_`, or `0` denotes an empty cell and `1`-`6`
/// a digit. Whitespace is ignored when parsing, which keeps multi-line test
/// fixtures readable.
///
/// # Examples
///
/// ```
/// use rokudoku_core::{Digit, DigitGrid, Position};
///
/// let grid: DigitGrid = "
///     123 456
///     456 123
///     ... ...
///     ... ...
///     ... ...
///     ... ...
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(grid[Position::new(0, 0)], Some(Digit::D1));
/// assert_eq!(grid[Position::new(0, 2)], None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; CELL_COUNT],
}

impl DigitGrid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the digit at the given position, or `None` if the cell is
    /// empty.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.cell_index()]
    }

    /// Sets or clears the digit at the given position.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.cell_index()] = digit;
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the set of positions that hold a digit.
    #[must_use]
    pub fn filled_positions(&self) -> PositionSet {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_some())
            .collect()
    }

    /// Returns the set of digits present in the given house.
    #[must_use]
    pub fn house_digits(&self, house: House) -> DigitSet {
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self.get(pos))
            .collect()
    }

    /// Returns `true` if the grid is a valid solution: fully populated with
    /// every row, column, and block containing each digit 1-6 exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::DigitGrid;
    ///
    /// let grid: DigitGrid = "123456456123231564564231312645645312"
    ///     .parse()
    ///     .unwrap();
    /// assert!(grid.is_valid_solution());
    /// ```
    #[must_use]
    pub fn is_valid_solution(&self) -> bool {
        self.is_complete()
            && House::ALL
                .into_iter()
                .all(|house| self.house_digits(house) == DigitSet::FULL)
    }
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.cell_index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.cell_index()]
    }
}

/// Error returned when parsing a [`DigitGrid`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseDigitGridError {
    /// The string did not contain exactly 36 cell characters.
    #[display("Grid must have 36 cells, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contained a character that is not a digit, an empty-cell
    /// marker, or whitespace.
    #[display("Invalid character in grid: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for DigitGrid {
    type Err = ParseDigitGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for c in s.chars() {
            if c.is_whitespace() {
                continue;
            }
            let digit = match c {
                '.' | '_' | '0' => None,
                '1' => Some(Digit::D1),
                '2' => Some(Digit::D2),
                '3' => Some(Digit::D3),
                '4' => Some(Digit::D4),
                '5' => Some(Digit::D5),
                '6' => Some(Digit::D6),
                _ => return Err(ParseDigitGridError::InvalidCharacter(c)),
            };
            // Keep consuming past 36 cells so the error reports the full length
            if count < CELL_COUNT {
                grid.cells[count] = digit;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseDigitGridError::InvalidLength(count));
        }
        Ok(grid)
    }
}

impl fmt::Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_SOLUTION: &str = "123456456123231564564231312645645312";

    #[test]
    fn test_get_set() {
        let mut grid = DigitGrid::new();
        let pos = Position::new(3, 4);
        assert_eq!(grid.get(pos), None);

        grid.set(pos, Some(Digit::D6));
        assert_eq!(grid.get(pos), Some(Digit::D6));
        assert_eq!(grid[pos], Some(Digit::D6));

        grid.set(pos, None);
        assert_eq!(grid.get(pos), None);
    }

    #[test]
    fn test_parse_display_round_trip() {
        let grid: DigitGrid = VALID_SOLUTION.parse().unwrap();
        assert_eq!(grid.to_string(), VALID_SOLUTION);

        let partial: DigitGrid = "1.3..6..............................".parse().unwrap();
        assert_eq!(partial.to_string(), "1.3..6..............................");
    }

    #[test]
    fn test_parse_accepts_whitespace_and_markers() {
        let grid: DigitGrid = "
            123 456
            456 123
            0_0 _0_
            ... ...
            ... ...
            ... ...
        "
        .parse()
        .unwrap();
        assert_eq!(grid[Position::new(3, 1)], Some(Digit::D1));
        assert_eq!(grid[Position::new(0, 2)], None);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "12345".parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(5))
        );
        assert_eq!(
            format!("{VALID_SOLUTION}1").parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidLength(37))
        );
        assert_eq!(
            "7...................................".parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidCharacter('7'))
        );
        assert_eq!(
            "x...................................".parse::<DigitGrid>(),
            Err(ParseDigitGridError::InvalidCharacter('x'))
        );
    }

    #[test]
    fn test_is_complete() {
        let mut grid: DigitGrid = VALID_SOLUTION.parse().unwrap();
        assert!(grid.is_complete());

        grid.set(Position::new(0, 0), None);
        assert!(!grid.is_complete());
    }

    #[test]
    fn test_filled_positions() {
        let grid: DigitGrid = "1....6..............................".parse().unwrap();
        let filled = grid.filled_positions();
        assert_eq!(filled.len(), 2);
        assert!(filled.contains(Position::new(0, 0)));
        assert!(filled.contains(Position::new(5, 0)));
    }

    #[test]
    fn test_house_digits() {
        let grid: DigitGrid = "123456..............................".parse().unwrap();
        assert_eq!(grid.house_digits(House::Row { y: 0 }), DigitSet::FULL);
        assert_eq!(
            grid.house_digits(House::Column { x: 0 }),
            DigitSet::from_iter([Digit::D1])
        );
        assert_eq!(
            grid.house_digits(House::Block { index: 0 }),
            DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3])
        );
    }

    #[test]
    fn test_is_valid_solution() {
        let grid: DigitGrid = VALID_SOLUTION.parse().unwrap();
        assert!(grid.is_valid_solution());

        // Incomplete grid is not a solution
        let mut incomplete = grid.clone();
        incomplete.set(Position::new(2, 2), None);
        assert!(!incomplete.is_valid_solution());

        // A duplicate in a row breaks validity even though the grid is full
        let mut duplicated = grid.clone();
        duplicated.set(Position::new(0, 0), Some(Digit::D2));
        assert!(!duplicated.is_valid_solution());
    }
}
