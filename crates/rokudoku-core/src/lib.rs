//! Core data structures for the Rokudoku 6×6 number-place puzzle.
//!
//! The grid is 6×6, divided into six non-overlapping 2×3 blocks (2 rows tall,
//! 3 columns wide). A solved grid contains each digit 1-6 exactly once in
//! every row, every column, and every block.
//!
//! # Overview
//!
//! - [`Digit`]: type-safe representation of the digits 1-6
//! - [`Position`]: (x, y) cell coordinate with block arithmetic
//! - [`DigitSet`] / [`PositionSet`]: compact bitsets over digits and cells
//! - [`House`]: a row, column, or block constraint group
//! - [`DigitGrid`]: a 36-cell grid of optional digits
//!
//! # Examples
//!
//! ```
//! use rokudoku_core::{Digit, DigitGrid, Position};
//!
//! let mut grid = DigitGrid::new();
//! grid.set(Position::new(2, 4), Some(Digit::D5));
//!
//! assert_eq!(grid[Position::new(2, 4)], Some(Digit::D5));
//! assert!(!grid.is_complete());
//! ```

pub mod digit;
pub mod digit_grid;
pub mod digit_set;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_grid::DigitGrid,
    digit_set::DigitSet,
    house::House,
    position::Position,
    position_set::PositionSet,
};

/// The side length of the grid.
pub const SIZE: u8 = 6;

/// The height of a block in rows.
pub const BLOCK_HEIGHT: u8 = 2;

/// The width of a block in columns.
pub const BLOCK_WIDTH: u8 = 3;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = (SIZE as usize) * (SIZE as usize);
