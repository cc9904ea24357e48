//! Puzzle generation for Rokudoku.
//!
//! Generation happens in two steps:
//!
//! 1. A complete, valid solution grid is produced by depth-first backtracking
//!    over the cells in row-major order, trying the candidate digits of each
//!    cell in a shuffled order.
//! 2. The solution is *carved* into a playable problem grid: the top two rows
//!    are kept fully given, and every other block keeps exactly two of its
//!    six cells.
//!
//! All randomness is drawn from a PCG64 engine seeded by a [`PuzzleSeed`],
//! so a puzzle can be reproduced exactly from its printed seed.
//!
//! # Examples
//!
//! ```
//! use rokudoku_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate();
//!
//! assert!(puzzle.solution.is_valid_solution());
//! assert!(!puzzle.problem.is_complete());
//!
//! // The same seed reproduces the same puzzle
//! let again = generator.generate_with_seed(puzzle.seed);
//! assert_eq!(again, puzzle);
//! ```

pub mod generator;
pub mod seed;

pub use self::{
    generator::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
