//! Solution generation and problem carving.

use log::debug;
use rand::{Rng, SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use rokudoku_core::{CELL_COUNT, Digit, DigitGrid, House, Position, SIZE};

use crate::PuzzleSeed;

/// Number of top rows that are kept fully given by the carver.
const GIVEN_ROWS: u8 = 2;

/// Number of given cells kept in each block below the fully given rows.
const GIVENS_PER_BLOCK: usize = 2;

/// A generated puzzle: the playable problem grid, its unique underlying
/// solution, and the seed that reproduces both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The problem grid: given cells hold digits, playable cells are empty.
    pub problem: DigitGrid,
    /// The complete solution the problem was carved from.
    pub solution: DigitGrid,
    /// The seed used to generate this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Rokudoku puzzles.
///
/// Each puzzle is produced by filling an empty grid with randomized
/// backtracking, then hiding cells according to a fixed givens policy: the
/// top two rows stay fully given and every block below them keeps exactly
/// two givens. This yields 20 given cells and 16 playable cells per puzzle;
/// only *which* cells of each lower block are given varies.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new();
/// let puzzle = generator.generate();
/// assert!(puzzle.solution.is_valid_solution());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    _private: (),
}

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generates a puzzle from a fresh random seed.
    #[must_use]
    pub fn generate(&self) -> GeneratedPuzzle {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates the puzzle determined by the given seed.
    ///
    /// The same seed always produces the same problem and solution.
    #[must_use]
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> GeneratedPuzzle {
        let mut rng = Pcg64::from_seed(seed.into_bytes());
        let solution = generate_solution(&mut rng);
        let problem = carve_problem(&solution, &mut rng);
        debug!("generated puzzle {problem} from seed {seed}");
        GeneratedPuzzle {
            problem,
            solution,
            seed,
        }
    }
}

/// Fills an empty grid with a complete, valid solution.
///
/// Candidate digits are tried in a shuffled order at every cell, so
/// different random states produce different solutions.
fn generate_solution<R>(rng: &mut R) -> DigitGrid
where
    R: Rng,
{
    let mut grid = DigitGrid::new();
    let filled = fill_cells(&mut grid, 0, rng);
    // The 6x6 search space always contains a solution for an empty grid
    assert!(filled, "backtracking exhausted without a solution");
    grid
}

/// Depth-first backtracking over cells in row-major order.
///
/// Returns `true` once every cell from `cell` onward has been filled without
/// violating a row, column, or block constraint. On failure the cell is
/// cleared again and the caller backtracks.
fn fill_cells<R>(grid: &mut DigitGrid, cell: usize, rng: &mut R) -> bool
where
    R: Rng,
{
    if cell == CELL_COUNT {
        return true;
    }
    let pos = Position::from_cell_index(cell);

    let mut candidates = Digit::ALL;
    candidates.shuffle(rng);
    for digit in candidates {
        if fits(grid, pos, digit) {
            grid.set(pos, Some(digit));
            if fill_cells(grid, cell + 1, rng) {
                return true;
            }
            grid.set(pos, None);
        }
    }
    false
}

/// Returns `true` if `digit` does not already appear in the row, column, or
/// block of `pos`.
fn fits(grid: &DigitGrid, pos: Position, digit: Digit) -> bool {
    pos.house_peers()
        .into_iter()
        .all(|peer| grid.get(peer) != Some(digit))
}

/// Carves a playable problem grid out of a complete solution.
///
/// The top [`GIVEN_ROWS`] rows are copied verbatim. For every block whose top
/// row lies below them, the block's six positions are shuffled and the first
/// [`GIVENS_PER_BLOCK`] become givens; the rest stay empty.
fn carve_problem<R>(solution: &DigitGrid, rng: &mut R) -> DigitGrid
where
    R: Rng,
{
    let mut problem = DigitGrid::new();
    for y in 0..GIVEN_ROWS {
        for x in 0..SIZE {
            let pos = Position::new(x, y);
            problem.set(pos, solution.get(pos));
        }
    }

    for block in House::BLOCKS {
        if block.position_from_cell_index(0).y() < GIVEN_ROWS {
            continue;
        }
        let mut cells: Vec<Position> = block.positions().into_iter().collect();
        cells.shuffle(rng);
        for pos in cells.into_iter().take(GIVENS_PER_BLOCK) {
            problem.set(pos, solution.get(pos));
        }
    }
    problem
}
