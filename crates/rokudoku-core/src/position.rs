//! Board position (x, y) coordinate types.

use std::fmt::{self, Display};

use crate::{BLOCK_HEIGHT, BLOCK_WIDTH, CELL_COUNT, PositionSet, SIZE};

/// A cell coordinate on the 6×6 grid.
///
/// `x` is the column (0-5, left to right) and `y` is the row (0-5, top to
/// bottom). Both coordinates are validated at construction time, so a
/// `Position` value is always in range.
///
/// # Examples
///
/// ```
/// use rokudoku_core::Position;
///
/// let pos = Position::new(2, 4);
/// assert_eq!(pos.x(), 2);
/// assert_eq!(pos.y(), 4);
///
/// // Untrusted input goes through the checked constructor
/// assert!(Position::try_new(6, 0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// Array containing all 36 positions in row-major order (left to right,
    /// top to bottom).
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Position;
    ///
    /// assert_eq!(Position::ALL.len(), 36);
    /// assert_eq!(Position::ALL[0], Position::new(0, 0));
    /// assert_eq!(Position::ALL[6], Position::new(0, 1));
    /// assert_eq!(Position::ALL[35], Position::new(5, 5));
    /// ```
    pub const ALL: [Self; CELL_COUNT] = {
        let mut all = [Self { x: 0, y: 0 }; CELL_COUNT];
        let mut i = 0;
        while i < CELL_COUNT {
            all[i] = Self::from_cell_index(i);
            i += 1;
        }
        all
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-5.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < SIZE && y < SIZE, "Position out of range");
        Self { x, y }
    }

    /// Creates a new position, returning `None` if either coordinate is out
    /// of range.
    #[must_use]
    pub const fn try_new(x: u8, y: u8) -> Option<Self> {
        if x < SIZE && y < SIZE {
            Some(Self { x, y })
        } else {
            None
        }
    }

    /// Returns the column (0-5).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-5).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the row-major cell index (0-35) of this position.
    #[must_use]
    pub const fn cell_index(self) -> usize {
        (self.y as usize) * (SIZE as usize) + (self.x as usize)
    }

    /// Creates a position from a row-major cell index.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-35.
    #[must_use]
    pub const fn from_cell_index(index: usize) -> Self {
        assert!(index < CELL_COUNT, "Cell index out of range");
        let size = SIZE as usize;
        #[expect(clippy::cast_possible_truncation)]
        let x = (index % size) as u8;
        #[expect(clippy::cast_possible_truncation)]
        let y = (index / size) as u8;
        Self { x, y }
    }

    /// Returns the index (0-5) of the 2×3 block containing this position.
    ///
    /// Blocks are numbered left to right, top to bottom: the top-left block
    /// is 0, the top-right block is 1, and the bottom-right block is 5.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Position;
    ///
    /// assert_eq!(Position::new(0, 0).block_index(), 0);
    /// assert_eq!(Position::new(3, 1).block_index(), 1);
    /// assert_eq!(Position::new(2, 5).block_index(), 4);
    /// assert_eq!(Position::new(5, 4).block_index(), 5);
    /// ```
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.y / BLOCK_HEIGHT) * (SIZE / BLOCK_WIDTH) + self.x / BLOCK_WIDTH
    }

    /// Returns the top-left position of the block containing this position.
    #[must_use]
    pub const fn block_origin(self) -> Self {
        Self {
            x: self.x - self.x % BLOCK_WIDTH,
            y: self.y - self.y % BLOCK_HEIGHT,
        }
    }

    /// Creates a position from a block index (0-5) and a cell index within
    /// the block (0-5, row-major within the block).
    ///
    /// # Panics
    ///
    /// Panics if `block` or `cell` is not in the range 0-5.
    #[must_use]
    pub const fn from_block(block: u8, cell: u8) -> Self {
        assert!(block < SIZE && cell < SIZE, "Block or cell index out of range");
        let origin_y = (block / (SIZE / BLOCK_WIDTH)) * BLOCK_HEIGHT;
        let origin_x = (block % (SIZE / BLOCK_WIDTH)) * BLOCK_WIDTH;
        Self {
            x: origin_x + cell % BLOCK_WIDTH,
            y: origin_y + cell / BLOCK_WIDTH,
        }
    }

    /// Returns the set of positions that share a row, column, or block with
    /// this position, excluding the position itself.
    ///
    /// Every position has exactly 12 peers: 5 in its row, 5 in its column,
    /// and 2 more in its block that share neither its row nor its column.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Position;
    ///
    /// let peers = Position::new(0, 0).house_peers();
    /// assert_eq!(peers.len(), 12);
    /// assert!(peers.contains(Position::new(5, 0))); // same row
    /// assert!(peers.contains(Position::new(0, 5))); // same column
    /// assert!(peers.contains(Position::new(2, 1))); // same block
    /// assert!(!peers.contains(Position::new(0, 0)));
    /// ```
    #[must_use]
    pub fn house_peers(self) -> PositionSet {
        let row = PositionSet::ROW_POSITIONS[self.y as usize];
        let column = PositionSet::COLUMN_POSITIONS[self.x as usize];
        let block = PositionSet::BLOCK_POSITIONS[self.block_index() as usize];
        (row | column | block).without(self)
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
