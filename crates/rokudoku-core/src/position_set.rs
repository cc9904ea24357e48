//! A set of board positions, represented as a bitset.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::{CELL_COUNT, Position, SIZE};

/// A set of board positions, represented as a 36-bit bitset.
///
/// Bit `i` corresponds to the position with row-major cell index `i`.
/// Precomputed masks for every row, column, and block make house membership
/// queries cheap.
///
/// # Examples
///
/// ```
/// use rokudoku_core::{Position, PositionSet};
///
/// let row = PositionSet::ROW_POSITIONS[0];
/// assert_eq!(row.len(), 6);
/// assert!(row.contains(Position::new(5, 0)));
/// assert!(!row.contains(Position::new(0, 1)));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PositionSet {
    bits: u64,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing every position on the board.
    pub const ALL: Self = Self {
        bits: (1 << CELL_COUNT) - 1,
    };

    /// Position sets for each row, indexed by `y`.
    pub const ROW_POSITIONS: [Self; SIZE as usize] = {
        let mut rows = [Self::EMPTY; SIZE as usize];
        let mut y = 0;
        while y < SIZE {
            let mut x = 0;
            while x < SIZE {
                rows[y as usize] = rows[y as usize].with(Position::new(x, y));
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// Position sets for each column, indexed by `x`.
    pub const COLUMN_POSITIONS: [Self; SIZE as usize] = {
        let mut columns = [Self::EMPTY; SIZE as usize];
        let mut x = 0;
        while x < SIZE {
            let mut y = 0;
            while y < SIZE {
                columns[x as usize] = columns[x as usize].with(Position::new(x, y));
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// Position sets for each 2×3 block, indexed by block index.
    pub const BLOCK_POSITIONS: [Self; SIZE as usize] = {
        let mut blocks = [Self::EMPTY; SIZE as usize];
        let mut block = 0;
        while block < SIZE {
            let mut cell = 0;
            while cell < SIZE {
                blocks[block as usize] =
                    blocks[block as usize].with(Position::from_block(block, cell));
                cell += 1;
            }
            block += 1;
        }
        blocks
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(pos: Position) -> u64 {
        1 << pos.cell_index()
    }

    /// Returns `true` if the set contains the position.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Inserts a position into the set.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= Self::bit(pos);
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !Self::bit(pos);
    }

    /// Returns a copy of the set with the position inserted.
    #[must_use]
    pub const fn with(self, pos: Position) -> Self {
        Self {
            bits: self.bits | Self::bit(pos),
        }
    }

    /// Returns a copy of the set with the position removed.
    #[must_use]
    pub const fn without(self, pos: Position) -> Self {
        Self {
            bits: self.bits & !Self::bit(pos),
        }
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the positions in the set, in ascending
    /// cell-index order.
    #[must_use]
    pub const fn iter(self) -> PositionSetIter {
        PositionSetIter { bits: self.bits }
    }
}

impl Debug for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for PositionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Position>,
    {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = PositionSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the positions in a [`PositionSet`], in ascending cell-index
/// order.
#[derive(Debug, Clone)]
pub struct PositionSetIter {
    bits: u64,
}

impl Iterator for PositionSetIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as usize;
        self.bits &= self.bits - 1;
        Some(Position::from_cell_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for PositionSetIter {}
impl FusedIterator for PositionSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = PositionSet::new();
        assert!(set.is_empty());

        let a = Position::new(0, 0);
        let b = Position::new(5, 5);
        set.insert(a);
        set.insert(b);
        assert!(set.contains(a));
        assert!(set.contains(b));
        assert_eq!(set.len(), 2);

        set.remove(a);
        assert!(!set.contains(a));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(PositionSet::EMPTY.len(), 0);
        assert_eq!(PositionSet::ALL.len(), 36);
        for pos in Position::ALL {
            assert!(PositionSet::ALL.contains(pos));
        }
    }

    #[test]
    fn test_house_masks() {
        for (y, row) in PositionSet::ROW_POSITIONS.iter().enumerate() {
            assert_eq!(row.len(), 6);
            for pos in *row {
                assert_eq!(usize::from(pos.y()), y);
            }
        }
        for (x, column) in PositionSet::COLUMN_POSITIONS.iter().enumerate() {
            assert_eq!(column.len(), 6);
            for pos in *column {
                assert_eq!(usize::from(pos.x()), x);
            }
        }
        for (block, positions) in PositionSet::BLOCK_POSITIONS.iter().enumerate() {
            assert_eq!(positions.len(), 6);
            for pos in *positions {
                assert_eq!(usize::from(pos.block_index()), block);
            }
        }
    }

    #[test]
    fn test_blocks_tile_the_board() {
        let mut union = PositionSet::EMPTY;
        let mut total = 0;
        for block in PositionSet::BLOCK_POSITIONS {
            total += block.len();
            union = union | block;
        }
        assert_eq!(total, 36);
        assert_eq!(union, PositionSet::ALL);
    }

    #[test]
    fn test_iteration_order() {
        let set = PositionSet::from_iter([
            Position::new(3, 2),
            Position::new(0, 0),
            Position::new(1, 0),
        ]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(
            collected,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(3, 2)]
        );
    }
}
