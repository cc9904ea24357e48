//! Houses: the row, column, and block constraint groups of the grid.

use crate::{Position, PositionSet, SIZE};

/// A constraint group of six cells: a row, a column, or a 2×3 block.
///
/// In a solved grid, every house contains each digit 1-6 exactly once.
///
/// # Examples
///
/// ```
/// use rokudoku_core::House;
///
/// assert_eq!(House::ALL.len(), 18);
/// for house in House::ALL {
///     assert_eq!(house.positions().len(), 6);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-5).
    Row {
        /// Row index (0-5).
        y: u8,
    },
    /// A column identified by its x coordinate (0-5).
    Column {
        /// Column index (0-5).
        x: u8,
    },
    /// A 2×3 block identified by its index (0-5, left to right, top to
    /// bottom).
    Block {
        /// Block index (0-5).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-5).
    pub const ROWS: [Self; SIZE as usize] = {
        let mut rows = [Self::Row { y: 0 }; SIZE as usize];
        let mut y = 0;
        while y < SIZE {
            rows[y as usize] = Self::Row { y };
            y += 1;
        }
        rows
    };

    /// Array containing all columns (0-5).
    pub const COLUMNS: [Self; SIZE as usize] = {
        let mut columns = [Self::Column { x: 0 }; SIZE as usize];
        let mut x = 0;
        while x < SIZE {
            columns[x as usize] = Self::Column { x };
            x += 1;
        }
        columns
    };

    /// Array containing all blocks (0-5).
    pub const BLOCKS: [Self; SIZE as usize] = {
        let mut blocks = [Self::Block { index: 0 }; SIZE as usize];
        let mut index = 0;
        while index < SIZE {
            blocks[index as usize] = Self::Block { index };
            index += 1;
        }
        blocks
    };

    /// Array containing all 18 houses in row, column, block order.
    pub const ALL: [Self; 3 * SIZE as usize] = {
        let mut all = [Self::Row { y: 0 }; 3 * SIZE as usize];
        let mut i = 0;
        while i < SIZE {
            all[i as usize] = Self::Row { y: i };
            all[(SIZE + i) as usize] = Self::Column { x: i };
            all[(2 * SIZE + i) as usize] = Self::Block { index: i };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-5) into an absolute
    /// [`Position`].
    ///
    /// For blocks, cells are ordered row-major within the block.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-5.
    #[must_use]
    pub const fn position_from_cell_index(self, i: u8) -> Position {
        assert!(i < SIZE);
        match self {
            House::Row { y } => Position::new(i, y),
            House::Column { x } => Position::new(x, i),
            House::Block { index } => Position::from_block(index, i),
        }
    }

    /// Returns all positions contained in this house.
    #[must_use]
    pub const fn positions(self) -> PositionSet {
        match self {
            House::Row { y } => PositionSet::ROW_POSITIONS[y as usize],
            House::Column { x } => PositionSet::COLUMN_POSITIONS[x as usize],
            House::Block { index } => PositionSet::BLOCK_POSITIONS[index as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_house_kind() {
        assert_eq!(House::ALL.len(), 18);
        assert_eq!(&House::ALL[0..6], &House::ROWS);
        assert_eq!(&House::ALL[6..12], &House::COLUMNS);
        assert_eq!(&House::ALL[12..18], &House::BLOCKS);
    }

    #[test]
    fn test_position_from_cell_index() {
        assert_eq!(
            House::Row { y: 2 }.position_from_cell_index(4),
            Position::new(4, 2)
        );
        assert_eq!(
            House::Column { x: 3 }.position_from_cell_index(5),
            Position::new(3, 5)
        );
        // Block 3 is the middle-right block; its cells are row-major
        assert_eq!(
            House::Block { index: 3 }.position_from_cell_index(0),
            Position::new(3, 2)
        );
        assert_eq!(
            House::Block { index: 3 }.position_from_cell_index(5),
            Position::new(5, 3)
        );
    }

    #[test]
    fn test_positions_match_cell_indices() {
        for house in House::ALL {
            let positions = house.positions();
            assert_eq!(positions.len(), 6);
            for i in 0..SIZE {
                assert!(positions.contains(house.position_from_cell_index(i)));
            }
        }
    }
}
