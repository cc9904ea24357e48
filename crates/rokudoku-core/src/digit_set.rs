//! A set of digits 1-6, represented as a bitset.

use std::{
    fmt::{self, Debug},
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

use crate::Digit;

/// A set of digits 1-6, represented as a bitset.
///
/// The implementation uses a single byte where bits 0-5 represent digits 1-6
/// respectively, providing compact storage and fast set operations. This is
/// the natural representation for "which digits already appear in this house"
/// style queries.
///
/// # Examples
///
/// ```
/// use rokudoku_core::{Digit, DigitSet};
///
/// let mut set = DigitSet::new();
/// set.insert(Digit::D1);
/// set.insert(Digit::D5);
///
/// assert_eq!(set.len(), 2);
/// assert!(set.contains(Digit::D5));
/// assert!(!set.contains(Digit::D3));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DigitSet {
    bits: u8,
}

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The set containing all six digits.
    pub const FULL: Self = Self { bits: 0b11_1111 };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u8 {
        1 << (digit.value() - 1)
    }

    /// Returns `true` if the set contains the digit.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the digits in the set, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::{Digit, DigitSet};
    ///
    /// let set = DigitSet::from_iter([Digit::D5, Digit::D2]);
    /// let digits: Vec<_> = set.iter().collect();
    /// assert_eq!(digits, vec![Digit::D2, Digit::D5]);
    /// ```
    #[must_use]
    pub const fn iter(self) -> DigitSetIter {
        DigitSetIter { bits: self.bits }
    }
}

impl Debug for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl BitOr for DigitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitAnd for DigitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Digit>,
    {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = DigitSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the digits in a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct DigitSetIter {
    bits: u8,
}

impl Iterator for DigitSetIter {
    type Item = Digit;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Digit::from_value(index + 1))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DigitSetIter {}
impl FusedIterator for DigitSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_remove_contains() {
        let mut set = DigitSet::new();
        assert!(set.is_empty());

        set.insert(Digit::D1);
        set.insert(Digit::D6);
        assert!(set.contains(Digit::D1));
        assert!(set.contains(Digit::D6));
        assert!(!set.contains(Digit::D3));
        assert_eq!(set.len(), 2);

        set.remove(Digit::D1);
        assert!(!set.contains(Digit::D1));
        assert_eq!(set.len(), 1);

        // Removing an absent digit is a no-op
        set.remove(Digit::D1);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_constants() {
        assert_eq!(DigitSet::EMPTY.len(), 0);
        assert_eq!(DigitSet::FULL.len(), 6);
        for digit in Digit::ALL {
            assert!(DigitSet::FULL.contains(digit));
        }
    }

    #[test]
    fn test_iteration_order() {
        let set = DigitSet::from_iter([Digit::D6, Digit::D1, Digit::D4]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![Digit::D1, Digit::D4, Digit::D6]);
    }

    #[test]
    fn test_full_from_all_digits() {
        let set: DigitSet = Digit::ALL.into_iter().collect();
        assert_eq!(set, DigitSet::FULL);
    }

    #[test]
    fn test_operations() {
        let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
        let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);

        assert_eq!((a | b).len(), 4);
        assert_eq!((a & b).len(), 2);
    }
}
