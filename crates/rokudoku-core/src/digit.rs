//! Rokudoku digit representation.

use std::fmt::{self, Display};

/// A digit in the range 1-6.
///
/// This enum provides type-safe representation of puzzle digits, preventing
/// invalid values at compile time. Each variant corresponds to exactly one
/// digit value.
///
/// # Examples
///
/// ```
/// use rokudoku_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(4);
/// assert_eq!(digit, Digit::D4);
///
/// // Iterate over all digits
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
}

impl Digit {
    /// Array containing all digits from 1 to 6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// assert_eq!(Digit::ALL.len(), 6);
    /// assert_eq!(Digit::ALL[0], Digit::D1);
    /// assert_eq!(Digit::ALL[5], Digit::D6);
    /// ```
    pub const ALL: [Self; 6] = [Self::D1, Self::D2, Self::D3, Self::D4, Self::D5, Self::D6];

    /// Creates a digit from a u8 value in the range 1-6.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-6.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// let digit = Digit::from_value(5);
    /// assert_eq!(digit, Digit::D5);
    /// ```
    ///
    /// ```should_panic
    /// use rokudoku_core::Digit;
    ///
    /// // This will panic
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value)
            .unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` if the value is not
    /// in the range 1-6.
    ///
    /// This is the checked counterpart of [`from_value`](Self::from_value),
    /// intended for filtering untrusted input such as parsed text.
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// assert_eq!(Digit::try_from_value(3), Some(Digit::D3));
    /// assert_eq!(Digit::try_from_value(0), None);
    /// assert_eq!(Digit::try_from_value(7), None);
    /// ```
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            _ => None,
        }
    }

    /// Returns the numeric value of this digit (1-6).
    ///
    /// # Examples
    ///
    /// ```
    /// use rokudoku_core::Digit;
    ///
    /// assert_eq!(Digit::D1.value(), 1);
    /// assert_eq!(Digit::D6.value(), 6);
    /// ```
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        // from_value and value() round-trip for boundary values
        assert_eq!(Digit::from_value(1), Digit::D1);
        assert_eq!(Digit::from_value(6), Digit::D6);
        assert_eq!(Digit::D1.value(), 1);
        assert_eq!(Digit::D6.value(), 6);

        // ALL constant contains all 6 digits in order
        assert_eq!(Digit::ALL.len(), 6);
        assert_eq!(Digit::ALL[0], Digit::D1);
        assert_eq!(Digit::ALL[5], Digit::D6);

        // from_value/value round-trip for all digits
        for digit in Digit::ALL {
            let value = digit.value();
            assert_eq!(Digit::from_value(value), digit);
        }

        // Display trait
        assert_eq!(format!("{}", Digit::D1), "1");
        assert_eq!(format!("{}", Digit::D6), "6");

        // From<Digit> for u8
        let value: u8 = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_value() {
        assert_eq!(Digit::try_from_value(0), None);
        assert_eq!(Digit::try_from_value(7), None);
        for digit in Digit::ALL {
            assert_eq!(Digit::try_from_value(digit.value()), Some(digit));
        }
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 0")]
    fn test_from_value_zero_panics() {
        let _ = Digit::from_value(0);
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 7")]
    fn test_from_value_seven_panics() {
        let _ = Digit::from_value(7);
    }
}
