//! Reproducible puzzle seeds.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rand::Rng as _;

/// The number of bytes in a [`PuzzleSeed`].
pub const SEED_BYTES: usize = 32;

/// A 32-byte seed for the puzzle generator's random number engine.
///
/// Seeds are displayed and parsed as 64 lowercase hexadecimal characters,
/// making every generated puzzle reproducible from its printed seed.
///
/// # Examples
///
/// ```
/// use rokudoku_generator::PuzzleSeed;
///
/// let seed: PuzzleSeed =
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
///         .parse()
///         .unwrap();
/// assert_eq!(
///     seed.to_string(),
///     "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed {
    bytes: [u8; SEED_BYTES],
}

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; SEED_BYTES]) -> Self {
        Self { bytes }
    }

    /// Creates a fresh random seed from the thread-local entropy source.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; SEED_BYTES];
        rand::rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; SEED_BYTES] {
        self.bytes
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseSeedError {
    /// The string did not contain exactly 64 characters.
    #[display("Seed must be 64 hexadecimal characters, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// The string contained a non-hexadecimal character.
    #[display("Invalid character in seed: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
}

impl FromStr for PuzzleSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != SEED_BYTES * 2 {
            return Err(ParseSeedError::InvalidLength(chars.len()));
        }

        let mut bytes = [0; SEED_BYTES];
        for (byte, pair) in bytes.iter_mut().zip(chars.chunks_exact(2)) {
            let hi = hex_value(pair[0])?;
            let lo = hex_value(pair[1])?;
            *byte = hi << 4 | lo;
        }
        Ok(Self { bytes })
    }
}

fn hex_value(c: char) -> Result<u8, ParseSeedError> {
    c.to_digit(16)
        .and_then(|value| u8::try_from(value).ok())
        .ok_or(ParseSeedError::InvalidCharacter(c))
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_parse_display_round_trip() {
        let seed: PuzzleSeed = HEX_SEED.parse().unwrap();
        assert_eq!(seed.to_string(), HEX_SEED);
    }

    #[test]
    fn test_parse_uppercase() {
        let seed: PuzzleSeed = HEX_SEED.to_uppercase().parse().unwrap();
        assert_eq!(seed.to_string(), HEX_SEED);
    }

    #[test]
    fn test_from_bytes_round_trip() {
        let seed: PuzzleSeed = HEX_SEED.parse().unwrap();
        assert_eq!(PuzzleSeed::from_bytes(seed.into_bytes()), seed);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength(3))
        );
        assert_eq!(
            format!("{HEX_SEED}00").parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidLength(66))
        );

        let mut broken = String::from(HEX_SEED);
        broken.replace_range(0..1, "g");
        assert_eq!(
            broken.parse::<PuzzleSeed>(),
            Err(ParseSeedError::InvalidCharacter('g'))
        );
    }

    #[test]
    fn test_random_seeds_differ() {
        assert_ne!(PuzzleSeed::random(), PuzzleSeed::random());
    }
}
