//! Board square representation and square naming.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::stays_on_board;

/// Errors raised at the square-addressing boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SquareError {
    #[error("square index {0} is outside 0-63")]
    OutOfRange(i32),

    #[error("invalid square name '{0}': expected a1-h8")]
    InvalidName(String),
}

/// A square on the chess board, indexed 0-63.
///
/// Squares are indexed in little-endian rank-file mapping:
/// - a1 = 0, b1 = 1, ..., h1 = 7
/// - a2 = 8, ..., h8 = 63
///
/// `file = index % 8` and `rank = index / 8`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

impl Square {
    /// Creates a square from an index, rejecting anything outside 0-63.
    pub fn new(index: i32) -> Result<Self, SquareError> {
        if (0..64).contains(&index) {
            Ok(Square(index as u8))
        } else {
            Err(SquareError::OutOfRange(index))
        }
    }

    /// Creates a square from an index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from file and rank (both 0-7).
    #[inline]
    pub const fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Parses a square name such as `"e4"`.
    pub fn from_name(name: &str) -> Result<Self, SquareError> {
        let invalid = || SquareError::InvalidName(name.to_string());
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        Self::from_coords(file, rank).ok_or_else(invalid)
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file (0 = a, 7 = h).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Returns the rank (0 = rank 1, 7 = rank 8).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Returns the square `delta` indices away, or `None` if the step leaves
    /// the board or wraps around a rank edge.
    #[inline]
    pub fn offset(self, delta: i8) -> Option<Square> {
        let from = i32::from(self.0);
        let to = from + i32::from(delta);
        if stays_on_board(from, to) {
            Some(Square(to as u8))
        } else {
            None
        }
    }

    /// Returns the square name (e.g. `"e4"`).
    pub fn name(self) -> String {
        let file = (b'a' + self.file()) as char;
        let rank = (b'1' + self.rank()) as char;
        format!("{}{}", file, rank)
    }

    pub const A1: Square = Square(0);
    pub const B1: Square = Square(1);
    pub const C1: Square = Square(2);
    pub const D1: Square = Square(3);
    pub const E1: Square = Square(4);
    pub const F1: Square = Square(5);
    pub const G1: Square = Square(6);
    pub const H1: Square = Square(7);
    pub const A8: Square = Square(56);
    pub const B8: Square = Square(57);
    pub const C8: Square = Square(58);
    pub const D8: Square = Square(59);
    pub const E8: Square = Square(60);
    pub const F8: Square = Square(61);
    pub const G8: Square = Square(62);
    pub const H8: Square = Square(63);
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<i32> for Square {
    type Error = SquareError;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.name())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
