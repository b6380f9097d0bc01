//! Common error types for Lights Out: configuration, coordinate keys, grids
//! and session moves.

use core::fmt;

/// Errors returned when a board configuration is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Rows and columns must both be at least 1.
    InvalidDimensions { rows: usize, cols: usize },
    /// `rows * cols` overflows or exceeds [`crate::MAX_CELLS`].
    TooLarge { rows: usize, cols: usize },
    /// Chance a light starts on must lie in `[0, 1]`.
    InvalidProbability(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidDimensions { rows, cols } => {
                write!(f, "Invalid board dimensions {}x{}: both must be at least 1", rows, cols)
            }
            ConfigError::TooLarge { rows, cols } => {
                write!(f, "Board {}x{} is too large: at most {} cells", rows, cols, crate::MAX_CELLS)
            }
            ConfigError::InvalidProbability(p) => {
                write!(f, "Invalid chance a light starts on: {} is outside [0, 1]", p)
            }
        }
    }
}

/// Errors returned when decoding a `"<row>-<col>"` coordinate key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordError {
    /// No `-` between the row and column.
    MissingSeparator,
    /// Row or column part is empty.
    Empty,
    /// A character other than an ASCII digit (signs included).
    InvalidDigit,
    /// Multi-digit number starting with `0`.
    LeadingZero,
    /// Number does not fit in `usize`.
    Overflow,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::MissingSeparator => write!(f, "Coordinate must look like <row>-<col>"),
            CoordError::Empty => write!(f, "Coordinate has an empty row or column"),
            CoordError::InvalidDigit => write!(f, "Coordinate may only contain decimal digits"),
            CoordError::LeadingZero => write!(f, "Coordinate numbers may not have leading zeros"),
            CoordError::Overflow => write!(f, "Coordinate number is too large"),
        }
    }
}

/// Errors returned when building a grid from raw rows or a text pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row `row` has `found` cells where `expected` were required.
    Ragged { row: usize, expected: usize, found: usize },
    /// Pattern character other than `#` or `.`.
    InvalidPattern { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::Ragged { row, expected, found } => {
                write!(f, "Row {} has {} cells, expected {}", row, found, expected)
            }
            GridError::InvalidPattern { row, col } => {
                write!(f, "Pattern may only contain '#' or '.' (row {}, col {})", row, col)
            }
        }
    }
}

/// Errors returned by [`crate::BoardEngine`] moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The board is already solved; start a new session to keep playing.
    AlreadyWon,
    /// The move key could not be decoded.
    InvalidCoord(CoordError),
}

impl From<CoordError> for GameError {
    fn from(err: CoordError) -> Self {
        GameError::InvalidCoord(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AlreadyWon => write!(f, "The board is already solved"),
            GameError::InvalidCoord(e) => write!(f, "Invalid coordinate: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
#[cfg(feature = "std")]
impl std::error::Error for CoordError {}
#[cfg(feature = "std")]
impl std::error::Error for GridError {}
#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::InvalidCoord(e) => Some(e),
            GameError::AlreadyWon => None,
        }
    }
}
