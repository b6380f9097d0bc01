//! Cell coordinates and their `"<row>-<col>"` string keys.

use crate::common::CoordError;
use core::fmt;
use core::str::FromStr;

/// Zero-based `(row, col)` address of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell itself followed by up, down, left and right.
    ///
    /// Neighbors that would fall below zero or past `usize::MAX` are `None`.
    pub fn plus_neighbors(self) -> [Option<Coord>; 5] {
        let Coord { row, col } = self;
        [
            Some(self),
            row.checked_sub(1).map(|r| Coord::new(r, col)),
            row.checked_add(1).map(|r| Coord::new(r, col)),
            col.checked_sub(1).map(|c| Coord::new(row, c)),
            col.checked_add(1).map(|c| Coord::new(row, c)),
        ]
    }

    /// Encode as the host key, e.g. `"2-4"`.
    #[cfg(feature = "std")]
    pub fn key(&self) -> std::string::String {
        std::format!("{}", self)
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

fn parse_part(part: &str) -> Result<usize, CoordError> {
    if part.is_empty() {
        return Err(CoordError::Empty);
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::InvalidDigit);
    }
    if part.len() > 1 && part.starts_with('0') {
        return Err(CoordError::LeadingZero);
    }
    // only digits remain, so the sole failure left is overflow
    part.parse().map_err(|_| CoordError::Overflow)
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once('-').ok_or(CoordError::MissingSeparator)?;
        Ok(Coord::new(parse_part(row)?, parse_part(col)?))
    }
}
