//! Rectangular grid of lit/unlit cells.
//!
//! A `Grid` is an immutable snapshot from the outside: its dimensions are
//! fixed at construction and only [`crate::board`] may toggle cells, always on
//! a fresh copy. Cells are stored row-major.

use crate::common::GridError;
use crate::config::MAX_CELLS;
use crate::coord::Coord;
use alloc::vec::Vec;
use core::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")
)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create a grid with every cell unlit.
    pub fn unlit(rows: usize, cols: usize) -> Self {
        Self::from_fn(rows, cols, |_| false)
    }

    /// Create a grid by evaluating `f` for every coordinate in row-major order.
    ///
    /// Dimensions are not checked here; [`crate::create_board`] rejects
    /// oversized host-supplied boards before building one.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(Coord) -> bool,
    {
        let mut cells = Vec::with_capacity(rows.saturating_mul(cols).min(MAX_CELLS));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(Coord::new(row, col)));
            }
        }
        Grid { rows, cols, cells }
    }

    /// Build from an array of rows, e.g. `[[false, true], [true, true]]`.
    /// Every row must have the length of the first.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Load from text rows using `#` for lit and `.` for unlit.
    pub fn from_pattern(pattern: &[&str]) -> Result<Self, GridError> {
        let cols = pattern.first().map_or(0, |r| r.len());
        let mut cells = Vec::with_capacity(pattern.len() * cols);
        for (row, line) in pattern.iter().enumerate() {
            if line.len() != cols {
                return Err(GridError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                });
            }
            for (col, b) in line.bytes().enumerate() {
                cells.push(match b {
                    b'#' => true,
                    b'.' => false,
                    _ => return Err(GridError::InvalidPattern { row, col }),
                });
            }
        }
        Ok(Grid {
            rows: pattern.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    #[inline]
    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.cols + coord.col)
    }

    /// State of the cell at `coord`, or `None` when off the board.
    pub fn get(&self, coord: Coord) -> Option<bool> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// `true` if the cell at (row, col) is on the board and lit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        self.get(Coord::new(row, col)).unwrap_or(false)
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterator over the coordinates of lit cells, row-major.
    pub fn iter_lit(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &lit)| lit)
            .map(move |(i, _)| Coord::new(i / cols, i % cols))
    }

    /// Iterator over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        // chunks(0) panics, and a zero-width grid has no cells to yield anyway
        let width = self.cols.max(1);
        self.cells.chunks(width)
    }

    /// Copy out as an array of rows.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    /// Invert one cell. Returns `false` and does nothing when off the board.
    pub(crate) fn toggle(&mut self, coord: Coord) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = !self.cells[i];
                true
            }
            None => false,
        }
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.iter_rows().enumerate() {
            for &lit in row {
                write!(f, "{} ", if lit { '■' } else { '□' })?;
            }
            if r + 1 < self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}x{}>:", self.rows, self.cols)?;
        for row in self.iter_rows() {
            for &lit in row {
                write!(f, "{}", if lit { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
