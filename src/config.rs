//! Board configuration supplied by the host at session start.

use crate::common::ConfigError;

pub const DEFAULT_ROWS: usize = 5;
pub const DEFAULT_COLS: usize = 5;
pub const DEFAULT_CHANCE_LIGHT_STARTS_ON: f64 = 0.25;
/// Upper bound on `rows * cols` for a generated board.
pub const MAX_CELLS: usize = 1 << 24;

/// Dimensions and initial lit probability for a new board.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that any single cell starts lit.
    pub chance_light_starts_on: f64,
}

impl BoardConfig {
    pub const fn new(rows: usize, cols: usize, chance_light_starts_on: f64) -> Self {
        Self {
            rows,
            cols,
            chance_light_starts_on,
        }
    }

    pub const fn with_dimensions(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    pub const fn with_chance(mut self, chance_light_starts_on: f64) -> Self {
        self.chance_light_starts_on = chance_light_starts_on;
        self
    }

    /// Check the dimensions are positive, their product is at most
    /// [`MAX_CELLS`], and the chance lies in `[0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        match self.rows.checked_mul(self.cols) {
            Some(cells) if cells <= MAX_CELLS => {}
            _ => {
                return Err(ConfigError::TooLarge {
                    rows: self.rows,
                    cols: self.cols,
                })
            }
        }
        // NaN fails `contains` as well
        if !(0.0..=1.0).contains(&self.chance_light_starts_on) {
            return Err(ConfigError::InvalidProbability(self.chance_light_starts_on));
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_CHANCE_LIGHT_STARTS_ON)
    }
}
