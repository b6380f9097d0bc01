//! Board rules: random creation, the plus-shaped flip and the win check.
//!
//! All three are pure functions over [`Grid`] values. `flip_around` never
//! touches its input; it returns a new snapshot.

use crate::common::ConfigError;
use crate::config::BoardConfig;
use crate::coord::Coord;
use crate::grid::Grid;
use rand::Rng;

/// Create a `rows × cols` board where each cell is lit independently with
/// probability `chance_light_starts_on`.
///
/// One uniform draw in `[0, 1)` is consumed per cell, row-major; the cell is
/// lit iff the draw is below the chance. The config is validated before any
/// randomness is consumed.
pub fn create_board<R: Rng + ?Sized>(
    config: &BoardConfig,
    rng: &mut R,
) -> Result<Grid, ConfigError> {
    config.validate()?;
    let p = config.chance_light_starts_on;
    let grid = Grid::from_fn(config.rows, config.cols, |_| rng.random::<f64>() < p);
    log::debug!(
        "created {}x{} board with {} lit cells (p={})",
        config.rows,
        config.cols,
        grid.lit_count(),
        p
    );
    Ok(grid)
}

/// Returns `true` when every light is off.
///
/// Vacuously `true` for a grid with no cells.
pub fn has_won(grid: &Grid) -> bool {
    grid.iter_lit().next().is_none()
}

/// Flip the cell at `coord` and its up, down, left and right neighbors.
///
/// Cells off the board are skipped, so edges flip four cells and corners
/// three. An off-board `coord` still flips whichever neighbors are on the
/// board.
pub fn flip_around(grid: &Grid, coord: Coord) -> Grid {
    let mut next = grid.clone();
    for c in coord.plus_neighbors().into_iter().flatten() {
        next.toggle(c);
    }
    next
}
