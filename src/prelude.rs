//! Commonly used types and utilities for ease of import.

pub use crate::{
    create_board, flip_around, has_won, BoardConfig, BoardEngine, Coord, GameStatus, Grid,
};

#[cfg(feature = "std")]
pub use crate::{render_grid, render_view, run_session};
