#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod board;
mod common;
mod config;
mod coord;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use board::{create_board, flip_around, has_won};
pub use common::*;
pub use config::*;
pub use coord::Coord;
pub use game::{BoardEngine, GameStatus};
pub use grid::Grid;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use session::run_session;
#[cfg(feature = "std")]
pub use ui::{render_grid, render_view, WIN_MESSAGE};
