#![cfg(feature = "std")]

//! Text rendering for terminal hosts.

use crate::{game::BoardEngine, grid::Grid};
use std::fmt::Write;
use std::string::String;

/// Message shown in place of the board once every light is off.
pub const WIN_MESSAGE: &str = "you win!";

/// Render `grid` with column numbers across the top and row numbers down the
/// side. Lit cells are `■`, unlit cells `□`.
pub fn render_grid(grid: &Grid) -> String {
    let mut out = String::new();
    let _ = write!(out, "   ");
    for c in 0..grid.cols() {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for (r, row) in grid.iter_rows().enumerate() {
        let _ = write!(out, "{:>2} ", r);
        for &lit in row {
            let _ = write!(out, "  {}", if lit { '■' } else { '□' });
        }
        out.push('\n');
    }
    out
}

/// Render what the host should show for this session: the win message when
/// solved, otherwise the board.
pub fn render_view(engine: &BoardEngine) -> String {
    if engine.is_won() {
        let mut out = String::from(WIN_MESSAGE);
        out.push('\n');
        out
    } else {
        render_grid(engine.grid())
    }
}
