use crate::{
    board::{create_board, flip_around, has_won},
    common::{ConfigError, GameError},
    config::BoardConfig,
    coord::Coord,
    grid::Grid,
};
use rand::Rng;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// At least one light is on.
    Playing,
    /// Every light is off. Terminal for this session.
    Won,
}

/// One game session: the board config and the current grid snapshot.
///
/// Each move swaps in a new snapshot produced by [`flip_around`]; earlier
/// snapshots handed out by [`BoardEngine::snapshot`] are unaffected.
#[derive(Debug, Clone)]
pub struct BoardEngine {
    config: BoardConfig,
    grid: Grid,
    status: GameStatus,
}

impl BoardEngine {
    /// Start a session with a freshly randomized board.
    pub fn new<R: Rng + ?Sized>(config: BoardConfig, rng: &mut R) -> Result<Self, ConfigError> {
        let grid = create_board(&config, rng)?;
        Ok(Self::with_config(config, grid))
    }

    /// Adopt an existing grid, e.g. a hand-built puzzle.
    ///
    /// The stored config takes the grid's dimensions and the default chance,
    /// which only matters for [`BoardEngine::reset`].
    pub fn from_grid(grid: Grid) -> Self {
        let config = BoardConfig::default().with_dimensions(grid.rows(), grid.cols());
        Self::with_config(config, grid)
    }

    fn with_config(config: BoardConfig, grid: Grid) -> Self {
        let status = status_of(&grid);
        Self {
            config,
            grid,
            status,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Borrow the current snapshot for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current snapshot.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Apply a click at `coord` and return the new snapshot.
    ///
    /// Off-board coordinates are accepted and flip only what lies on the
    /// board. Once the game is won every further move is rejected.
    pub fn flip_around(&mut self, coord: Coord) -> Result<&Grid, GameError> {
        if self.is_won() {
            return Err(GameError::AlreadyWon);
        }
        self.grid = flip_around(&self.grid, coord);
        self.status = status_of(&self.grid);
        log::debug!("flipped around {}, {} lit", coord, self.grid.lit_count());
        if self.is_won() {
            log::info!("board solved");
        }
        Ok(&self.grid)
    }

    /// Decode a `"<row>-<col>"` key and apply it as a click.
    pub fn flip_key(&mut self, key: &str) -> Result<&Grid, GameError> {
        let coord: Coord = key.parse()?;
        self.flip_around(coord)
    }

    /// Discard the current board and start over with the stored config.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), ConfigError> {
        let grid = create_board(&self.config, rng)?;
        self.status = status_of(&grid);
        self.grid = grid;
        log::debug!("session reset");
        Ok(())
    }
}

fn status_of(grid: &Grid) -> GameStatus {
    if has_won(grid) {
        GameStatus::Won
    } else {
        GameStatus::Playing
    }
}
