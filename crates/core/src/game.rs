//! Game module - one Minesweeper session
//!
//! Ties together the grid, mine placement, neighbor counting and discovery, and
//! tracks the `Playing -> Won | Lost` state machine.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::error::ConfigError;
use crate::grid::Grid;
use crate::snapshot::{CellView, GameSnapshot};
use crate::types::{DiscoveryOutcome, Phase, GRID_HEIGHT, GRID_WIDTH, MINE_COUNT};
use crate::{compute_neighbor_counts, discover, place_mines};

/// Grid size and mine count for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub mines: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            mines: MINE_COUNT,
        }
    }
}

impl GameConfig {
    pub fn cells(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Cells that must be revealed to win.
    pub fn safe_cells(&self) -> usize {
        self.cells().saturating_sub(self.mines)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cells() == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.mines >= self.cells() {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells: self.cells(),
            });
        }
        Ok(())
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    grid: Grid,
    rng: StdRng,
    seed: u64,
    /// Cells opened by discoveries; a win once it reaches `safe_cells`.
    revealed_count: u32,
    phase: Phase,
    /// Set on the terminal transition, cleared by `take_finished`.
    finished: Option<Phase>,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl Game {
    /// Create a new game with randomly placed mines.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let grid = build_grid(config, &mut rng)?;
        info!(
            seed,
            width = config.width,
            height = config.height,
            mines = config.mines,
            "new game"
        );
        Ok(Self {
            config,
            grid,
            rng,
            seed,
            revealed_count: 0,
            phase: Phase::Playing,
            finished: None,
            episode_id: 0,
        })
    }

    /// Create a game from a prepared layout.
    ///
    /// Neighbor counts are recomputed from the grid's mines. Restarting such a
    /// game switches to random layouts seeded with 0.
    pub fn from_grid(mut grid: Grid) -> Result<Self, ConfigError> {
        let config = GameConfig {
            width: grid.width(),
            height: grid.height(),
            mines: grid.mine_count(),
        };
        config.validate()?;
        compute_neighbor_counts(&mut grid);
        Ok(Self {
            config,
            grid,
            rng: StdRng::seed_from_u64(0),
            seed: 0,
            revealed_count: 0,
            phase: Phase::Playing,
            finished: None,
            episode_id: 0,
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn revealed_count(&self) -> u32 {
        self.revealed_count
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    /// Discover the cell under virtual pixel `(pixel_x, pixel_y)`.
    ///
    /// Returns `None` once the game has ended. A mine hit ends the game as a
    /// loss and reveals the whole grid; opening the last safe cell ends it as
    /// a win.
    pub fn discover(&mut self, pixel_x: u32, pixel_y: u32) -> Option<DiscoveryOutcome> {
        if self.phase.is_finished() {
            return None;
        }

        let outcome = discover(&mut self.grid, pixel_x, pixel_y);
        debug!(pixel_x, pixel_y, ?outcome, "discover");

        match outcome {
            DiscoveryOutcome::MineHit => {
                self.grid.reveal_all();
                self.finish(Phase::Lost);
            }
            DiscoveryOutcome::SafeReveal { revealed } => {
                self.revealed_count += revealed;
                if self.revealed_count as usize == self.config.safe_cells() {
                    // Show the mines on the final board; the count stays exact.
                    self.grid.reveal_all();
                    self.finish(Phase::Won);
                }
            }
            DiscoveryOutcome::AlreadyRevealed | DiscoveryOutcome::OutOfBounds => {}
        }

        Some(outcome)
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.finished = Some(phase);
        info!(
            phase = phase.as_str(),
            revealed = self.revealed_count,
            episode = self.episode_id,
            "game over"
        );
    }

    /// Take the terminal phase, once, right after the game ends.
    pub fn take_finished(&mut self) -> Option<Phase> {
        self.finished.take()
    }

    /// Replace the grid with a fresh random layout and start over.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.grid = build_grid(self.config, &mut self.rng)?;
        self.revealed_count = 0;
        self.phase = Phase::Playing;
        self.finished = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        info!(episode = self.episode_id, "restart");
        Ok(())
    }

    /// Write a render-ready view of the game into `out`, reusing its storage.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        out.cells.clear();
        out.cells.extend(self.grid.cells().iter().map(CellView::from));
        out.phase = self.phase;
        out.revealed = self.revealed_count;
        out.safe_cells = self.config.safe_cells() as u32;
        out.mines = self.config.mines as u32;
        out.seed = self.seed;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

fn build_grid(config: GameConfig, rng: &mut StdRng) -> Result<Grid, ConfigError> {
    if let Err(err) = config.validate() {
        warn!(%err, "rejected game config");
        return Err(err);
    }
    let mut grid = Grid::new(config.width, config.height);
    place_mines(&mut grid, config.mines, rng)?;
    compute_neighbor_counts(&mut grid);
    debug!(mines = grid.mine_count(), "mines placed");
    Ok(grid)
}
