//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds the Minesweeper rules. It has no dependencies on terminal
//! I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same layout
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: usable from the terminal frontend or headless
//!
//! # Module Structure
//!
//! - [`grid`]: cells and the bounds-checked grid
//! - [`mines`]: uniform mine placement without replacement
//! - [`neighbors`]: neighbor-mine counting
//! - [`reveal`]: iterative flood-fill reveal
//! - [`discovery`]: pixel click to reveal or mine hit
//! - [`game`]: session state and the `Playing -> Won | Lost` machine
//! - [`snapshot`]: render-ready view of a game
//!
//! # Example
//!
//! ```
//! use tui_mines_core::{Game, GameConfig, Grid};
//! use tui_mines_core::types::{Coord, DiscoveryOutcome, Phase};
//!
//! // One mine in the bottom-right corner of a 4x4 grid.
//! let grid = Grid::from_mines(4, 4, &[Coord::new(3, 3)]);
//! let mut game = Game::from_grid(grid).unwrap();
//!
//! // Clicking the top-left block opens every safe cell.
//! assert_eq!(
//!     game.discover(0, 0),
//!     Some(DiscoveryOutcome::SafeReveal { revealed: 15 })
//! );
//! assert_eq!(game.phase(), Phase::Won);
//!
//! // Random layouts come from a seed.
//! let game = Game::new(GameConfig::default(), 42).unwrap();
//! assert_eq!(game.grid().mine_count(), 10);
//! ```

pub mod discovery;
pub mod error;
pub mod game;
pub mod grid;
pub mod mines;
pub mod neighbors;
pub mod reveal;
pub mod snapshot;

pub use tui_mines_types as types;

pub use discovery::discover;
pub use error::ConfigError;
pub use game::{Game, GameConfig};
pub use grid::{Cell, Grid, MINE_SENTINEL};
pub use mines::place_mines;
pub use neighbors::{compute_neighbor_counts, count_adjacent_mines};
pub use reveal::reveal;
pub use snapshot::{CellView, GameSnapshot};
