//! Configuration errors.

use std::fmt;

/// Rejected game configuration.
///
/// These are caught at startup (or on restart) before any grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A grid needs at least one safe cell, so mines must be fewer than cells.
    TooManyMines { mines: usize, cells: usize },
    /// Width or height is zero.
    EmptyGrid,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TooManyMines { mines, cells } => write!(
                f,
                "cannot place {} mines on a grid of {} cells (need at least one safe cell)",
                mines, cells
            ),
            ConfigError::EmptyGrid => write!(f, "grid must have at least one cell"),
        }
    }
}

impl std::error::Error for ConfigError {}
