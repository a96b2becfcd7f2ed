//! Mine placement.
//!
//! Mines are drawn uniformly at random from all cells without replacement, so a
//! layout never contains the same coordinate twice.

use rand::seq::index;
use rand::Rng;

use crate::error::ConfigError;
use crate::grid::Grid;

/// Place `count` mines on distinct random cells of `grid`.
///
/// Fails without touching the grid when `count` would leave no safe cell.
pub fn place_mines<R: Rng + ?Sized>(
    grid: &mut Grid,
    count: usize,
    rng: &mut R,
) -> Result<(), ConfigError> {
    let cells = grid.len();
    if cells == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    if count >= cells {
        return Err(ConfigError::TooManyMines {
            mines: count,
            cells,
        });
    }

    let slots = grid.cells_mut();
    for i in index::sample(rng, cells, count) {
        slots[i].is_mine = true;
    }
    Ok(())
}
