//! Neighbor counting.
//!
//! Runs once after mines are placed and before the first reveal.

use crate::grid::{Grid, MINE_SENTINEL};
use crate::types::Coord;

/// Number of mines among the in-bounds 8-neighborhood of `coord`.
///
/// The cell itself is never counted.
pub fn count_adjacent_mines(grid: &Grid, coord: Coord) -> u8 {
    grid.neighbors(coord)
        .iter()
        .filter(|&&n| grid.get(n).is_some_and(|cell| cell.is_mine))
        .count() as u8
}

/// Store the neighbor-mine count on every cell.
///
/// Mines get [`MINE_SENTINEL`]. Re-running on an unchanged layout produces the
/// same counts.
pub fn compute_neighbor_counts(grid: &mut Grid) {
    let coords: Vec<Coord> = grid.coords().collect();
    for coord in coords {
        let is_mine = grid.get(coord).is_some_and(|cell| cell.is_mine);
        let count = if is_mine {
            MINE_SENTINEL
        } else {
            count_adjacent_mines(grid, coord) as i8
        };
        if let Some(cell) = grid.get_mut(coord) {
            cell.mine_neighbor_count = count;
        }
    }
}
