//! Flood-fill reveal.
//!
//! Opening a cell with no neighboring mines opens all of its neighbors, and so
//! on outward until the region is bounded by numbered cells. The traversal uses
//! an explicit worklist, so stack depth does not grow with region size.

use crate::grid::Grid;
use crate::types::Coord;

/// Reveal `start` and everything reachable from it through zero-count cells.
///
/// Returns how many cells were newly revealed. Returns 0 without touching the
/// grid when `start` is out of bounds, already revealed, or a mine. Mines are
/// never opened by the fill.
pub fn reveal(grid: &mut Grid, start: Coord) -> u32 {
    if !is_hidden_safe(grid, start) {
        return 0;
    }

    let mut revealed = 0;
    let mut pending = vec![start];

    while let Some(coord) = pending.pop() {
        let Some(cell) = grid.get_mut(coord) else {
            continue;
        };
        // A cell can be queued by several zero-count neighbors.
        if cell.is_revealed || cell.is_mine {
            continue;
        }
        cell.is_revealed = true;
        revealed += 1;

        if cell.mine_neighbor_count != 0 {
            continue;
        }

        for next in grid.neighbors(coord) {
            if is_hidden_safe(grid, next) {
                pending.push(next);
            }
        }
    }

    revealed
}

fn is_hidden_safe(grid: &Grid, coord: Coord) -> bool {
    grid.get(coord)
        .is_some_and(|cell| !cell.is_revealed && !cell.is_mine)
}
