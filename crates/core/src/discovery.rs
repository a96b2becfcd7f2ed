//! Discovery - turning a click into a reveal.

use crate::grid::Grid;
use crate::reveal::reveal;
use crate::types::{Coord, DiscoveryOutcome};

/// Discover the cell under virtual pixel `(pixel_x, pixel_y)`.
///
/// A mine is reported as [`DiscoveryOutcome::MineHit`] without mutating the
/// grid; ending the game is the caller's job.
pub fn discover(grid: &mut Grid, pixel_x: u32, pixel_y: u32) -> DiscoveryOutcome {
    let coord = Coord::from_pixel(pixel_x, pixel_y);
    let Some(cell) = grid.get(coord) else {
        return DiscoveryOutcome::OutOfBounds;
    };

    if cell.is_mine {
        return DiscoveryOutcome::MineHit;
    }
    if cell.is_revealed {
        return DiscoveryOutcome::AlreadyRevealed;
    }

    DiscoveryOutcome::SafeReveal {
        revealed: reveal(grid, coord),
    }
}
