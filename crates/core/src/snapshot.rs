use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Cell;
use crate::types::Phase;

/// What the player may see of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellView {
    Hidden,
    Mine,
    /// Revealed safe cell with its neighbor-mine count.
    Clear(u8),
}

impl From<&Cell> for CellView {
    fn from(cell: &Cell) -> Self {
        match (cell.is_revealed, cell.is_mine) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Mine,
            (true, false) => CellView::Clear(cell.mine_neighbor_count.max(0) as u8),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major, `width * height` entries.
    pub cells: Vec<CellView>,
    pub phase: Phase,
    pub revealed: u32,
    pub safe_cells: u32,
    pub mines: u32,
    pub seed: u64,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn get(&self, x: u16, y: u16) -> Option<CellView> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells
            .get((y as usize) * (self.width as usize) + (x as usize))
            .copied()
    }

    pub fn playable(&self) -> bool {
        !self.phase.is_finished()
    }

    /// Stable hash of everything visible, for skipping redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            phase: Phase::Playing,
            revealed: 0,
            safe_cells: 0,
            mines: 0,
            seed: 0,
            episode_id: 0,
        }
    }
}
