//! Grid module - the minefield
//!
//! The grid is a `width x height` matrix of [`Cell`]s stored as a flat vector in
//! row-major order (`y * width + x`). Every lookup goes through a checked index,
//! so an out-of-bounds coordinate yields `None` instead of touching memory.

use arrayvec::ArrayVec;

use crate::types::Coord;

/// Neighbor count stored on mine cells.
pub const MINE_SENTINEL: i8 = -1;

/// The eight surrounding offsets. `(0, 0)` is deliberately absent.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A single square of the minefield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    /// Mines among the 8 neighbors, or [`MINE_SENTINEL`] for a mine.
    pub mine_neighbor_count: i8,
}

/// Fixed-size minefield.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell hidden, mine-free and zero-counted.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    /// Build a grid with mines at the given coordinates.
    ///
    /// Out-of-bounds and repeated coordinates are ignored. Neighbor counts are
    /// left at zero; run [`compute_neighbor_counts`](crate::compute_neighbor_counts)
    /// afterwards.
    pub fn from_mines(width: u16, height: u16, mines: &[Coord]) -> Self {
        let mut grid = Self::new(width, height);
        for &coord in mines {
            if let Some(cell) = grid.get_mut(coord) {
                cell.is_mine = true;
            }
        }
        grid
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.x >= self.width || coord.y >= self.height {
            return None;
        }
        Some((coord.y as usize) * (self.width as usize) + (coord.x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        self.index(coord).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        let i = self.index(coord)?;
        Some(&mut self.cells[i])
    }

    /// In-bounds neighbors of `coord`, never including `coord` itself.
    ///
    /// Corners have 3 neighbors, edges 5, interior cells 8. Offsets that would
    /// leave the grid are skipped rather than wrapped.
    pub fn neighbors(&self, coord: Coord) -> ArrayVec<Coord, 8> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| coord.offset(dx, dy))
            .filter(|&n| self.contains(n))
            .collect()
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    pub fn mine_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_mine).count()
    }

    pub fn revealed_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_revealed).count()
    }

    /// Reveal every cell, mines included. Used once the game has ended.
    pub fn reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.is_revealed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_default_initialized() {
        let grid = Grid::new(10, 10);
        assert_eq!(grid.len(), 100);
        assert!(grid.cells().iter().all(|c| *c == Cell::default()));
        assert_eq!(grid.mine_count(), 0);
        assert_eq!(grid.revealed_cells(), 0);
    }

    #[test]
    fn index_is_row_major_and_bounds_checked() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.index(Coord::new(0, 0)), Some(0));
        assert_eq!(grid.index(Coord::new(3, 0)), Some(3));
        assert_eq!(grid.index(Coord::new(0, 1)), Some(4));
        assert_eq!(grid.index(Coord::new(3, 2)), Some(11));
        assert_eq!(grid.index(Coord::new(4, 0)), None);
        assert_eq!(grid.index(Coord::new(0, 3)), None);
        assert!(grid.get(Coord::new(9, 9)).is_none());
    }

    #[test]
    fn neighbors_exclude_self_and_clip_at_edges() {
        let grid = Grid::new(10, 10);

        let corner = grid.neighbors(Coord::new(0, 0));
        assert_eq!(corner.len(), 3);
        assert!(!corner.contains(&Coord::new(0, 0)));

        assert_eq!(grid.neighbors(Coord::new(9, 9)).len(), 3);
        assert_eq!(grid.neighbors(Coord::new(5, 0)).len(), 5);
        assert_eq!(grid.neighbors(Coord::new(0, 5)).len(), 5);

        let interior = grid.neighbors(Coord::new(4, 4));
        assert_eq!(interior.len(), 8);
        assert!(!interior.contains(&Coord::new(4, 4)));
    }

    #[test]
    fn neighbors_do_not_wrap_around() {
        let grid = Grid::new(10, 10);
        let right_edge = grid.neighbors(Coord::new(9, 4));
        assert!(right_edge.iter().all(|c| c.x >= 8));
    }

    #[test]
    fn from_mines_ignores_duplicates_and_out_of_bounds() {
        let grid = Grid::from_mines(
            5,
            5,
            &[Coord::new(1, 1), Coord::new(1, 1), Coord::new(7, 0)],
        );
        assert_eq!(grid.mine_count(), 1);
        assert!(grid.get(Coord::new(1, 1)).unwrap().is_mine);
    }

    #[test]
    fn reveal_all_opens_every_cell() {
        let mut grid = Grid::from_mines(3, 3, &[Coord::new(2, 2)]);
        grid.reveal_all();
        assert_eq!(grid.revealed_cells(), 9);
    }

    #[test]
    fn coords_cover_grid_in_row_major_order() {
        let grid = Grid::new(3, 2);
        let coords: Vec<_> = grid.coords().collect();
        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[2], Coord::new(2, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
    }
}
