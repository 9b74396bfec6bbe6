// grid.rs - Cell, live-set and bounds types for Conway's Game of Life

use rand::Rng;
use std::collections::HashSet;

/// Offsets of the 8 Moore-neighborhood positions around a cell.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];

/// A grid position. Plain value, compared and hashed by coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position shifted by `(dx, dy)`, or `None` if it leaves the `i32` range.
    pub fn offset(self, dx: i32, dy: i32) -> Option<Cell> {
        Some(Cell::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    /// The (up to) 8 surrounding positions. Not bounds-filtered.
    pub fn neighbors(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Cells currently alive.
pub type LiveSet = HashSet<Cell>;

/// Fixed width x height rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridBounds {
    pub width: i32,
    pub height: i32,
}

impl GridBounds {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Number of in-bounds cells; zero for non-positive dimensions.
    pub fn area(&self) -> usize {
        self.width.max(0) as usize * self.height.max(0) as usize
    }

    /// Every in-bounds cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Cell::new(x, y)))
    }
}

/// Include each in-bounds cell independently with probability `density`.
pub fn random_fill<R: Rng + ?Sized>(bounds: GridBounds, density: f64, rng: &mut R) -> LiveSet {
    bounds
        .cells()
        .filter(|_| rng.random::<f64>() < density)
        .collect()
}

/// Drop every cell outside `bounds`. Returns the kept set and how many were dropped.
pub fn clip_to_bounds(cells: LiveSet, bounds: GridBounds) -> (LiveSet, usize) {
    let before = cells.len();
    let kept: LiveSet = cells.into_iter().filter(|&c| bounds.contains(c)).collect();
    let dropped = before - kept.len();
    (kept, dropped)
}
