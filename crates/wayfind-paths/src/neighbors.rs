use wayfind_core::{CellId, Grid};

use crate::direction::Direction;

/// Cached adjacency helper.
///
/// Enumerates the traversable neighbors of a cell: in bounds and not a wall.
/// Cardinal neighbors come clockwise from up; diagonal mode interleaves the
/// diagonals in the same clockwise order.
pub struct Neighbors {
    buf: Vec<(CellId, Direction)>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Neighbors of `id` for the given movement mode.
    pub fn resolve(&mut self, id: CellId, grid: &Grid, diagonal: bool) -> &[(CellId, Direction)] {
        if diagonal {
            self.all(id, grid)
        } else {
            self.cardinal(id, grid)
        }
    }

    /// 4-directional neighbors of `id`.
    pub fn cardinal(&mut self, id: CellId, grid: &Grid) -> &[(CellId, Direction)] {
        self.buf.clear();
        for d in Direction::CARDINAL {
            let n = d.step(id);
            if grid.is_passable(n) {
                self.buf.push((n, d));
            }
        }
        &self.buf
    }

    /// 8-directional neighbors of `id`.
    ///
    /// A diagonal step is dropped when either orthogonal cell it slips
    /// between is a wall.
    pub fn all(&mut self, id: CellId, grid: &Grid) -> &[(CellId, Direction)] {
        self.buf.clear();
        for d in Direction::ALL {
            let n = d.step(id);
            if !grid.is_passable(n) {
                continue;
            }
            if d.is_diagonal() {
                let (drow, dcol) = d.delta();
                if grid.is_wall(id.shift(drow, 0)) || grid.is_wall(id.shift(0, dcol)) {
                    continue;
                }
            }
            self.buf.push((n, d));
        }
        &self.buf
    }
}

/// Traversable neighbors of `id` in `grid`.
///
/// Allocating convenience over [`Neighbors`].
pub fn neighbors(id: CellId, grid: &Grid, diagonal: bool) -> Vec<CellId> {
    Neighbors::new()
        .resolve(id, grid, diagonal)
        .iter()
        .map(|&(n, _)| n)
        .collect()
}
