//! The [`Grid`] type: a fixed-size 2D collection of [`Cell`]s.
//!
//! Dimensions are fixed at construction. Walls and weights are authored
//! between searches; a search only moves passable cells through
//! `Unvisited → Visited → ShortestPath`.

use crate::cell::{Cell, CellStatus};
use crate::geom::{Bounds, CellId};

/// What [`Grid::reset`] keeps.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetMode {
    pub keep_walls: bool,
    pub keep_weights: bool,
    pub keep_endpoints: bool,
}

impl ResetMode {
    /// Clear only the results of the last search.
    pub const CLEAR_PATH: Self = Self {
        keep_walls: true,
        keep_weights: true,
        keep_endpoints: true,
    };

    /// Return every cell to its default.
    pub const CLEAR_ALL: Self = Self {
        keep_walls: false,
        keep_weights: false,
        keep_endpoints: false,
    };
}

impl Default for ResetMode {
    fn default() -> Self {
        Self::CLEAR_PATH
    }
}

/// A rectangular grid of cells addressed by [`CellId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid of the given dimensions, filled with default cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            bounds,
            cells: vec![Cell::default(); bounds.len()],
        }
    }

    /// The grid dimensions.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the grid contains the given cell.
    #[inline]
    pub fn contains(&self, id: CellId) -> bool {
        self.bounds.contains(id)
    }

    /// Flat index of `id`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, id: CellId) -> Option<usize> {
        self.bounds.index(id)
    }

    /// Get the cell at `id`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, id: CellId) -> Option<Cell> {
        self.index(id).map(|i| self.cells[i])
    }

    /// Set the cell at `id`. Does nothing if out of bounds.
    pub fn set(&mut self, id: CellId, cell: Cell) {
        if let Some(i) = self.index(id) {
            self.cells[i] = cell;
        }
    }

    /// Status at `id`, or `None` if out of bounds.
    #[inline]
    pub fn status(&self, id: CellId) -> Option<CellStatus> {
        self.at(id).map(|c| c.status)
    }

    /// Set the status at `id`. Does nothing if out of bounds.
    pub fn set_status(&mut self, id: CellId, status: CellStatus) {
        if let Some(i) = self.index(id) {
            self.cells[i].status = status;
        }
    }

    /// Weight at `id`; zero when out of bounds.
    #[inline]
    pub fn weight(&self, id: CellId) -> u32 {
        self.at(id).map_or(0, |c| c.weight)
    }

    /// Set the weight at `id`. Does nothing if out of bounds.
    pub fn set_weight(&mut self, id: CellId, weight: u32) {
        if let Some(i) = self.index(id) {
            self.cells[i].weight = weight;
        }
    }

    /// Whether `id` is inside the grid and a wall.
    #[inline]
    pub fn is_wall(&self, id: CellId) -> bool {
        self.at(id).is_some_and(Cell::is_wall)
    }

    /// Whether `id` is inside the grid and not a wall.
    #[inline]
    pub fn is_passable(&self, id: CellId) -> bool {
        self.at(id).is_some_and(|c| c.status.is_passable())
    }

    /// Turn every cell of row `row` into a wall.
    pub fn wall_row(&mut self, row: i32) {
        for col in 0..self.cols() {
            self.set_status(CellId::new(row, col), CellStatus::Wall);
        }
    }

    /// Turn every cell of column `col` into a wall.
    pub fn wall_col(&mut self, col: i32) {
        for row in 0..self.rows() {
            self.set_status(CellId::new(row, col), CellStatus::Wall);
        }
    }

    /// Mark an unvisited cell as visited. Returns whether the status changed.
    ///
    /// Start, target and wall markers are left untouched.
    pub fn mark_visited(&mut self, id: CellId) -> bool {
        match self.index(id) {
            Some(i) if self.cells[i].status == CellStatus::Unvisited => {
                self.cells[i].status = CellStatus::Visited;
                true
            }
            _ => false,
        }
    }

    /// Mark a visited cell as part of the shortest path. Returns whether the
    /// status changed.
    pub fn mark_shortest_path(&mut self, id: CellId) -> bool {
        match self.index(id) {
            Some(i) if self.cells[i].status == CellStatus::Visited => {
                self.cells[i].status = CellStatus::ShortestPath;
                true
            }
            _ => false,
        }
    }

    /// Reset cells for another run.
    pub fn reset(&mut self, mode: ResetMode) {
        for cell in self.cells.iter_mut() {
            let status = match cell.status {
                CellStatus::Wall if mode.keep_walls => CellStatus::Wall,
                s @ (CellStatus::Start | CellStatus::Target) if mode.keep_endpoints => s,
                _ => CellStatus::Unvisited,
            };
            cell.status = status;
            if !mode.keep_weights {
                cell.weight = 0;
            }
        }
    }

    /// Count how many cells have the given status.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|c| c.status == status).count()
    }

    /// Iterate over `(id, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Render the grid as text, one line per row.
    ///
    /// `#` wall, `S` start, `T` target, `*` visited, `o` shortest path,
    /// `1`–`9` weighted (saturating at 9), `.` open.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.len() + self.rows().max(0) as usize);
        for (id, cell) in self.iter() {
            if id.col == 0 && id.row > 0 {
                out.push('\n');
            }
            out.push(glyph(cell));
        }
        out
    }
}

fn glyph(cell: Cell) -> char {
    match cell.status {
        CellStatus::Wall => '#',
        CellStatus::Start => 'S',
        CellStatus::Target => 'T',
        CellStatus::Visited => '*',
        CellStatus::ShortestPath => 'o',
        CellStatus::Unvisited if cell.weight > 0 => {
            char::from_digit(cell.weight.min(9), 10).unwrap_or('9')
        }
        CellStatus::Unvisited => '.',
    }
}
