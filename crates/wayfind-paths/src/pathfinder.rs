use wayfind_core::{Bounds, CellId, Grid};

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::neighbors::Neighbors;
use crate::search::Stepper;
use crate::state::{CellState, Pass, StateTable};
use crate::trace::{SearchReport, reconstruct_path};

/// Central coordinator for searches on a grid of fixed size.
///
/// `Pathfinder` owns the forward and reverse [`StateTable`]s and the scratch
/// buffers, so repeated searches reuse their allocations. After a search the
/// tables keep each cell's final g-cost, heading and back-pointer for
/// inspection.
pub struct Pathfinder {
    bounds: Bounds,
    forward: StateTable,
    reverse: StateTable,
    neighbors: Neighbors,
}

impl Pathfinder {
    /// Create a new `Pathfinder` for grids of the given bounds.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            forward: StateTable::new(bounds),
            reverse: StateTable::new(bounds),
            neighbors: Neighbors::new(),
        }
    }

    /// Create a `Pathfinder` sized for `grid`.
    pub fn for_grid(grid: &Grid) -> Self {
        Self::new(grid.bounds())
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Replace the bounds. Both tables are reallocated and their records
    /// dropped; a no-op when the bounds are unchanged.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.forward.set_bounds(bounds);
        self.reverse.set_bounds(bounds);
    }

    /// Records of the last search run in `pass`.
    pub fn table(&self, pass: Pass) -> &StateTable {
        match pass {
            Pass::Forward => &self.forward,
            Pass::Reverse => &self.reverse,
        }
    }

    /// Forward-pass record of `id`.
    pub fn state(&self, id: CellId) -> Option<&CellState> {
        self.forward.get(id)
    }

    /// Path from the origin of the last `pass` run to `goal`.
    ///
    /// For [`Pass::Reverse`] the origin is the target, so the path runs
    /// target to `goal`.
    pub fn reconstruct_path(&self, pass: Pass, goal: CellId) -> Result<Vec<CellId>, SearchError> {
        reconstruct_path(self.table(pass), goal)
    }

    /// Prepare a search that advances one finalized cell at a time.
    ///
    /// Previous search marks on `grid` are cleared first; walls, weights and
    /// endpoint markers are kept.
    pub fn stepper<'a>(
        &'a mut self,
        grid: &'a mut Grid,
        start: CellId,
        target: CellId,
        config: &SearchConfig,
    ) -> Stepper<'a> {
        self.set_bounds(grid.bounds());
        let table = match config.pass {
            Pass::Forward => &mut self.forward,
            Pass::Reverse => &mut self.reverse,
        };
        Stepper::new(grid, table, &mut self.neighbors, start, target, *config)
    }

    /// Run a search to completion.
    pub fn search(
        &mut self,
        grid: &mut Grid,
        start: CellId,
        target: CellId,
        config: &SearchConfig,
    ) -> SearchReport {
        self.stepper(grid, start, target, config).finish()
    }
}

/// Run a single search with a throwaway [`Pathfinder`].
///
/// Use a [`Pathfinder`] directly to inspect per-cell records afterwards.
pub fn search(grid: &mut Grid, start: CellId, target: CellId, config: &SearchConfig) -> SearchReport {
    Pathfinder::for_grid(grid).search(grid, start, target, config)
}
