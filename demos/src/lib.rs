//! Shared scenario setup for the wayfind demo.

use rand::{RngExt, SeedableRng};
use wayfind_core::{CellId, CellStatus, Grid};
use wayfind_paths::{Pathfinder, SearchConfig, SearchReport, Variant};

pub const ROWS: i32 = 16;
pub const COLS: i32 = 40;

/// A randomly furnished grid with its endpoints.
pub struct Scenario {
    pub grid: Grid,
    pub start: CellId,
    pub target: CellId,
}

impl Scenario {
    /// Build a scenario from `seed`. Roughly one cell in five becomes a wall
    /// and one in ten gets a weight in `2..=9`; the endpoints stay open.
    pub fn generate(seed: u64) -> Self {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut grid = Grid::new(ROWS, COLS);
        let start = CellId::new(ROWS / 2, 1);
        let target = CellId::new(ROWS / 2, COLS - 2);

        for id in grid.bounds() {
            if id == start || id == target {
                continue;
            }
            match rng.random_range(0..10u32) {
                0 | 1 => grid.set_status(id, CellStatus::Wall),
                2 => grid.set_weight(id, rng.random_range(2..10u32)),
                _ => {}
            }
        }
        grid.set_status(start, CellStatus::Start);
        grid.set_status(target, CellStatus::Target);
        Self {
            grid,
            start,
            target,
        }
    }

    /// Run `variant` to completion on a copy of the grid.
    pub fn run(&self, variant: Variant, diagonal: bool) -> (Grid, SearchReport) {
        let mut grid = self.grid.clone();
        let mut pf = Pathfinder::for_grid(&grid);
        let config = SearchConfig::new(variant).with_diagonal(diagonal);
        let report = pf.search(&mut grid, self.start, self.target, &config);
        (grid, report)
    }
}

/// One-line summary of a report.
pub fn summary(report: &SearchReport) -> String {
    match report.outcome.error() {
        None => format!(
            "visited {} cells, path of {} cells, cost {}",
            report.trace.len(),
            report.path.len(),
            report.cost.unwrap_or_default()
        ),
        Some(e) => format!("visited {} cells, failed: {e}", report.trace.len()),
    }
}
