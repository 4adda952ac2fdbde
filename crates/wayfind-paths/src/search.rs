//! The relaxation loop shared by every [`Variant`].
//!
//! A [`Stepper`] finalizes one cell per [`step_once`](Stepper::step_once)
//! call, so a rendering loop can animate the search without the engine ever
//! yielding control on its own. Dropping a stepper cancels the search and
//! leaves the grid and state table partially relaxed.

use wayfind_core::{CellId, Grid, ResetMode};

use crate::config::{SearchConfig, Variant};
use crate::cost::{CostModel, HeadingCost, UniformCost};
use crate::direction::Direction;
use crate::distance::Heuristic;
use crate::error::SearchError;
use crate::frontier::{Frontier, Priority};
use crate::neighbors::Neighbors;
use crate::state::{Pass, StateTable};
use crate::trace::{Outcome, SearchReport, reconstruct_path};

/// Where a search stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchState {
    Running,
    Succeeded,
    Failed(SearchError),
}

/// Result of a single [`Stepper::step_once`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Progress {
    /// The cell was finalized and appended to the trace.
    Visited(CellId),
    /// The search is over; see [`Stepper::state`].
    Finished,
}

/// An in-flight search.
pub struct Stepper<'a> {
    grid: &'a mut Grid,
    table: &'a mut StateTable,
    neighbors: &'a mut Neighbors,
    frontier: Box<dyn Frontier>,
    pricing: Box<dyn CostModel>,
    heuristic: Option<Heuristic>,
    config: SearchConfig,
    start: CellId,
    target: CellId,
    /// Cell the search grows from; `target` on a reverse pass.
    origin: CellId,
    /// Cell the search is looking for; `start` on a reverse pass.
    goal: CellId,
    trace: Vec<CellId>,
    state: SearchState,
}

impl<'a> Stepper<'a> {
    pub(crate) fn new(
        grid: &'a mut Grid,
        table: &'a mut StateTable,
        neighbors: &'a mut Neighbors,
        start: CellId,
        target: CellId,
        config: SearchConfig,
    ) -> Self {
        let (origin, goal) = match config.pass {
            Pass::Forward => (start, target),
            Pass::Reverse => (target, start),
        };
        let pricing: Box<dyn CostModel> = if config.variant.is_weighted() {
            Box::new(HeadingCost)
        } else {
            Box::new(UniformCost)
        };

        grid.reset(ResetMode::CLEAR_PATH);
        table.begin(origin);

        let mut stepper = Self {
            frontier: config.frontier.build(grid.len()),
            grid,
            table,
            neighbors,
            pricing,
            heuristic: config.effective_heuristic(),
            config,
            start,
            target,
            origin,
            goal,
            trace: Vec::new(),
            state: SearchState::Running,
        };

        log::debug!(
            "{:?} search {} -> {} on {} grid ({:?} pass)",
            config.variant,
            start,
            target,
            stepper.grid.bounds(),
            config.pass
        );

        if let Err(e) = stepper.validate() {
            log::warn!("search rejected: {e}");
            stepper.state = SearchState::Failed(e);
            return stepper;
        }
        stepper.seed();
        stepper
    }

    fn validate(&self) -> Result<(), SearchError> {
        if !self.grid.contains(self.start) {
            return Err(SearchError::StartMissing(self.start));
        }
        if !self.grid.contains(self.target) {
            return Err(SearchError::TargetMissing(self.target));
        }
        if self.start == self.target && self.config.reject_same_endpoints {
            return Err(SearchError::SameEndpoints(self.start));
        }
        if self.grid.is_wall(self.start) {
            return Err(SearchError::StartBlocked(self.start));
        }
        Ok(())
    }

    fn seed(&mut self) {
        let Some(i) = self.grid.index(self.origin) else {
            return;
        };
        let h = self.heuristic.map(|hf| hf.estimate(self.origin, self.goal));
        let entry = self.table.entry(i);
        entry.g = 0;
        entry.f = 0;
        entry.h = h;
        entry.heading = Some(self.config.start_heading);
        self.frontier.insert_or_update(
            i,
            Priority {
                f: 0,
                h: h.unwrap_or(0),
            },
        );
    }

    /// Current state of the search.
    #[inline]
    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Cells finalized so far, in order.
    #[inline]
    pub fn trace(&self) -> &[CellId] {
        &self.trace
    }

    /// Records written so far.
    #[inline]
    pub fn table(&self) -> &StateTable {
        self.table
    }

    /// Number of discovered cells awaiting expansion.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Finalize the next cell.
    pub fn step_once(&mut self) -> Progress {
        if self.state != SearchState::Running {
            return Progress::Finished;
        }
        let goal = self.grid.index(self.goal);
        loop {
            let Some(ci) = self.frontier.extract_min() else {
                return self.exhausted();
            };
            let id = self.table.bounds().id_at(ci);
            if self.grid.is_wall(id) {
                continue;
            }
            let entry = self.table.entry(ci);
            if !entry.is_reached() {
                return self.exhausted();
            }
            entry.closed = true;
            let (g, heading) = (entry.g, entry.heading);

            self.grid.mark_visited(id);
            self.trace.push(id);
            log::trace!("finalized {id} g={g} heading={heading:?}");

            if Some(ci) == goal {
                log::debug!("reached {id} at cost {g} after {} cells", self.trace.len());
                self.state = SearchState::Succeeded;
            } else {
                self.relax(id, g, heading);
            }
            return Progress::Visited(id);
        }
    }

    fn relax(&mut self, id: CellId, g: u32, heading: Option<Direction>) {
        let grid = &*self.grid;
        let table = &mut *self.table;
        let frontier = &mut self.frontier;
        let bounds = table.bounds();
        let goal = self.goal;

        for &(n, _) in self.neighbors.resolve(id, grid, self.config.diagonal) {
            let Some(ni) = bounds.index(n) else {
                continue;
            };
            let Some(step) = self.pricing.step(heading, id, n) else {
                continue;
            };
            let tentative = g.saturating_add(self.pricing.charge(&step, grid.weight(n)));

            let entry = table.entry(ni);
            if entry.closed || tentative >= entry.g {
                continue;
            }
            let h = match self.heuristic {
                Some(hf) => *entry.h.get_or_insert_with(|| hf.estimate(n, goal)),
                None => 0,
            };
            entry.g = tentative;
            entry.f = match self.config.variant {
                Variant::Greedy => h,
                _ => tentative.saturating_add(h),
            };
            entry.heading = Some(step.heading);
            entry.segment = step.turns;
            entry.parent = Some(id);
            frontier.insert_or_update(ni, Priority { f: entry.f, h });
        }
    }

    fn exhausted(&mut self) -> Progress {
        log::debug!(
            "frontier exhausted after {} cells; {} unreachable",
            self.trace.len(),
            self.goal
        );
        self.state = SearchState::Failed(SearchError::Unreachable {
            start: self.start,
            target: self.target,
        });
        Progress::Finished
    }

    /// Run to completion and build the report.
    ///
    /// On success the path cells are marked on the grid.
    pub fn finish(mut self) -> SearchReport {
        while let Progress::Visited(_) = self.step_once() {}

        let trace = std::mem::take(&mut self.trace);
        let error = match &self.state {
            SearchState::Failed(e) => e.clone(),
            _ => match reconstruct_path(self.table, self.goal) {
                Ok(mut path) => {
                    if self.config.pass == Pass::Reverse {
                        path.reverse();
                    }
                    for &id in &path {
                        self.grid.mark_shortest_path(id);
                    }
                    return SearchReport {
                        outcome: Outcome::Succeeded,
                        trace,
                        path,
                        cost: Some(self.table.g_cost(self.goal)),
                    };
                }
                Err(e) => {
                    log::error!("path reconstruction failed: {e}");
                    e
                }
            },
        };
        SearchReport::failed(error, trace)
    }
}

impl Iterator for Stepper<'_> {
    type Item = CellId;

    fn next(&mut self) -> Option<CellId> {
        match self.step_once() {
            Progress::Visited(id) => Some(id),
            Progress::Finished => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pathfinder;
    use crate::direction::Move;
    use crate::frontier::FrontierKind;
    use crate::state::UNREACHABLE;
    use wayfind_core::{CellStatus, Layout};

    fn c(row: i32, col: i32) -> CellId {
        CellId::new(row, col)
    }

    fn run(picture: &str, config: SearchConfig) -> (Pathfinder, Grid, SearchReport) {
        let Layout {
            mut grid,
            start,
            target,
        } = Layout::parse(picture).unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        let report = pf.search(&mut grid, start.unwrap(), target.unwrap(), &config);
        (pf, grid, report)
    }

    #[test]
    fn open_grid_succeeds() {
        let (pf, grid, r) = run(
            "\
            S...
            ....
            ....
            ...T",
            SearchConfig::default(),
        );
        assert_eq!(r.outcome, Outcome::Succeeded);
        assert_eq!(r.path.first(), Some(&c(0, 0)));
        assert_eq!(r.path.last(), Some(&c(3, 3)));
        assert_eq!(r.path.len(), 7);
        // Three steps right, one turn, three steps down.
        assert_eq!(r.cost, Some(7));
        assert_eq!(pf.state(c(0, 0)).unwrap().g, 0);
        assert_eq!(grid.status(c(0, 0)), Some(CellStatus::Start));
        assert_eq!(grid.count(CellStatus::ShortestPath), 5);
    }

    #[test]
    fn straight_run_keeps_heading() {
        let (pf, _, r) = run("S...T", SearchConfig::default());
        assert_eq!(r.cost, Some(4));
        assert_eq!(pf.table(Pass::Forward).heading(c(0, 4)), Some(Direction::Right));
        let seg = &pf.state(c(0, 2)).unwrap().segment;
        assert_eq!(seg.as_slice(), &[Move::Forward]);
    }

    #[test]
    fn start_heading_is_priced() {
        let (_, _, r) = run(
            "T...S",
            SearchConfig::default().with_start_heading(Direction::Right),
        );
        // Reverse out of the start, then three straight steps.
        assert_eq!(r.cost, Some(3 + 3));
        let (_, _, r) = run(
            "T...S",
            SearchConfig::default().with_start_heading(Direction::Left),
        );
        assert_eq!(r.cost, Some(4));
    }

    #[test]
    fn same_endpoints_rejected_by_default() {
        let mut grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let r = pf.search(&mut grid, c(1, 1), c(1, 1), &SearchConfig::default());
        assert_eq!(r.outcome, Outcome::Failed(SearchError::SameEndpoints(c(1, 1))));
        assert!(r.trace.is_empty());
        assert!(pf.state(c(1, 1)).is_none());
    }

    #[test]
    fn same_endpoints_allowed_when_configured() {
        let mut grid = Grid::new(3, 3);
        let config = SearchConfig::default().with_reject_same_endpoints(false);
        let r = crate::search(&mut grid, c(1, 1), c(1, 1), &config);
        assert!(r.outcome.is_success());
        assert_eq!(r.path, vec![c(1, 1)]);
        assert_eq!(r.cost, Some(0));
    }

    #[test]
    fn missing_endpoints_fail_immediately() {
        let mut grid = Grid::new(2, 2);
        let config = SearchConfig::default();
        let r = crate::search(&mut grid, c(5, 0), c(1, 1), &config);
        assert_eq!(r.outcome, Outcome::Failed(SearchError::StartMissing(c(5, 0))));
        let r = crate::search(&mut grid, c(0, 0), c(1, -1), &config);
        assert_eq!(r.outcome, Outcome::Failed(SearchError::TargetMissing(c(1, -1))));
        assert_eq!(grid.count(CellStatus::Visited), 0);
    }

    #[test]
    fn walled_start_is_invalid() {
        let mut grid = Grid::new(2, 2);
        grid.set_status(c(0, 0), CellStatus::Wall);
        let r = crate::search(&mut grid, c(0, 0), c(1, 1), &SearchConfig::default());
        assert_eq!(r.outcome, Outcome::Failed(SearchError::StartBlocked(c(0, 0))));

        let reverse = SearchConfig::default().with_pass(Pass::Reverse);
        let r = crate::search(&mut grid, c(0, 0), c(1, 1), &reverse);
        assert_eq!(r.outcome, Outcome::Failed(SearchError::StartBlocked(c(0, 0))));
    }

    #[test]
    fn walled_target_is_unreachable_in_both_passes() {
        let mut grid = Grid::new(1, 3);
        grid.set_status(c(0, 2), CellStatus::Wall);
        for pass in [Pass::Forward, Pass::Reverse] {
            let config = SearchConfig::default().with_pass(pass);
            let r = crate::search(&mut grid, c(0, 0), c(0, 2), &config);
            assert_eq!(
                r.outcome,
                Outcome::Failed(SearchError::Unreachable {
                    start: c(0, 0),
                    target: c(0, 2)
                })
            );
            assert_eq!(
                r.outcome.error().map(SearchError::kind),
                Some(crate::ErrorKind::Unreachable)
            );
            assert!(!r.trace.contains(&c(0, 2)));
        }
    }

    #[test]
    fn reverse_cost_prices_turns_from_target() {
        let (_, _, fwd) = run("S5.T", SearchConfig::default());
        let (_, _, rev) = run("S5.T", SearchConfig::default().with_pass(Pass::Reverse));
        assert_eq!(fwd.path, rev.path);
        assert_eq!(fwd.cost, Some(8));
        // Reversal out of the target, then the same three cells backwards.
        assert_eq!(rev.cost, Some(3 + 5 + 1 + 1));
    }

    #[test]
    fn wall_band_is_unreachable() {
        let (pf, grid, r) = run(
            "\
            S...
            ....
            ####
            ...T",
            SearchConfig::default(),
        );
        assert_eq!(
            r.outcome,
            Outcome::Failed(SearchError::Unreachable {
                start: c(0, 0),
                target: c(3, 3)
            })
        );
        assert!(r.path.is_empty());
        assert_eq!(r.trace.len(), 8);
        assert_eq!(pf.table(Pass::Forward).back_pointer(c(3, 3)), None);
        assert_eq!(pf.table(Pass::Forward).g_cost(c(3, 3)), UNREACHABLE);
        assert_eq!(grid.count(CellStatus::ShortestPath), 0);
    }

    #[test]
    fn weighted_prefers_cheap_detour() {
        let (_, _, r) = run(
            "\
            S9T
            ...",
            SearchConfig::default(),
        );
        assert!(r.outcome.is_success());
        assert!(!r.path.contains(&c(0, 1)));
        assert_eq!(r.path, vec![c(0, 0), c(1, 0), c(1, 1), c(1, 2), c(0, 2)]);
        // Turn down (2), turn left-to-right (2), straight (1), turn up (2).
        assert_eq!(r.cost, Some(7));
    }

    #[test]
    fn unweighted_ignores_weights() {
        let (_, _, r) = run(
            "\
            S9T
            ...",
            SearchConfig::new(Variant::Unweighted),
        );
        assert_eq!(r.path, vec![c(0, 0), c(0, 1), c(0, 2)]);
        assert_eq!(r.cost, Some(2));
    }

    #[test]
    fn unweighted_computes_no_heuristic() {
        let (pf, _, r) = run(
            "\
            S..
            ...
            ..T",
            SearchConfig::new(Variant::Unweighted),
        );
        assert!(r.outcome.is_success());
        assert!(pf.table(Pass::Forward).iter().all(|(_, s)| s.h.is_none()));
    }

    #[test]
    fn unweighted_expands_breadth_first() {
        let (pf, _, r) = run(
            "\
            S...
            ....
            ...T",
            SearchConfig::new(Variant::Unweighted),
        );
        let hops: Vec<u32> = r
            .trace
            .iter()
            .map(|&id| pf.table(Pass::Forward).g_cost(id))
            .collect();
        assert!(hops.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(r.path.len(), 6);
    }

    #[test]
    fn heuristic_cached_once_per_cell() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        fn counting(a: CellId, b: CellId) -> u32 {
            CALLS.fetch_add(1, Ordering::Relaxed);
            crate::manhattan(a, b)
        }
        let (pf, _, r) = run(
            "\
            S....
            .###.
            ....T",
            SearchConfig::default().with_heuristic(Heuristic::Custom(counting)),
        );
        assert!(r.outcome.is_success());
        let touched = pf.table(Pass::Forward).iter().count();
        assert_eq!(CALLS.load(Ordering::Relaxed), touched);
    }

    #[test]
    fn dijkstra_and_weighted_agree_on_cost() {
        let picture = "\
            S..
            .5.
            ..T";
        let (_, _, a) = run(picture, SearchConfig::new(Variant::Weighted));
        let (_, _, d) = run(picture, SearchConfig::new(Variant::Dijkstra));
        assert_eq!(a.cost, Some(5));
        assert_eq!(d.cost, Some(5));
        assert_eq!(a.path, d.path);
        assert!(a.trace.len() <= d.trace.len());
    }

    #[test]
    fn greedy_reaches_target() {
        let (_, _, r) = run(
            "\
            S...
            .##.
            ...T",
            SearchConfig::new(Variant::Greedy),
        );
        assert!(r.outcome.is_success());
        assert_eq!(r.path.last(), Some(&c(2, 3)));
    }

    #[test]
    fn scan_frontier_matches_heap() {
        let picture = "\
            S.....
            .##.#.
            .1..#.
            .#.##.
            ...3.T";
        for variant in [Variant::Weighted, Variant::Unweighted, Variant::Dijkstra] {
            let (_, _, heap) = run(picture, SearchConfig::new(variant));
            let (_, _, scan) = run(
                picture,
                SearchConfig::new(variant).with_frontier(FrontierKind::Scan),
            );
            assert_eq!(heap, scan);
        }
    }

    #[test]
    fn diagonal_mode_cuts_across() {
        let (_, _, r) = run(
            "\
            S..
            ...
            ..T",
            SearchConfig::default()
                .with_diagonal(true)
                .with_start_heading(Direction::DownRight),
        );
        assert_eq!(r.path, vec![c(0, 0), c(1, 1), c(2, 2)]);
        assert_eq!(r.cost, Some(2));
    }

    #[test]
    fn diagonal_mode_does_not_cut_corners() {
        let (_, _, r) = run(
            "\
            S#
            .T",
            SearchConfig::default().with_diagonal(true),
        );
        assert_eq!(r.path, vec![c(0, 0), c(1, 0), c(1, 1)]);
    }

    #[test]
    fn reverse_pass_uses_its_own_table() {
        let picture = "\
            S...
            .#..
            ...T";
        let Layout {
            mut grid,
            start,
            target,
        } = Layout::parse(picture).unwrap();
        let (start, target) = (start.unwrap(), target.unwrap());
        let mut pf = Pathfinder::for_grid(&grid);

        let fwd = pf.search(&mut grid, start, target, &SearchConfig::default());
        let fwd_g = pf.table(Pass::Forward).g_cost(target);

        let rev = pf.search(
            &mut grid,
            start,
            target,
            &SearchConfig::default().with_pass(Pass::Reverse),
        );
        assert!(rev.outcome.is_success());
        assert_eq!(rev.path.first(), Some(&start));
        assert_eq!(rev.path.last(), Some(&target));
        assert_eq!(rev.trace.first(), Some(&target));
        assert_eq!(pf.table(Pass::Reverse).g_cost(target), 0);
        // The forward table is untouched by the reverse run.
        assert_eq!(pf.table(Pass::Forward).g_cost(target), fwd_g);
        assert_eq!(pf.table(Pass::Forward).g_cost(start), 0);
        assert_eq!(fwd.path.len(), rev.path.len());
        assert_eq!(
            pf.reconstruct_path(Pass::Reverse, start).unwrap().first(),
            Some(&target)
        );
    }

    #[test]
    fn stepping_yields_one_cell_at_a_time() {
        let Layout {
            mut grid,
            start,
            target,
        } = Layout::parse("S..T").unwrap();
        let mut pf = Pathfinder::for_grid(&grid);
        let mut st = pf.stepper(
            &mut grid,
            start.unwrap(),
            target.unwrap(),
            &SearchConfig::default(),
        );
        assert_eq!(st.state(), &SearchState::Running);
        assert_eq!(st.step_once(), Progress::Visited(c(0, 0)));
        assert_eq!(st.trace(), &[c(0, 0)]);
        assert_eq!(st.frontier_len(), 1);
        assert_eq!(st.next(), Some(c(0, 1)));
        let rest: Vec<_> = st.by_ref().collect();
        assert_eq!(rest, vec![c(0, 2), c(0, 3)]);
        assert_eq!(st.state(), &SearchState::Succeeded);
        assert_eq!(st.step_once(), Progress::Finished);
        let report = st.finish();
        assert_eq!(report.trace.len(), 4);
        assert_eq!(report.path.len(), 4);
    }

    #[test]
    fn dropping_stepper_leaves_partial_state() {
        let mut grid = Grid::new(5, 5);
        let mut pf = Pathfinder::for_grid(&grid);
        {
            let mut st = pf.stepper(&mut grid, c(0, 0), c(4, 4), &SearchConfig::default());
            st.step_once();
            st.step_once();
        }
        assert_eq!(grid.count(CellStatus::Visited), 2);
        assert_eq!(pf.state(c(0, 0)).map(|s| s.g), Some(0));
        assert!(pf.state(c(4, 4)).is_none());
    }

    #[test]
    fn rerun_clears_previous_marks() {
        let mut grid = Grid::new(3, 3);
        let mut pf = Pathfinder::for_grid(&grid);
        let config = SearchConfig::default();
        let first = pf.search(&mut grid, c(0, 0), c(2, 2), &config);
        let second = pf.search(&mut grid, c(0, 0), c(2, 2), &config);
        assert_eq!(first, second);
    }
}
