//! Per-cell search records.
//!
//! A [`StateTable`] holds one [`CellState`] per grid cell for a single search
//! direction. Entries are invalidated lazily with a generation counter, so
//! starting a new run does not touch every cell.

use wayfind_core::{Bounds, CellId};

use crate::cost::TurnPath;
use crate::direction::Direction;

/// Sentinel cost meaning "not reached" (+∞).
pub const UNREACHABLE: u32 = u32::MAX;

/// Algorithmic record of one cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellState {
    /// Accumulated cost from the origin.
    pub g: u32,
    /// Frontier key: `g + h` for the A* family.
    pub f: u32,
    /// Cached heuristic; computed at most once per run.
    pub h: Option<u32>,
    /// Direction the search arrived from.
    pub heading: Option<Direction>,
    /// Predecessor on the best known route. A key into the grid, not an owner.
    pub parent: Option<CellId>,
    /// Turn instructions of the step that last improved `g`.
    pub segment: TurnPath,
    /// Finalized (removed from the frontier for good).
    pub closed: bool,
}

impl Default for CellState {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            h: None,
            heading: None,
            parent: None,
            segment: TurnPath::new(),
            closed: false,
        }
    }
}

impl CellState {
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.g != UNREACHABLE
    }
}

#[derive(Clone, Debug, Default)]
struct Slot {
    state: CellState,
    generation: u32,
}

/// Which direction a search runs in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pass {
    /// From start to target.
    #[default]
    Forward,
    /// From target back to start, recorded in its own table.
    Reverse,
}

/// Per-cell search records for one search direction.
#[derive(Clone, Debug)]
pub struct StateTable {
    bounds: Bounds,
    slots: Vec<Slot>,
    generation: u32,
    origin: Option<CellId>,
}

impl StateTable {
    /// Create a table covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            slots: vec![Slot::default(); bounds.len()],
            // Slots start at generation 0, which is never current.
            generation: 1,
            origin: None,
        }
    }

    /// The bounds this table covers.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Resize to cover `bounds`, dropping every record.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.slots.clear();
        self.slots.resize(bounds.len(), Slot::default());
        self.generation = 1;
        self.origin = None;
    }

    /// Cell the current run started from.
    #[inline]
    pub fn origin(&self) -> Option<CellId> {
        self.origin
    }

    /// Invalidate every record for a new run starting at `origin`.
    pub fn begin(&mut self, origin: CellId) {
        self.origin = Some(origin);
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale slots could alias the new generation.
            for slot in self.slots.iter_mut() {
                *slot = Slot::default();
            }
            self.generation = 1;
        }
    }

    /// Record of `id` from the current run; `None` if the cell was never
    /// touched or lies outside the bounds.
    pub fn get(&self, id: CellId) -> Option<&CellState> {
        let i = self.bounds.index(id)?;
        self.get_index(i)
    }

    pub(crate) fn get_index(&self, i: usize) -> Option<&CellState> {
        let slot = self.slots.get(i)?;
        (slot.generation == self.generation).then_some(&slot.state)
    }

    /// Mutable record at flat index `i`, reset to defaults if stale.
    pub(crate) fn entry(&mut self, i: usize) -> &mut CellState {
        let cur = self.generation;
        let slot = &mut self.slots[i];
        if slot.generation != cur {
            slot.generation = cur;
            slot.state = CellState::default();
        }
        &mut slot.state
    }

    /// g-cost of `id`; [`UNREACHABLE`] when not reached.
    pub fn g_cost(&self, id: CellId) -> u32 {
        self.get(id).map_or(UNREACHABLE, |s| s.g)
    }

    /// Heading `id` was entered with.
    pub fn heading(&self, id: CellId) -> Option<Direction> {
        self.get(id).and_then(|s| s.heading)
    }

    /// Back-pointer of `id`.
    pub fn back_pointer(&self, id: CellId) -> Option<CellId> {
        self.get(id).and_then(|s| s.parent)
    }

    /// Iterate over `(id, state)` for every cell touched by the current run.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, &CellState)> + '_ {
        let bounds = self.bounds;
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.generation == self.generation)
            .map(move |(i, s)| (bounds.id_at(i), &s.state))
    }
}
