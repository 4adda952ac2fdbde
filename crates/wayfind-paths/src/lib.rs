//! Step-wise shortest-path search over a weighted grid.
//!
//! The engine relaxes one cell per step so a rendering loop can animate the
//! exploration. All variants share one relaxation loop and differ only in how
//! a step is priced and how the frontier key is formed:
//!
//! | [`Variant`] | Step cost | Frontier key |
//! |---|---|---|
//! | `Weighted` | heading-aware + cell weight | `g + h` |
//! | `Dijkstra` | heading-aware + cell weight | `g` |
//! | `Greedy` | heading-aware + cell weight | `h` |
//! | `Unweighted` | 1 | `g` (breadth-first) |
//!
//! A [`Pathfinder`] owns the per-cell [`StateTable`]s and reuses them across
//! searches. [`Pathfinder::stepper`] hands out a [`Stepper`] for incremental
//! runs; [`Pathfinder::search`] runs to completion and returns a
//! [`SearchReport`].

mod config;
mod cost;
mod direction;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod pathfinder;
mod search;
mod state;
mod trace;

pub use config::{SearchConfig, Variant};
pub use cost::{CostModel, HeadingCost, StepCost, TurnPath, UniformCost};
pub use direction::{Direction, Move};
pub use distance::{Heuristic, chebyshev, manhattan};
pub use error::{ErrorKind, SearchError};
pub use frontier::{Frontier, FrontierKind, IndexedHeap, Priority, ScanList};
pub use neighbors::{Neighbors, neighbors};
pub use pathfinder::{Pathfinder, search};
pub use search::{Progress, SearchState, Stepper};
pub use state::{CellState, Pass, StateTable, UNREACHABLE};
pub use trace::{Outcome, SearchReport, reconstruct_path};
