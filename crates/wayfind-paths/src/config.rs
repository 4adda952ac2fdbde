//! Search configuration.

use crate::direction::Direction;
use crate::distance::Heuristic;
use crate::frontier::FrontierKind;
use crate::state::Pass;

/// Search algorithm family.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// A*: heading-aware step cost plus cell weight, keyed on `g + h`.
    #[default]
    Weighted,
    /// As `Weighted` with a zero heuristic.
    Dijkstra,
    /// Best-first on the heuristic alone. Fast, not optimal.
    Greedy,
    /// Every step costs 1; no heuristic; breadth-first order.
    Unweighted,
}

impl Variant {
    /// Whether the variant prices turns and cell weights.
    #[inline]
    pub const fn is_weighted(self) -> bool {
        !matches!(self, Self::Unweighted)
    }
}

/// Parameters of a single search.
#[derive(Copy, Clone, Debug)]
pub struct SearchConfig {
    pub variant: Variant,
    /// Allow the four diagonal moves.
    pub diagonal: bool,
    /// Heading of the origin cell before the first step.
    pub start_heading: Direction,
    /// Overrides the variant's default heuristic.
    pub heuristic: Option<Heuristic>,
    pub frontier: FrontierKind,
    /// Fail with `SameEndpoints` when start equals target instead of
    /// returning the single-cell path.
    pub reject_same_endpoints: bool,
    pub pass: Pass,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Weighted,
            diagonal: false,
            start_heading: Direction::Right,
            heuristic: None,
            frontier: FrontierKind::Heap,
            reject_same_endpoints: true,
            pass: Pass::Forward,
        }
    }
}

impl SearchConfig {
    /// Default configuration for `variant`.
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    pub fn with_diagonal(mut self, diagonal: bool) -> Self {
        self.diagonal = diagonal;
        self
    }

    pub fn with_start_heading(mut self, heading: Direction) -> Self {
        self.start_heading = heading;
        self
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    pub fn with_reject_same_endpoints(mut self, reject: bool) -> Self {
        self.reject_same_endpoints = reject;
        self
    }

    pub fn with_pass(mut self, pass: Pass) -> Self {
        self.pass = pass;
        self
    }

    /// The heuristic in effect, or `None` when the variant computes none.
    pub fn effective_heuristic(&self) -> Option<Heuristic> {
        match self.variant {
            Variant::Unweighted => None,
            Variant::Dijkstra => Some(self.heuristic.unwrap_or(Heuristic::Zero)),
            Variant::Weighted | Variant::Greedy => Some(
                self.heuristic
                    .unwrap_or_else(|| Heuristic::for_movement(self.diagonal)),
            ),
        }
    }
}
