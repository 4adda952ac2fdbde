use wayfind_core::CellId;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: CellId, b: CellId) -> u32 {
    (a.row - b.row).unsigned_abs() + (a.col - b.col).unsigned_abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: CellId, b: CellId) -> u32 {
    (a.row - b.row)
        .unsigned_abs()
        .max((a.col - b.col).unsigned_abs())
}

/// Lower-bound estimate of the remaining cost to the target.
///
/// Manhattan never overestimates for 4-way movement, Chebyshev for 8-way.
/// Records are kept per cell while step costs depend on the heading, so the
/// weighted search returns a cheap path, not always the cheapest one.
#[derive(Copy, Clone, Debug)]
pub enum Heuristic {
    Manhattan,
    Chebyshev,
    /// Always 0; turns A* into Dijkstra.
    Zero,
    Custom(fn(CellId, CellId) -> u32),
}

impl Heuristic {
    /// Admissible default for the given movement mode.
    #[inline]
    pub fn for_movement(diagonal: bool) -> Self {
        if diagonal {
            Self::Chebyshev
        } else {
            Self::Manhattan
        }
    }

    /// Estimate the remaining cost from `from` to `to`.
    #[inline]
    pub fn estimate(self, from: CellId, to: CellId) -> u32 {
        match self {
            Self::Manhattan => manhattan(from, to),
            Self::Chebyshev => chebyshev(from, to),
            Self::Zero => 0,
            Self::Custom(f) => f(from, to),
        }
    }
}
