//! The [`Cell`] type: authoring data of a single grid square.

/// Display and traversal status of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Unvisited,
    Wall,
    Start,
    Target,
    Visited,
    ShortestPath,
}

impl CellStatus {
    /// Whether a search may step onto the cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

/// A grid square: its status and additive traversal weight.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub status: CellStatus,
    pub weight: u32,
}

impl Cell {
    /// A wall cell.
    pub const WALL: Self = Self {
        status: CellStatus::Wall,
        weight: 0,
    };

    /// Set the status (builder).
    #[inline]
    pub const fn with_status(mut self, status: CellStatus) -> Self {
        self.status = status;
        self
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self.status, CellStatus::Wall)
    }
}
