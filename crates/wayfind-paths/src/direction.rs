//! Compass headings and the turn instructions that change them.

use wayfind_core::CellId;

/// One of the eight compass directions, clockwise from `Up`.
///
/// Rows grow downwards, so `Up` decreases the row and a clockwise rotation
/// is a right turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// All directions, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::Left,
        Self::UpLeft,
    ];

    /// The four cardinal directions, clockwise from `Up`.
    pub const CARDINAL: [Direction; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Position in [`ALL`](Self::ALL); one unit is 45°.
    #[inline]
    pub const fn octant(self) -> i32 {
        self as i32
    }

    /// `(drow, dcol)` of a single step in this direction.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::DownRight => (1, 1),
            Self::Down => (1, 0),
            Self::DownLeft => (1, -1),
            Self::Left => (0, -1),
            Self::UpLeft => (-1, -1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.octant() % 2 == 1
    }

    /// The direction rotated clockwise by `eighths` × 45°.
    #[inline]
    pub fn rotated(self, eighths: i32) -> Self {
        Self::ALL[(self.octant() + eighths).rem_euclid(8) as usize]
    }

    /// The direction opposite to this one.
    #[inline]
    pub fn reversed(self) -> Self {
        self.rotated(4)
    }

    /// Direction of a step with the given signs, `None` for a zero step.
    pub fn from_delta(drow: i32, dcol: i32) -> Option<Self> {
        let d = match (drow.signum(), dcol.signum()) {
            (-1, 0) => Self::Up,
            (-1, 1) => Self::UpRight,
            (0, 1) => Self::Right,
            (1, 1) => Self::DownRight,
            (1, 0) => Self::Down,
            (1, -1) => Self::DownLeft,
            (0, -1) => Self::Left,
            (-1, -1) => Self::UpLeft,
            _ => return None,
        };
        Some(d)
    }

    /// Direction of the single step `from → to`, `None` unless the two cells
    /// are adjacent (including diagonally).
    pub fn between(from: CellId, to: CellId) -> Option<Self> {
        let (drow, dcol) = (to.row - from.row, to.col - from.col);
        if drow.abs() > 1 || dcol.abs() > 1 {
            return None;
        }
        Self::from_delta(drow, dcol)
    }

    /// Signed rotation from `self` to `to` in 45° units, in `-3..=4`.
    ///
    /// Positive is clockwise (right). A reversal is reported as `+4`.
    pub fn rotation_to(self, to: Self) -> i32 {
        let r = (to.octant() - self.octant()).rem_euclid(8);
        if r > 4 { r - 8 } else { r }
    }

    /// The neighbor of `id` one step in this direction.
    #[inline]
    pub fn step(self, id: CellId) -> CellId {
        let (drow, dcol) = self.delta();
        id.shift(drow, dcol)
    }
}

/// A single movement instruction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Forward,
    /// 90° counter-clockwise.
    TurnLeft,
    /// 90° clockwise.
    TurnRight,
    /// 45° counter-clockwise.
    VeerLeft,
    /// 45° clockwise.
    VeerRight,
}

impl Move {
    #[inline]
    pub const fn is_rotation(self) -> bool {
        !matches!(self, Self::Forward)
    }
}
