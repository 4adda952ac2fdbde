//! Geometry primitives: [`CellId`] and [`Bounds`].
//!
//! Cells are addressed by `(row, col)`. Rows grow downwards and columns grow
//! to the right, so "up" means `row - 1`.

use std::fmt;
use std::str::FromStr;

use crate::error::CellIdParseError;

// ---------------------------------------------------------------------------
// CellId
// ---------------------------------------------------------------------------

/// Stable key of a grid cell.
///
/// The textual form is `"r-c"`, e.g. `"3-14"` for row 3, column 14.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellId {
    pub row: i32,
    pub col: i32,
}

impl CellId {
    /// Create a new cell key.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return the key shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the cell lies inside `bounds`.
    #[inline]
    pub fn in_bounds(self, bounds: &Bounds) -> bool {
        bounds.contains(self)
    }
}

impl PartialOrd for CellId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.row, self.col)
    }
}

impl FromStr for CellId {
    type Err = CellIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // A leading '-' belongs to a negative row, so split on the first
        // separator after the first character.
        let split = s
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '-')
            .map(|(i, _)| i)
            .ok_or_else(|| CellIdParseError::MissingSeparator(s.to_string()))?;
        let (row, col) = (&s[..split], &s[split + 1..]);
        let row = row
            .parse()
            .map_err(|_| CellIdParseError::InvalidCoordinate(s.to_string()))?;
        let col = col
            .parse()
            .map_err(|_| CellIdParseError::InvalidCoordinate(s.to_string()))?;
        Ok(Self { row, col })
    }
}

impl From<(i32, i32)> for CellId {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Dimensions of a grid anchored at `0-0`. Rows `[0, rows)`, columns
/// `[0, cols)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative dimensions are clamped to zero.
    #[inline]
    pub fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
        }
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the bounds hold no cells.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `id` is inside the bounds.
    #[inline]
    pub fn contains(self, id: CellId) -> bool {
        id.row >= 0 && id.row < self.rows && id.col >= 0 && id.col < self.cols
    }

    /// Flat row-major index of `id`, or `None` when out of bounds.
    #[inline]
    pub fn index(self, id: CellId) -> Option<usize> {
        if !self.contains(id) {
            return None;
        }
        Some(id.row as usize * self.cols as usize + id.col as usize)
    }

    /// Inverse of [`index`](Self::index). The caller guarantees `idx < len()`.
    #[inline]
    pub fn id_at(self, idx: usize) -> CellId {
        let cols = self.cols.max(1) as usize;
        CellId::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every cell key.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = CellId;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

// ---------------------------------------------------------------------------
// BoundsIter
// ---------------------------------------------------------------------------

/// Row-major iterator over the cells of a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = CellId;

    #[inline]
    fn next(&mut self) -> Option<CellId> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let id = self.bounds.id_at(self.next);
        self.next += 1;
        Some(id)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.bounds.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundsIter {}
