use thiserror::Error;

use crate::geom::CellId;

/// Errors from parsing a `"r-c"` cell key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CellIdParseError {
    /// No `-` between row and column.
    #[error("cell key {0:?} has no row/column separator")]
    MissingSeparator(String),
    /// Row or column is not an integer.
    #[error("cell key {0:?} has a non-integer coordinate")]
    InvalidCoordinate(String),
}

/// Errors that can occur when parsing a [`Layout`](crate::Layout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Lines have inconsistent widths.
    #[error("layout row {row} is {found} cells wide, expected {expected}")]
    InconsistentSize {
        row: i32,
        expected: i32,
        found: i32,
    },
    /// A character outside the layout alphabet was found.
    #[error("layout contains invalid character \u{201c}{ch}\u{201d} at {at}")]
    InvalidRune { ch: char, at: CellId },
    /// More than one `S` marker.
    #[error("layout has a second start marker at {0}")]
    DuplicateStart(CellId),
    /// More than one `T` marker.
    #[error("layout has a second target marker at {0}")]
    DuplicateTarget(CellId),
}
