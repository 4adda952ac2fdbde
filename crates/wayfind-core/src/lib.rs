//! **wayfind-core**: grid model for the wayfind search visualizer.
//!
//! This crate provides the authoring-side types shared by the search engine
//! and its rendering collaborators: cell keys and grid bounds, per-cell
//! status and weight, the fixed-size [`Grid`], and a text [`Layout`] parser.

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;
pub mod layout;

pub use cell::{Cell, CellStatus};
pub use error::{CellIdParseError, LayoutError};
pub use geom::{Bounds, BoundsIter, CellId};
pub use grid::{Grid, ResetMode};
pub use layout::Layout;
