//! Grids authored from text.
//!
//! A [`Layout`] parses an ASCII picture into a [`Grid`] plus the optional
//! start and target markers. Lines are separated by `'\n'` and must all have
//! the same width. Surrounding whitespace of the whole picture and of each
//! line is ignored.
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | open cell |
//! | `#` | wall |
//! | `S` | start |
//! | `T` | target |
//! | `1`–`9` | open cell with that weight |

use crate::cell::{Cell, CellStatus};
use crate::error::LayoutError;
use crate::geom::CellId;
use crate::grid::Grid;

/// A parsed grid picture.
#[derive(Debug, Clone)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<CellId>,
    pub target: Option<CellId>,
}

impl Layout {
    /// Parse a picture. See the module docs for the alphabet.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let rows = if lines.iter().all(|l| l.is_empty()) {
            0
        } else {
            lines.len() as i32
        };
        let cols = lines.first().map_or(0, |l| l.chars().count() as i32);

        let mut grid = Grid::new(rows, cols);
        let mut start = None;
        let mut target = None;

        for (row, line) in lines.iter().enumerate().take(rows as usize) {
            let row = row as i32;
            let width = line.chars().count() as i32;
            if width != cols {
                return Err(LayoutError::InconsistentSize {
                    row,
                    expected: cols,
                    found: width,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let at = CellId::new(row, col as i32);
                let cell = match ch {
                    '.' => Cell::default(),
                    '#' => Cell::WALL,
                    'S' => {
                        if start.replace(at).is_some() {
                            return Err(LayoutError::DuplicateStart(at));
                        }
                        Cell::default().with_status(CellStatus::Start)
                    }
                    'T' => {
                        if target.replace(at).is_some() {
                            return Err(LayoutError::DuplicateTarget(at));
                        }
                        Cell::default().with_status(CellStatus::Target)
                    }
                    '1'..='9' => Cell::default().with_weight(ch as u32 - '0' as u32),
                    _ => return Err(LayoutError::InvalidRune { ch, at }),
                };
                grid.set(at, cell);
            }
        }

        Ok(Self {
            grid,
            start,
            target,
        })
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
