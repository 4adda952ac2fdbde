//! Search results: visitation trace and reconstructed path.

use wayfind_core::CellId;

use crate::error::SearchError;
use crate::state::StateTable;

/// Terminal result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Succeeded,
    Failed(SearchError),
}

impl Outcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    /// The failure, if any.
    pub fn error(&self) -> Option<&SearchError> {
        match self {
            Self::Succeeded => None,
            Self::Failed(e) => Some(e),
        }
    }
}

/// Everything a search hands to the rendering side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Cells in the order they were finalized.
    pub trace: Vec<CellId>,
    /// Start to target inclusive; empty unless the search succeeded.
    pub path: Vec<CellId>,
    /// g-cost of the cell the search ended on, when it succeeded.
    ///
    /// On a [`Pass::Reverse`](crate::Pass::Reverse) run this is the cost of
    /// travelling target to start, turns priced in that direction, even
    /// though `path` is reported start to target.
    pub cost: Option<u32>,
}

impl SearchReport {
    pub(crate) fn failed(error: SearchError, trace: Vec<CellId>) -> Self {
        Self {
            outcome: Outcome::Failed(error),
            trace,
            path: Vec::new(),
            cost: None,
        }
    }
}

/// Follow back-pointers from `goal` to the table's origin.
///
/// Returns the cells from origin to `goal` inclusive. Fails with
/// [`SearchError::Unreachable`] when the chain stops short of the origin and
/// with [`SearchError::CorruptedGraph`] when it revisits a cell.
pub fn reconstruct_path(table: &StateTable, goal: CellId) -> Result<Vec<CellId>, SearchError> {
    let origin = table.origin();
    let unreachable = || SearchError::Unreachable {
        start: origin.unwrap_or(goal),
        target: goal,
    };
    let origin = origin.ok_or_else(unreachable)?;
    let bounds = table.bounds();

    let mut seen = vec![false; bounds.len()];
    let mut path = Vec::new();
    let mut cur = goal;
    loop {
        let i = bounds.index(cur).ok_or_else(unreachable)?;
        if seen[i] {
            return Err(SearchError::CorruptedGraph { at: cur });
        }
        seen[i] = true;
        path.push(cur);
        if cur == origin {
            break;
        }
        cur = table
            .get_index(i)
            .and_then(|s| s.parent)
            .ok_or_else(unreachable)?;
    }
    path.reverse();
    Ok(path)
}
