use thiserror::Error;
use wayfind_core::CellId;

/// Coarse classification of a [`SearchError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request was rejected before any relaxation.
    InvalidInput,
    /// The frontier ran dry before the target was finalized.
    Unreachable,
    /// Back-pointers form a cycle. Indicates a defect.
    InternalInconsistency,
}

/// Why a search failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("start cell {0} is outside the grid")]
    StartMissing(CellId),

    #[error("target cell {0} is outside the grid")]
    TargetMissing(CellId),

    /// Start and target coincide and the config rejects that.
    #[error("start and target are both {0}")]
    SameEndpoints(CellId),

    #[error("start cell {0} is a wall")]
    StartBlocked(CellId),

    #[error("no path from {start} to {target}")]
    Unreachable { start: CellId, target: CellId },

    #[error("back-pointer chain revisits {at}")]
    CorruptedGraph { at: CellId },
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::StartMissing(_)
            | Self::TargetMissing(_)
            | Self::SameEndpoints(_)
            | Self::StartBlocked(_) => ErrorKind::InvalidInput,
            Self::Unreachable { .. } => ErrorKind::Unreachable,
            Self::CorruptedGraph { .. } => ErrorKind::InternalInconsistency,
        }
    }
}
