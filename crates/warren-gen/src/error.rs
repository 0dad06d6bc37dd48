//! Error types for maze generation and goal search.

use std::error::Error;
use std::fmt;
use warren_core::Position;
use warren_grid::GridError;

/// Errors from carving a maze or searching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenError {
    /// Dimensions were invalid or a grid write was refused.
    Grid(GridError),
    /// The search start is outside the grid or is a wall.
    StartNotOpen {
        /// The requested start.
        start: Position,
    },
    /// No open cell other than the start is reachable.
    NoReachableCell {
        /// The search start.
        start: Position,
    },
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::StartNotOpen { start } => {
                write!(f, "search start {start} is not an open cell")
            }
            Self::NoReachableCell { start } => {
                write!(f, "no open cell is reachable from {start}")
            }
        }
    }
}

impl Error for GenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
