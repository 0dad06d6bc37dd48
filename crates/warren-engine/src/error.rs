//! Top-level error for maze construction.

use std::error::Error;
use std::fmt;

use crate::config::ConfigError;
use warren_gen::GenError;
use warren_grid::GridError;

/// Errors from [`Maze::create`](crate::Maze::create).
///
/// Movement never fails: [`Maze::try_move`](crate::Maze::try_move)
/// reports rejection through its `bool` return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    /// The configuration or requested level was refused.
    Config(ConfigError),
    /// Dimensions could not be derived or a stamp was refused.
    Grid(GridError),
    /// Carving or goal search failed.
    Generation(GenError),
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Generation(e) => write!(f, "generation: {e}"),
        }
    }
}

impl Error for MazeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Generation(e) => Some(e),
        }
    }
}

impl From<ConfigError> for MazeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for MazeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<GenError> for MazeError {
    fn from(e: GenError) -> Self {
        Self::Generation(e)
    }
}
