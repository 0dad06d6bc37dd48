//! Error types for grid construction and cell access.

use std::error::Error;
use std::fmt;
use warren_core::Position;

/// Errors arising from dimension derivation, grid construction, or cell access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Level 0 has no dimensions; levels start at 1.
    InvalidLevel {
        /// The offending level.
        level: u32,
    },
    /// The level would produce a side longer than the supported maximum.
    LevelTooLarge {
        /// The offending level.
        level: u32,
        /// Highest supported level.
        max: u32,
    },
    /// Width or height is even, below the minimum, or above the maximum.
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
        /// Which rule was broken.
        reason: &'static str,
    },
    /// A position lies outside the grid.
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Attempted to open a cell on the outer border.
    BorderNotWall {
        /// The border cell.
        position: Position,
    },
    /// Raw cell buffer length does not match `width * height`.
    CellCountMismatch {
        /// `width * height`.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// ASCII input could not be parsed into a grid.
    Parse {
        /// 1-based line number, or 0 when the error concerns the whole input.
        line: usize,
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLevel { level } => write!(f, "level {level} is invalid, levels start at 1"),
            Self::LevelTooLarge { level, max } => {
                write!(f, "level {level} exceeds the maximum supported level {max}")
            }
            Self::InvalidDimensions {
                width,
                height,
                reason,
            } => write!(f, "invalid dimensions {width}x{height}: {reason}"),
            Self::OutOfBounds {
                position,
                width,
                height,
            } => write!(
                f,
                "position {position} out of bounds: [0, {width}) x [0, {height})"
            ),
            Self::BorderNotWall { position } => {
                write!(f, "border cell {position} must stay a wall")
            }
            Self::CellCountMismatch { expected, actual } => {
                write!(f, "expected {expected} cells, got {actual}")
            }
            Self::Parse { line, reason } => write!(f, "parse error on line {line}: {reason}"),
        }
    }
}

impl Error for GridError {}
