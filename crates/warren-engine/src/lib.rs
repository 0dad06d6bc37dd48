//! Player-facing maze model for Warren.
//!
//! [`Maze`] ties the pieces together: it derives grid dimensions from the
//! level, carves the grid, places the goal at the cell farthest from the
//! start, and tracks the player through [`PlayerState`]. Construction
//! inputs other than the level live in [`MazeConfig`], which can also be
//! read from `WARREN_*` environment variables.
//!
//! Library code only emits `log` records; installing a logger is left to
//! the binary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod maze;
pub mod player;

pub use config::{ConfigError, LevelPolicy, MazeConfig};
pub use error::MazeError;
pub use maze::Maze;
pub use player::PlayerState;
