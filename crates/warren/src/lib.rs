//! Warren: perfect-maze generation, farthest-point goal placement, and
//! wall-checked player movement.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Warren sub-crates. For most users, adding `warren` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use warren::prelude::*;
//!
//! // Level 3 is an 11×11 grid; a fixed seed makes it reproducible.
//! let mut maze = Maze::create(3, &MazeConfig::with_seed(42)).unwrap();
//! assert_eq!((maze.width(), maze.height()), (11, 11));
//! assert_eq!(maze.cell_kind(0, 0), Some(CellKind::Wall));
//!
//! // Moving into the border is always refused.
//! assert!(!maze.try_step(Direction::Up));
//! assert_eq!(maze.player_position(), Position::new(1, 1));
//!
//! let again = Maze::create(3, &MazeConfig::with_seed(42)).unwrap();
//! assert_eq!(maze.goal_position(), again.goal_position());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `warren-core` | `Position`, `Direction`, `CellKind`, `Level` |
//! | [`grid`] | `warren-grid` | `Grid`, `Dimensions`, text format, fingerprint |
//! | [`generate`] | `warren-gen` | Backtracker carving and BFS goal search |
//! | [`engine`] | `warren-engine` | `Maze`, `PlayerState`, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Leaf value types (`warren-core`).
pub use warren_core as types;

/// Grid storage and shape rules (`warren-grid`).
///
/// [`grid::Grid`] is the cell array; [`grid::Dimensions`] derives its size
/// from a level number.
pub use warren_grid as grid;

/// Maze carving and goal search (`warren-gen`).
///
/// [`generate::MazeGenerator`] carves a perfect maze from a seed;
/// [`generate::FarthestPointFinder`] picks the goal.
pub use warren_gen as generate;

/// The per-level façade and its configuration (`warren-engine`).
pub use warren_engine as engine;

/// Common imports for typical Warren usage.
///
/// ```rust
/// use warren::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use warren_core::{CellKind, Direction, Level, Position};

    // Grid
    pub use warren_grid::{Dimensions, Grid};

    // Generation
    pub use warren_gen::{DistanceMap, FarthestPointFinder, MazeGenerator};

    // Engine
    pub use warren_engine::{LevelPolicy, Maze, MazeConfig, PlayerState};

    // Errors
    pub use warren_engine::{ConfigError, MazeError};
    pub use warren_gen::GenError;
    pub use warren_grid::GridError;
}
