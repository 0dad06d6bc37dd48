//! Maze construction for Warren.
//!
//! Two algorithms run once per level, in order:
//!
//! 1. [`MazeGenerator`] carves a perfect maze into an all-wall
//!    [`Grid`](warren_grid::Grid) with a seeded randomized backtracker.
//! 2. [`FarthestPointFinder`] runs a BFS from the start and picks the
//!    open cell with the greatest hop distance as the goal.
//!
//! Both are deterministic: the generator draws only from a
//! `ChaCha8Rng` seeded by the caller, and the search expands neighbours
//! in a fixed order with a strict `>` tie-break.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod backtracker;
pub mod error;
pub mod farthest;

pub use backtracker::{carve, MazeGenerator, CARVE_OFFSETS, START};
pub use error::GenError;
pub use farthest::{DistanceMap, FarthestPoint, FarthestPointFinder};
