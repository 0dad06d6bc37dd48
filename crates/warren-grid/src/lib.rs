//! Grid storage for Warren mazes.
//!
//! This crate owns the 2D cell-kind array every other layer reads and
//! writes, together with the rules that constrain its shape:
//!
//! - [`Dimensions`]: odd sides of at least 7, derived from a level number
//!   via `7 + 2 * (level - 1)`
//! - [`Grid`]: row-major [`CellKind`](warren_core::CellKind) storage whose
//!   outer border is always wall
//! - [`NEIGHBOUR_OFFSETS`]: the fixed `+x, +y, -x, -y` expansion order
//!   shared by every search
//!
//! Grids can be dumped to and parsed from a plain-text format (see
//! [`Grid::from_ascii`]) and fingerprinted with FNV-1a for determinism
//! checks (see [`Grid::fingerprint`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod ascii;
pub mod dims;
pub mod error;
pub mod grid;
pub mod hash;

pub use dims::Dimensions;
pub use error::GridError;
pub use grid::{Grid, NEIGHBOUR_OFFSETS};
