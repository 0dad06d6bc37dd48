//! Core value types for the Warren maze library.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the small `Copy` types every other Warren crate speaks in: grid
//! positions, movement directions, cell kinds, and level numbers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod level;
pub mod position;

pub use cell::CellKind;
pub use level::Level;
pub use position::{Direction, Position};
