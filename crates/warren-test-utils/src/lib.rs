//! Test fixtures and structural assertions for Warren development.
//!
//! Provides hand-drawn grids with known distances ([`fixtures`]),
//! independent checks for the properties every generated maze must hold
//! ([`assert_border_is_wall`], [`assert_connected_from`],
//! [`assert_perfect_maze`]), and a [`FixedRng`] that makes shuffle
//! outcomes predictable.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

mod assertions;
mod rng;

pub use assertions::{assert_border_is_wall, assert_connected_from, assert_perfect_maze, reachable};
pub use rng::FixedRng;
