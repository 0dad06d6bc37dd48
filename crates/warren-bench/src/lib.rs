//! Benchmark profiles and utilities for the Warren maze library.
//!
//! - [`reference_config`]: fixed-seed configuration shared by every bench
//! - [`LEVEL_SWEEP`]: levels used to chart construction cost against size
//! - [`route_script`]: the direction sequence that walks a maze from the
//!   player's cell to the goal

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use warren_core::Direction;
use warren_engine::{Maze, MazeConfig};
use warren_grid::Dimensions;

/// Reference level: a 55x55 grid.
pub const REFERENCE_LEVEL: u32 = 25;

/// Stress level: a 401x401 grid (about 160K cells).
pub const STRESS_LEVEL: u32 = 198;

/// Levels swept by the scaling benchmarks.
pub const LEVEL_SWEEP: [u32; 5] = [1, 10, 25, 50, 100];

/// Default configuration with a fixed seed and room for [`STRESS_LEVEL`].
pub fn reference_config(seed: u64) -> MazeConfig {
    MazeConfig {
        max_level: Dimensions::MAX_LEVEL,
        ..MazeConfig::with_seed(seed)
    }
}

/// Directions that take the player from its current cell to the goal.
///
/// Empty when the player already stands on the goal.
pub fn route_script(maze: &Maze) -> Vec<Direction> {
    let Some(route) = maze.route_from_player() else {
        return Vec::new();
    };
    route
        .windows(2)
        .filter_map(|pair| {
            let dx = pair[1].x as i64 - pair[0].x as i64;
            let dy = pair[1].y as i64 - pair[0].y as i64;
            Direction::from_delta(i32::try_from(dx).ok()?, i32::try_from(dy).ok()?)
        })
        .collect()
}
