//! Warren quickstart: build a few levels and walk each one to its goal.
//!
//! Demonstrates:
//!   1. Reading a `MazeConfig` from `WARREN_*` environment variables
//!   2. Creating a maze for a level and printing it
//!   3. Driving the player with `try_step` along the shortest route
//!   4. Restarting a level and advancing to the next one
//!
//! Run with:
//!   RUST_LOG=debug WARREN_SEED=42 cargo run --example quickstart

use warren_core::{Direction, Level};
use warren_engine::{Maze, MazeConfig};

// ─── Parameters ─────────────────────────────────────────────────

const FIRST_LEVEL: Level = Level::FIRST;
const LEVELS: u32 = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = MazeConfig::from_env()?;
    let mut maze = Maze::create(FIRST_LEVEL.0, &config)?;

    for _ in 0..LEVELS {
        println!(
            "level {} ({}x{}, seed {}):",
            maze.level(),
            maze.width(),
            maze.height(),
            maze.seed()
        );
        print!("{}", maze.grid());

        // A bump into the outer wall is always refused.
        assert!(!maze.try_step(Direction::Up));

        let route = maze.route_from_player().ok_or("goal unreachable")?;
        for pair in route.windows(2) {
            let dir = Direction::from_delta(
                pair[1].x as i32 - pair[0].x as i32,
                pair[1].y as i32 - pair[0].y as i32,
            )
            .ok_or("route step is not a unit move")?;
            maze.try_step(dir);
        }
        println!(
            "reached goal {}: {} in {} moves (optimal {})\n",
            maze.goal_position(),
            maze.is_goal_reached(),
            maze.moves_made(),
            maze.optimal_moves()
        );

        maze.reset_player();
        maze = maze.next_level(&config)?;
    }

    Ok(())
}
