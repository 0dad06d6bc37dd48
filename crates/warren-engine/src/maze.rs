//! The per-level maze façade.
//!
//! A [`Maze`] owns one generated grid, its fixed start and goal, and the
//! player's state. It is built in one shot by [`Maze::create`] and never
//! regenerated; advancing a level builds a fresh value with
//! [`Maze::next_level`].

use log::info;
use rand::Rng;
use warren_core::{CellKind, Direction, Level, Position};
use warren_gen::{FarthestPointFinder, MazeGenerator, START};
use warren_grid::{Dimensions, Grid};

use crate::config::MazeConfig;
use crate::error::MazeError;
use crate::player::PlayerState;

/// One playable maze level.
///
/// # Examples
///
/// ```
/// use warren_engine::{Maze, MazeConfig};
///
/// let mut maze = Maze::create(1, &MazeConfig::with_seed(3)).unwrap();
/// assert_eq!((maze.width(), maze.height()), (7, 7));
/// assert_eq!(maze.player_position(), maze.start_position());
///
/// // Walk the shortest route to the goal.
/// let route = maze.route_from_player().unwrap();
/// for pair in route.windows(2) {
///     let dx = pair[1].x as i32 - pair[0].x as i32;
///     let dy = pair[1].y as i32 - pair[0].y as i32;
///     assert!(maze.try_move(dx, dy));
/// }
/// assert!(maze.is_goal_reached());
/// ```
#[derive(Clone, Debug)]
pub struct Maze {
    level: Level,
    seed: u64,
    grid: Grid,
    start: Position,
    goal: Position,
    optimal_moves: u32,
    player: PlayerState,
    moves_made: u32,
}

impl Maze {
    /// Build the maze for `level`.
    ///
    /// The level is resolved through `config`, the grid is carved with
    /// the configured seed (or a freshly drawn one), the goal is placed
    /// at the open cell farthest from the start, and both cells are
    /// stamped into the grid.
    ///
    /// # Errors
    ///
    /// [`MazeError::Config`] if the level is refused by the config's
    /// [`LevelPolicy`](crate::LevelPolicy) or the config is invalid.
    pub fn create(level: u32, config: &MazeConfig) -> Result<Self, MazeError> {
        let level = config.resolve_level(level)?;
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let dims = Dimensions::for_level(level)?;

        let mut grid = MazeGenerator::new(seed).generate(dims)?;
        let far = FarthestPointFinder::farthest(&grid, START)?;
        grid.set(START, CellKind::Start)?;
        grid.set(far.position, CellKind::Goal)?;

        info!(
            "level {level}: {}x{} maze, seed {seed}, goal {} ({} moves)",
            dims.width(),
            dims.height(),
            far.position,
            far.distance
        );

        Ok(Self {
            level,
            seed,
            grid,
            start: START,
            goal: far.position,
            optimal_moves: far.distance,
            player: PlayerState::new(START),
            moves_made: 0,
        })
    }

    /// Build the maze for `level` from a fixed seed with default settings.
    pub fn seeded(level: u32, seed: u64) -> Result<Self, MazeError> {
        Self::create(level, &MazeConfig::with_seed(seed))
    }

    /// Build a fresh maze for the following level.
    ///
    /// `self` is left untouched.
    pub fn next_level(&self, config: &MazeConfig) -> Result<Self, MazeError> {
        Self::create(self.level.next().0, config)
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Level this maze was built for.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Seed the grid was carved with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// Kind of the cell at `(x, y)`, or `None` outside the grid.
    pub fn cell_kind(&self, x: u32, y: u32) -> Option<CellKind> {
        self.grid.get(Position::new(x, y))
    }

    /// The stamped grid, for rendering.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The player's current cell.
    pub fn player_position(&self) -> Position {
        self.player.position()
    }

    /// The goal cell.
    pub fn goal_position(&self) -> Position {
        self.goal
    }

    /// The start cell, always `(1, 1)`.
    pub fn start_position(&self) -> Position {
        self.start
    }

    /// `true` iff the player stands exactly on the goal.
    pub fn is_goal_reached(&self) -> bool {
        self.player.is_at(self.goal)
    }

    /// Length of the shortest route from start to goal.
    pub fn optimal_moves(&self) -> u32 {
        self.optimal_moves
    }

    /// Accepted non-zero moves since creation or the last reset.
    pub fn moves_made(&self) -> u32 {
        self.moves_made
    }

    /// Cells from the player's position to the goal, both inclusive.
    pub fn route_from_player(&self) -> Option<Vec<Position>> {
        FarthestPointFinder::distances(&self.grid, self.player.position())
            .ok()?
            .route_to(self.goal)
    }

    // ── Movement ───────────────────────────────────────────────────

    /// Attempt to move the player by `(dx, dy)`.
    ///
    /// See [`PlayerState::try_move`] for the acceptance rule.
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        let accepted = self.player.try_move(&self.grid, dx, dy);
        if accepted && (dx, dy) != (0, 0) {
            self.moves_made = self.moves_made.saturating_add(1);
        }
        accepted
    }

    /// Attempt to move the player one cell in `dir`.
    pub fn try_step(&mut self, dir: Direction) -> bool {
        let (dx, dy) = dir.delta();
        self.try_move(dx, dy)
    }

    /// Put the player back on the start cell and clear the move count.
    pub fn reset_player(&mut self) {
        self.player.reset(self.start);
        self.moves_made = 0;
    }
}
