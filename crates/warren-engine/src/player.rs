//! Player position and the movement rule.

use log::trace;
use warren_core::{Direction, Position};
use warren_grid::Grid;

/// The player's current cell.
///
/// The position is only ever handed out by value; the sole way to change
/// it is [`try_move`](PlayerState::try_move) (or a reset by the owning
/// maze).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerState {
    position: Position,
}

impl PlayerState {
    /// Place a player at `start`.
    pub fn new(start: Position) -> Self {
        Self { position: start }
    }

    /// Current cell.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Attempt a one-cell move on `grid`.
    ///
    /// `(0, 0)` is accepted without moving. Any other delta must be one
    /// of the four unit steps; the move is applied only if the target is
    /// strictly inside the border and not a wall. Rejected moves leave the
    /// position untouched.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        if (dx, dy) == (0, 0) {
            trace!("move (0, 0) at {}: stay", self.position);
            return true;
        }
        match Direction::from_delta(dx, dy) {
            Some(dir) => self.try_step(grid, dir),
            None => {
                trace!("move ({dx}, {dy}) at {}: not a unit step", self.position);
                false
            }
        }
    }

    /// Attempt a one-cell move in `dir` on `grid`.
    pub fn try_step(&mut self, grid: &Grid, dir: Direction) -> bool {
        let from = self.position;
        let accepted = match from.step(dir) {
            Some(target) if grid.is_inner(target) && grid.is_open(target) => {
                self.position = target;
                true
            }
            _ => false,
        };
        trace!(
            "move {dir} from {from}: {}",
            if accepted { "accepted" } else { "blocked" }
        );
        accepted
    }

    /// `true` iff the player stands exactly on `goal`.
    pub fn is_at(&self, goal: Position) -> bool {
        self.position == goal
    }

    pub(crate) fn reset(&mut self, start: Position) {
        self.position = start;
    }
}
