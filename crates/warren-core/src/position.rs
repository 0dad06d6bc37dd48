//! Grid positions and cardinal movement directions.

use std::fmt;

/// An `(x, y)` cell coordinate inside a grid.
///
/// `x` is the column, `y` is the row; `(0, 0)` is the top-left corner.
/// Positions are plain values: every accessor in Warren hands out a copy,
/// so holding a `Position` can never alias or mutate maze state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    /// Column index.
    pub x: u32,
    /// Row index.
    pub y: u32,
}

impl Position {
    /// Creates a position from column `x` and row `y`.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Returns `self + (dx, dy)`, or `None` if either axis would leave
    /// the `u32` range.
    ///
    /// ```
    /// use warren_core::Position;
    ///
    /// assert_eq!(Position::new(1, 1).offset(1, 0), Some(Position::new(2, 1)));
    /// assert_eq!(Position::new(0, 3).offset(-1, 0), None);
    /// ```
    pub fn offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add_signed(dx)?,
            y: self.y.checked_add_signed(dy)?,
        })
    }

    /// Returns the neighbour one step away in `dir`, if representable.
    pub fn step(self, dir: Direction) -> Option<Self> {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Manhattan (L1) distance between two positions.
    pub fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal direction of a single player move.
///
/// `Up` decreases `y`, matching screen coordinates where row 0 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// One row up (`y - 1`).
    Up = 0,
    /// One row down (`y + 1`).
    Down = 1,
    /// One column left (`x - 1`).
    Left = 2,
    /// One column right (`x + 1`).
    Right = 3,
}

impl Direction {
    /// All four directions, in declaration order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the `(dx, dy)` offset for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Maps a unit `(dx, dy)` back to a direction; `None` for anything else.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
