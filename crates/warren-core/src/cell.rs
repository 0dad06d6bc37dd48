//! Cell kinds stored in a maze grid.

use std::fmt;

/// What occupies a single grid cell.
///
/// `Start` and `Goal` are display annotations stamped over cells that are
/// topologically still passages: anything other than [`CellKind::Wall`]
/// can be walked on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellKind {
    /// Solid, impassable cell.
    #[default]
    Wall = 0,
    /// Carved passage.
    Path = 1,
    /// Passage where the player begins.
    Start = 2,
    /// Passage the player must reach.
    Goal = 3,
}

impl CellKind {
    /// `true` for every kind except [`CellKind::Wall`].
    pub fn is_open(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    /// ASCII glyph used by grid dumps and fixtures.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Path => ' ',
            CellKind::Start => 'S',
            CellKind::Goal => 'G',
        }
    }

    /// Inverse of [`glyph`](CellKind::glyph). `.` is accepted as an
    /// alternative path glyph so fixtures survive editors that strip
    /// trailing spaces.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '#' => Some(CellKind::Wall),
            ' ' | '.' => Some(CellKind::Path),
            'S' => Some(CellKind::Start),
            'G' => Some(CellKind::Goal),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CellKind::Wall => "wall",
            CellKind::Path => "path",
            CellKind::Start => "start",
            CellKind::Goal => "goal",
        };
        f.write_str(name)
    }
}
