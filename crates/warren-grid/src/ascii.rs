//! Plain-text grid format.
//!
//! One line per row, one character per cell:
//!
//! | Glyph | Cell |
//! |-------|------|
//! | `#` | [`CellKind::Wall`] |
//! | space or `.` | [`CellKind::Path`] |
//! | `S` | [`CellKind::Start`] |
//! | `G` | [`CellKind::Goal`] |
//!
//! ```text
//! #######
//! #S    #
//! ##### #
//! #     #
//! # #####
//! #    G#
//! #######
//! ```

use crate::dims::Dimensions;
use crate::error::GridError;
use crate::grid::Grid;
use std::fmt;
use warren_core::CellKind;

impl Grid {
    /// Parse the plain-text format: `#` wall, space or `.` path, `S` start,
    /// `G` goal.
    ///
    /// Blank trailing lines are ignored and `\r\n` endings are accepted.
    /// All rows must have the same length, the resulting dimensions must
    /// be valid, and the border must be wall.
    pub fn from_ascii(text: &str) -> Result<Self, GridError> {
        let mut lines: Vec<&str> = text.lines().map(|l| l.trim_end_matches('\r')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let Some(first) = lines.first() else {
            return Err(GridError::Parse {
                line: 0,
                reason: "input is empty".into(),
            });
        };
        let width = first.chars().count();

        let mut cells = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != width {
                return Err(GridError::Parse {
                    line: row + 1,
                    reason: format!("expected {width} cells, found {len}"),
                });
            }
            for (col, c) in line.chars().enumerate() {
                let kind = CellKind::from_glyph(c).ok_or_else(|| GridError::Parse {
                    line: row + 1,
                    reason: format!("unknown glyph {c:?} at column {}", col + 1),
                })?;
                cells.push(kind);
            }
        }

        let width = u32::try_from(width).map_err(|_| GridError::Parse {
            line: 1,
            reason: "row too long".into(),
        })?;
        let height = u32::try_from(lines.len()).map_err(|_| GridError::Parse {
            line: 0,
            reason: "too many rows".into(),
        })?;
        Grid::from_cells(Dimensions::new(width, height)?, cells)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for kind in row {
                write!(f, "{}", kind.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use warren_core::Position;

    const CORRIDOR: &str = "\
#######
#S    #
##### #
#     #
# #####
#    G#
#######
";

    #[test]
    fn parses_glyphs() {
        let g = Grid::from_ascii(CORRIDOR).unwrap();
        assert_eq!((g.width(), g.height()), (7, 7));
        assert_eq!(g.get(Position::new(1, 1)), Some(CellKind::Start));
        assert_eq!(g.get(Position::new(5, 5)), Some(CellKind::Goal));
        assert_eq!(g.get(Position::new(5, 2)), Some(CellKind::Path));
        assert_eq!(g.get(Position::new(1, 2)), Some(CellKind::Wall));
    }

    #[test]
    fn display_reproduces_input() {
        let g = Grid::from_ascii(CORRIDOR).unwrap();
        assert_eq!(g.to_string(), CORRIDOR);
    }

    #[test]
    fn dots_and_crlf_are_accepted() {
        let text = CORRIDOR.replace(' ', ".").replace('\n', "\r\n");
        let g = Grid::from_ascii(&text).unwrap();
        assert_eq!(g, Grid::from_ascii(CORRIDOR).unwrap());
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let text = "#######\n#S   #\n#######\n";
        assert!(matches!(
            Grid::from_ascii(text),
            Err(GridError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn unknown_glyph_is_rejected() {
        let text = CORRIDOR.replace('G', "X");
        assert!(matches!(
            Grid::from_ascii(&text),
            Err(GridError::Parse { line: 6, .. })
        ));
    }

    #[test]
    fn small_or_even_grids_are_rejected() {
        assert!(matches!(
            Grid::from_ascii("#####\n#   #\n#####\n"),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Grid::from_ascii(""),
            Err(GridError::Parse { line: 0, .. })
        ));
    }

    #[test]
    fn open_border_is_rejected() {
        let text = CORRIDOR.replacen("#######", "### ###", 1);
        assert!(matches!(
            Grid::from_ascii(&text),
            Err(GridError::BorderNotWall { .. })
        ));
    }
}
