//! Maze dimensions and the level-to-size formula.

use crate::error::GridError;
use warren_core::{Level, Position};

/// Validated grid dimensions: both sides odd and within
/// [`MIN_SIDE`](Dimensions::MIN_SIDE)..=[`MAX_SIDE`](Dimensions::MAX_SIDE).
///
/// Odd sides put lattice nodes on every odd coordinate with a wall
/// column/row on every even one, so the outer ring is always even
/// (0 and `side - 1`) and therefore wall.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Smallest legal side length (level 1).
    pub const MIN_SIDE: u32 = 7;

    /// Largest legal side length. Keeps `width * height` well inside
    /// `usize` on 32-bit targets and bounds construction memory.
    pub const MAX_SIDE: u32 = 8191;

    /// Highest level whose side fits in [`MAX_SIDE`](Dimensions::MAX_SIDE).
    pub const MAX_LEVEL: u32 = (Self::MAX_SIDE - Self::MIN_SIDE) / 2 + 1;

    /// Validate explicit dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_grid::Dimensions;
    ///
    /// assert!(Dimensions::new(7, 9).is_ok());
    /// assert!(Dimensions::new(8, 9).is_err()); // even width
    /// assert!(Dimensions::new(5, 5).is_err()); // too small
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        let invalid = |reason| GridError::InvalidDimensions {
            width,
            height,
            reason,
        };
        if width < Self::MIN_SIDE || height < Self::MIN_SIDE {
            return Err(invalid("sides must be at least 7"));
        }
        if width > Self::MAX_SIDE || height > Self::MAX_SIDE {
            return Err(invalid("sides must be at most 8191"));
        }
        if width % 2 == 0 || height % 2 == 0 {
            return Err(invalid("sides must be odd"));
        }
        Ok(Self { width, height })
    }

    /// Square dimensions for `level`: `7 + 2 * (level - 1)` on each side.
    ///
    /// Level 1 is 7x7, level 2 is 9x9, level 3 is 11x11, and so on.
    ///
    /// # Errors
    ///
    /// [`GridError::InvalidLevel`] for level 0 and
    /// [`GridError::LevelTooLarge`] above [`MAX_LEVEL`](Dimensions::MAX_LEVEL).
    pub fn for_level(level: Level) -> Result<Self, GridError> {
        let side = Self::side_for_level(level)?;
        Self::new(side, side)
    }

    /// Side length for `level` without building a `Dimensions`.
    pub fn side_for_level(level: Level) -> Result<u32, GridError> {
        let Level(n) = level;
        if n == 0 {
            return Err(GridError::InvalidLevel { level: n });
        }
        if n > Self::MAX_LEVEL {
            return Err(GridError::LevelTooLarge {
                level: n,
                max: Self::MAX_LEVEL,
            });
        }
        Ok(Self::MIN_SIDE + 2 * (n - 1))
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` if `pos` lies anywhere in the grid, border included.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// `true` if `pos` lies strictly inside the border:
    /// `1 <= x <= width - 2` and `1 <= y <= height - 2`.
    pub fn is_inner(&self, pos: Position) -> bool {
        pos.x >= 1 && pos.y >= 1 && pos.x <= self.width - 2 && pos.y <= self.height - 2
    }

    /// `true` if `pos` is on the outer ring.
    pub fn is_border(&self, pos: Position) -> bool {
        self.contains(pos) && !self.is_inner(pos)
    }

    /// Row-major index of `pos`, or `None` if out of bounds.
    pub fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// Inverse of [`index`](Dimensions::index).
    pub fn position(&self, index: usize) -> Option<Position> {
        if index >= self.cell_count() {
            return None;
        }
        let w = self.width as usize;
        Some(Position::new((index % w) as u32, (index / w) as u32))
    }

    /// Number of lattice nodes (odd-coordinate cells) in the grid.
    ///
    /// A perfect maze carves every node, so this is also the number of
    /// tree vertices after generation.
    pub fn node_count(&self) -> usize {
        (self.width as usize / 2) * (self.height as usize / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn level_one_is_seven_by_seven() {
        let d = Dimensions::for_level(Level(1)).unwrap();
        assert_eq!((d.width(), d.height()), (7, 7));
    }

    #[test]
    fn level_three_is_eleven_by_eleven() {
        let d = Dimensions::for_level(Level(3)).unwrap();
        assert_eq!((d.width(), d.height()), (11, 11));
    }

    #[test]
    fn level_zero_is_rejected() {
        assert_eq!(
            Dimensions::for_level(Level(0)),
            Err(GridError::InvalidLevel { level: 0 })
        );
    }

    #[test]
    fn max_level_fits_max_side() {
        let d = Dimensions::for_level(Level(Dimensions::MAX_LEVEL)).unwrap();
        assert_eq!(d.width(), Dimensions::MAX_SIDE);
        assert!(matches!(
            Dimensions::for_level(Level(Dimensions::MAX_LEVEL + 1)),
            Err(GridError::LevelTooLarge { .. })
        ));
    }

    #[test]
    fn new_rejects_even_and_small() {
        assert!(matches!(
            Dimensions::new(8, 7),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(7, 8),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(5, 7),
            Err(GridError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Dimensions::new(7, Dimensions::MAX_SIDE + 2),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn inner_excludes_border() {
        let d = Dimensions::new(7, 9).unwrap();
        assert!(d.is_inner(Position::new(1, 1)));
        assert!(d.is_inner(Position::new(5, 7)));
        assert!(!d.is_inner(Position::new(0, 3)));
        assert!(!d.is_inner(Position::new(6, 3)));
        assert!(!d.is_inner(Position::new(3, 8)));
        assert!(!d.is_inner(Position::new(3, 0)));
        assert!(d.is_border(Position::new(6, 8)));
        assert!(!d.is_border(Position::new(7, 8)));
    }

    #[test]
    fn index_roundtrip_at_corners() {
        let d = Dimensions::new(9, 7).unwrap();
        assert_eq!(d.index(Position::new(0, 0)), Some(0));
        assert_eq!(d.index(Position::new(8, 6)), Some(62));
        assert_eq!(d.index(Position::new(9, 0)), None);
        assert_eq!(d.position(62), Some(Position::new(8, 6)));
        assert_eq!(d.position(63), None);
    }

    #[test]
    fn node_count_matches_odd_coordinates() {
        let d = Dimensions::new(11, 7).unwrap();
        // x in {1,3,5,7,9}, y in {1,3,5}
        assert_eq!(d.node_count(), 15);
    }

    proptest! {
        #[test]
        fn level_sides_are_odd_and_grow_by_two(level in 1u32..2000) {
            let d = Dimensions::for_level(Level(level)).unwrap();
            prop_assert_eq!(d.width(), d.height());
            prop_assert_eq!(d.width() % 2, 1);
            prop_assert!(d.width() >= Dimensions::MIN_SIDE);
            prop_assert_eq!(d.width(), 7 + 2 * (level - 1));
        }
    }
}
