//! Owned 2D cell-kind storage.

use crate::dims::Dimensions;
use crate::error::GridError;
use smallvec::SmallVec;
use warren_core::{CellKind, Position};

/// Fixed 4-neighbour expansion order: `+x, +y, -x, -y`.
///
/// Every search in Warren walks neighbours in this order so that results
/// depend only on the grid contents, never on iteration accidents.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A `width x height` array of [`CellKind`]s stored row-major.
///
/// The outer border is always [`CellKind::Wall`]: a fresh grid is all
/// wall, and [`set`](Grid::set) refuses to open border cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dims: Dimensions,
    cells: Vec<CellKind>,
}

impl Grid {
    /// Create a grid with every cell set to [`CellKind::Wall`].
    ///
    /// # Examples
    ///
    /// ```
    /// use warren_core::{CellKind, Position};
    /// use warren_grid::{Dimensions, Grid};
    ///
    /// let grid = Grid::new(Dimensions::new(7, 7).unwrap());
    /// assert_eq!(grid.get(Position::new(3, 3)), Some(CellKind::Wall));
    /// assert_eq!(grid.count(CellKind::Wall), 49);
    /// ```
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            cells: vec![CellKind::Wall; dims.cell_count()],
        }
    }

    /// Build a grid from a row-major cell buffer.
    ///
    /// Fails if the buffer length is wrong or any border cell is open.
    pub fn from_cells(dims: Dimensions, cells: Vec<CellKind>) -> Result<Self, GridError> {
        if cells.len() != dims.cell_count() {
            return Err(GridError::CellCountMismatch {
                expected: dims.cell_count(),
                actual: cells.len(),
            });
        }
        let grid = Self { dims, cells };
        if let Some(position) = grid.first_open_border_cell() {
            return Err(GridError::BorderNotWall { position });
        }
        Ok(grid)
    }

    /// Grid dimensions.
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Cell kind at `pos`, or `None` outside the grid.
    pub fn get(&self, pos: Position) -> Option<CellKind> {
        self.dims.index(pos).map(|i| self.cells[i])
    }

    /// Overwrite the cell at `pos`.
    ///
    /// Border cells may only ever be set to [`CellKind::Wall`].
    pub fn set(&mut self, pos: Position, kind: CellKind) -> Result<(), GridError> {
        let idx = self.dims.index(pos).ok_or(GridError::OutOfBounds {
            position: pos,
            width: self.width(),
            height: self.height(),
        })?;
        if kind.is_open() && !self.dims.is_inner(pos) {
            return Err(GridError::BorderNotWall { position: pos });
        }
        self.cells[idx] = kind;
        Ok(())
    }

    /// `true` if `pos` is inside the grid and not a wall.
    pub fn is_open(&self, pos: Position) -> bool {
        self.get(pos).is_some_and(CellKind::is_open)
    }

    /// `true` if `pos` lies strictly inside the border.
    pub fn is_inner(&self, pos: Position) -> bool {
        self.dims.is_inner(pos)
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.width() as usize)
    }

    /// Iterate every `(position, kind)` pair in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let dims = self.dims;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &k)| dims.position(i).map(|p| (p, k)))
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// Number of non-wall cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|k| k.is_open()).count()
    }

    /// Positions holding `kind`, in row-major order.
    pub fn positions_of(&self, kind: CellKind) -> impl Iterator<Item = Position> + '_ {
        self.iter().filter(move |&(_, k)| k == kind).map(|(p, _)| p)
    }

    /// In-bounds 4-neighbours of `pos` in [`NEIGHBOUR_OFFSETS`] order.
    pub fn neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| pos.offset(dx, dy))
            .filter(|&p| self.dims.contains(p))
            .collect()
    }

    /// Non-wall 4-neighbours of `pos` in [`NEIGHBOUR_OFFSETS`] order.
    pub fn open_neighbours(&self, pos: Position) -> SmallVec<[Position; 4]> {
        self.neighbours(pos)
            .into_iter()
            .filter(|&p| self.is_open(p))
            .collect()
    }

    /// Number of open horizontal and vertical adjacencies between
    /// non-wall cells. For a perfect maze this is `open_count() - 1`.
    pub fn open_connections(&self) -> usize {
        let mut edges = 0;
        for (pos, kind) in self.iter() {
            if !kind.is_open() {
                continue;
            }
            // Count each edge once, from its left/top endpoint.
            for (dx, dy) in [(1, 0), (0, 1)] {
                if pos.offset(dx, dy).is_some_and(|p| self.is_open(p)) {
                    edges += 1;
                }
            }
        }
        edges
    }

    /// `true` if every border cell is [`CellKind::Wall`].
    pub fn border_is_wall(&self) -> bool {
        self.first_open_border_cell().is_none()
    }

    fn first_open_border_cell(&self) -> Option<Position> {
        self.iter()
            .find(|&(p, k)| k.is_open() && self.dims.is_border(p))
            .map(|(p, _)| p)
    }
}
