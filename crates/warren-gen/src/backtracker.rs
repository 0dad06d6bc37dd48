//! Randomized depth-first ("recursive backtracker") maze carving.
//!
//! Only odd-coordinate cells are graph nodes; the even cell between two
//! adjacent nodes is the wall that gets carved when the edge is taken.
//! The traversal visits every node exactly once and only ever carves
//! toward an unvisited node, so the result is a spanning tree of the
//! node lattice: a perfect maze.
//!
//! The walk uses an explicit stack of frames instead of the call
//! stack. Each frame shuffles its four directions when it is pushed and
//! then consumes them in order, which is exactly the draw order of the
//! recursive formulation, so both produce the same grid for the same RNG.
//!
//! Determinism contract: a [`MazeGenerator`] seeds a `ChaCha8Rng` from its
//! `u64` seed, so identical `(dimensions, seed)` pairs always carve
//! byte-identical grids on every platform.

use crate::error::GenError;
use log::debug;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use warren_core::{CellKind, Position};
use warren_grid::{Dimensions, Grid};

/// Fixed start node of every maze.
pub const START: Position = Position::new(1, 1);

/// Node-to-node offsets before shuffling: right, down, left, up.
pub const CARVE_OFFSETS: [(i32, i32); 4] = [(2, 0), (0, 2), (-2, 0), (0, -2)];

/// One pending node on the carving stack.
struct Frame {
    node: Position,
    dirs: [(i32, i32); 4],
    next: usize,
}

impl Frame {
    fn new<R: Rng + ?Sized>(node: Position, rng: &mut R) -> Self {
        let mut dirs = CARVE_OFFSETS;
        dirs.shuffle(rng);
        Self {
            node,
            dirs,
            next: 0,
        }
    }

    /// Next untried direction, advancing the cursor.
    fn pop_dir(&mut self) -> Option<(i32, i32)> {
        let dir = self.dirs.get(self.next).copied();
        self.next += 1;
        dir
    }
}

/// Carve a perfect maze into a fresh all-wall grid using `rng`.
///
/// The start node [`START`] is opened first; every other node reachable
/// on the lattice is then carved. Border cells are never touched.
pub fn carve<R: Rng + ?Sized>(dims: Dimensions, rng: &mut R) -> Result<Grid, GenError> {
    let mut grid = Grid::new(dims);
    let mut visited = vec![false; dims.cell_count()];
    let mark = |visited: &mut [bool], p: Position| {
        if let Some(i) = dims.index(p) {
            visited[i] = true;
        }
    };

    grid.set(START, CellKind::Path)?;
    mark(&mut visited, START);

    let mut stack = vec![Frame::new(START, rng)];
    let mut carved_nodes = 1usize;

    while let Some(top) = stack.last_mut() {
        let Some((dx, dy)) = top.pop_dir() else {
            stack.pop();
            continue;
        };
        let node = top.node;

        let Some(next) = node.offset(dx, dy) else {
            continue;
        };
        if !dims.is_inner(next) || dims.index(next).is_some_and(|i| visited[i]) {
            continue;
        }
        // Midpoint of two inner nodes is itself inner.
        let Some(wall) = node.offset(dx / 2, dy / 2) else {
            continue;
        };

        grid.set(wall, CellKind::Path)?;
        grid.set(next, CellKind::Path)?;
        mark(&mut visited, next);
        carved_nodes += 1;

        stack.push(Frame::new(next, rng));
    }

    debug!(
        "carved {}x{} maze: {} nodes, {} open cells",
        dims.width(),
        dims.height(),
        carved_nodes,
        grid.open_count()
    );
    Ok(grid)
}

/// Seeded perfect-maze generator.
///
/// # Examples
///
/// ```
/// use warren_gen::MazeGenerator;
/// use warren_grid::Dimensions;
///
/// let dims = Dimensions::new(11, 11).unwrap();
/// let a = MazeGenerator::new(7).generate(dims).unwrap();
/// let b = MazeGenerator::new(7).generate(dims).unwrap();
/// assert_eq!(a, b);
/// assert!(a.border_is_wall());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeGenerator {
    seed: u64,
}

impl MazeGenerator {
    /// Create a generator that will draw from `ChaCha8Rng::seed_from_u64(seed)`.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// The seed this generator was built with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Carve a perfect maze of the given dimensions.
    ///
    /// Each call starts from a freshly seeded RNG, so repeated calls on
    /// the same generator return the same grid.
    pub fn generate(&self, dims: Dimensions) -> Result<Grid, GenError> {
        debug!(
            "generating {}x{} maze with seed {}",
            dims.width(),
            dims.height(),
            self.seed
        );
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        carve(dims, &mut rng)
    }

    /// Carve a maze from raw `width`/`height`.
    ///
    /// # Errors
    ///
    /// [`GenError::Grid`] wrapping
    /// [`GridError::InvalidDimensions`](warren_grid::GridError::InvalidDimensions)
    /// if either side is even, below 7, or above the supported maximum.
    pub fn generate_sized(&self, width: u32, height: u32) -> Result<Grid, GenError> {
        self.generate(Dimensions::new(width, height)?)
    }
}
