//! Breadth-first goal placement.
//!
//! [`FarthestPointFinder`] runs a BFS from the start over non-wall cells,
//! expanding neighbours in the fixed [`NEIGHBOUR_OFFSETS`] order
//! (`+x, +y, -x, -y`). A newly discovered cell becomes the farthest
//! candidate only when its distance is *strictly* greater than the running
//! maximum, so the first cell discovered at the maximum distance wins and
//! the start itself (distance 0) is never a candidate.
//!
//! Every non-wall kind is traversable, not only `Path`: goal placement runs
//! before `Start` and `Goal` are stamped, so the result is the same, and
//! route queries keep working on a stamped grid.
//!
//! On a perfect maze the search reaches every open cell exactly once, and
//! the parent links it records describe the unique route back to the start.

use crate::error::GenError;
use log::debug;
use std::collections::VecDeque;
use warren_core::Position;
use warren_grid::{Dimensions, Grid, NEIGHBOUR_OFFSETS};

/// The selected goal cell and its hop distance from the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FarthestPoint {
    /// Cell with the greatest BFS distance (first discovered on ties).
    pub position: Position,
    /// Number of moves from the start.
    pub distance: u32,
}

/// BFS hop distances and parent links from a single start cell.
#[derive(Clone, Debug)]
pub struct DistanceMap {
    dims: Dimensions,
    start: Position,
    dist: Vec<Option<u32>>,
    parent: Vec<Option<Position>>,
    farthest: Option<FarthestPoint>,
    reached: usize,
}

impl DistanceMap {
    /// The search start.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Hop distance from the start, or `None` if `pos` was not reached.
    pub fn distance(&self, pos: Position) -> Option<u32> {
        self.dims.index(pos).and_then(|i| self.dist[i])
    }

    /// `true` if the search reached `pos`.
    pub fn is_reachable(&self, pos: Position) -> bool {
        self.distance(pos).is_some()
    }

    /// Number of cells reached, start included.
    pub fn reachable_count(&self) -> usize {
        self.reached
    }

    /// Farthest cell, or `None` when nothing but the start was reached.
    pub fn farthest(&self) -> Option<FarthestPoint> {
        self.farthest
    }

    /// Greatest distance recorded (0 if only the start was reached).
    pub fn max_distance(&self) -> u32 {
        self.farthest.map_or(0, |f| f.distance)
    }

    /// Cells from the start to `target`, both inclusive.
    ///
    /// Returns `None` when `target` was not reached. On a perfect maze
    /// this is the only simple path between the two cells.
    pub fn route_to(&self, target: Position) -> Option<Vec<Position>> {
        let hops = self.distance(target)?;
        let mut route = Vec::with_capacity(hops as usize + 1);
        let mut cur = target;
        route.push(cur);
        while cur != self.start {
            cur = self.dims.index(cur).and_then(|i| self.parent[i])?;
            route.push(cur);
        }
        route.reverse();
        Some(route)
    }
}

/// Breadth-first search used to place the goal.
///
/// Stateless; every method takes the grid and start explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarthestPointFinder;

impl FarthestPointFinder {
    /// Run the search and return the full distance map.
    ///
    /// # Errors
    ///
    /// [`GenError::StartNotOpen`] if `start` is outside the grid or a wall.
    pub fn distances(grid: &Grid, start: Position) -> Result<DistanceMap, GenError> {
        let dims = grid.dimensions();
        let start_idx = match dims.index(start) {
            Some(i) if grid.is_open(start) => i,
            _ => return Err(GenError::StartNotOpen { start }),
        };

        let n = dims.cell_count();
        let mut dist: Vec<Option<u32>> = vec![None; n];
        let mut parent: Vec<Option<Position>> = vec![None; n];
        let mut queue = VecDeque::new();
        let mut farthest: Option<FarthestPoint> = None;
        let mut max_distance = 0u32;
        let mut reached = 1usize;

        dist[start_idx] = Some(0);
        queue.push_back((start, 0u32));

        while let Some((cur, d)) = queue.pop_front() {
            for (dx, dy) in NEIGHBOUR_OFFSETS {
                let Some(next) = cur.offset(dx, dy) else {
                    continue;
                };
                if !grid.is_inner(next) || !grid.is_open(next) {
                    continue;
                }
                let Some(i) = dims.index(next) else {
                    continue;
                };
                if dist[i].is_some() {
                    continue;
                }
                let nd = d + 1;
                dist[i] = Some(nd);
                parent[i] = Some(cur);
                reached += 1;
                if nd > max_distance {
                    max_distance = nd;
                    farthest = Some(FarthestPoint {
                        position: next,
                        distance: nd,
                    });
                }
                queue.push_back((next, nd));
            }
        }

        Ok(DistanceMap {
            dims,
            start,
            dist,
            parent,
            farthest,
            reached,
        })
    }

    /// The open cell farthest from `start`, with its distance.
    ///
    /// # Errors
    ///
    /// [`GenError::StartNotOpen`] if `start` is not an open cell, and
    /// [`GenError::NoReachableCell`] if no other open cell is reachable.
    pub fn farthest(grid: &Grid, start: Position) -> Result<FarthestPoint, GenError> {
        let map = Self::distances(grid, start)?;
        let point = map
            .farthest()
            .ok_or(GenError::NoReachableCell { start })?;
        debug!(
            "farthest cell from {start} is {} at distance {} ({} cells reached)",
            point.position,
            point.distance,
            map.reachable_count()
        );
        Ok(point)
    }

    /// Position of the open cell farthest from `start`.
    pub fn find_farthest(grid: &Grid, start: Position) -> Result<Position, GenError> {
        Self::farthest(grid, start).map(|p| p.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backtracker::{MazeGenerator, START};
    use warren_core::CellKind;
    use warren_test_utils::fixtures;

    #[test]
    fn serpentine_corridor_ends_at_far_end() {
        let g = fixtures::serpentine_7x7();
        let p = FarthestPointFinder::farthest(&g, START).unwrap();
        assert_eq!(p.position, Position::new(5, 5));
        assert_eq!(p.distance, 16);
    }

    #[test]
    fn first_cell_at_max_distance_wins() {
        // Two branches of equal length leave (3,1): one ends at (1,5),
        // the other at (5,5). With +x expanded before -x the right branch
        // is discovered first at every depth, so (5,5) wins the tie.
        let g = fixtures::forked_7x7();
        let p = FarthestPointFinder::farthest(&g, Position::new(3, 1)).unwrap();
        assert_eq!(p.position, Position::new(5, 5));
        assert_eq!(p.distance, 6);
        let map = FarthestPointFinder::distances(&g, Position::new(3, 1)).unwrap();
        assert_eq!(map.distance(Position::new(1, 5)), Some(6));
    }

    #[test]
    fn start_must_be_open() {
        let g = fixtures::serpentine_7x7();
        assert_eq!(
            FarthestPointFinder::farthest(&g, Position::new(0, 0)),
            Err(GenError::StartNotOpen {
                start: Position::new(0, 0)
            })
        );
        assert_eq!(
            FarthestPointFinder::farthest(&g, Position::new(40, 1)),
            Err(GenError::StartNotOpen {
                start: Position::new(40, 1)
            })
        );
    }

    #[test]
    fn isolated_start_has_no_farthest() {
        let mut g = Grid::new(Dimensions::new(7, 7).unwrap());
        g.set(START, CellKind::Path).unwrap();
        assert_eq!(
            FarthestPointFinder::farthest(&g, START),
            Err(GenError::NoReachableCell { start: START })
        );
        let map = FarthestPointFinder::distances(&g, START).unwrap();
        assert_eq!(map.reachable_count(), 1);
        assert_eq!(map.max_distance(), 0);
    }

    #[test]
    fn stamped_cells_are_traversed() {
        // Start and goal annotations do not block the search.
        let g = fixtures::serpentine_7x7_stamped();
        let map = FarthestPointFinder::distances(&g, START).unwrap();
        assert_eq!(map.distance(Position::new(5, 5)), Some(16));
    }

    #[test]
    fn stamping_does_not_move_the_goal() {
        let mut g = MazeGenerator::new(21).generate(Dimensions::new(15, 15).unwrap()).unwrap();
        let before = FarthestPointFinder::farthest(&g, START).unwrap();
        g.set(START, CellKind::Start).unwrap();
        g.set(before.position, CellKind::Goal).unwrap();
        let after = FarthestPointFinder::farthest(&g, START).unwrap();
        assert_eq!(after, before);
        let route = FarthestPointFinder::distances(&g, START)
            .unwrap()
            .route_to(before.position)
            .unwrap();
        assert_eq!(route.len() as u32, before.distance + 1);
    }

    #[test]
    fn route_follows_parent_links() {
        let g = fixtures::serpentine_7x7();
        let map = FarthestPointFinder::distances(&g, START).unwrap();
        let route = map.route_to(Position::new(5, 3)).unwrap();
        assert_eq!(route.first(), Some(&START));
        assert_eq!(route.last(), Some(&Position::new(5, 3)));
        assert_eq!(route.len(), 1 + map.distance(Position::new(5, 3)).unwrap() as usize);
        for pair in route.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
            assert!(g.is_open(pair[1]));
        }
        assert_eq!(map.route_to(START), Some(vec![START]));
        assert_eq!(map.route_to(Position::new(2, 2)), None);
    }

    #[test]
    fn generated_maze_reaches_every_open_cell() {
        let g = MazeGenerator::new(8).generate(Dimensions::new(19, 19).unwrap()).unwrap();
        let map = FarthestPointFinder::distances(&g, START).unwrap();
        assert_eq!(map.reachable_count(), g.open_count());
        let far = map.farthest().unwrap();
        for (pos, kind) in g.iter() {
            if kind.is_open() {
                assert!(map.distance(pos).unwrap() <= far.distance);
            }
        }
    }
}
