//! Structural checks that do not rely on the search code under test.

use std::collections::VecDeque;
use warren_core::Position;
use warren_grid::Grid;

/// Flood fill over open cells from `start`; one flag per cell, row-major.
pub fn reachable(grid: &Grid, start: Position) -> Vec<bool> {
    let dims = grid.dimensions();
    let mut seen = vec![false; dims.cell_count()];
    let Some(i) = dims.index(start) else {
        return seen;
    };
    if !grid.is_open(start) {
        return seen;
    }
    seen[i] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(cur) = queue.pop_front() {
        for next in grid.open_neighbours(cur) {
            if let Some(j) = dims.index(next) {
                if !seen[j] {
                    seen[j] = true;
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

/// Panics if any border cell is open.
pub fn assert_border_is_wall(grid: &Grid) {
    let dims = grid.dimensions();
    for (pos, kind) in grid.iter() {
        if dims.is_border(pos) {
            assert!(!kind.is_open(), "border cell {pos} is {kind}");
        }
    }
}

/// Panics unless every open cell can be reached from `start`.
pub fn assert_connected_from(grid: &Grid, start: Position) {
    assert!(grid.is_open(start), "start {start} is not open");
    let seen = reachable(grid, start);
    for (i, (pos, kind)) in grid.iter().enumerate() {
        if kind.is_open() {
            assert!(seen[i], "open cell {pos} is unreachable from {start}");
        }
    }
}

/// Panics unless the open cells form a single tree: connected, with
/// exactly one fewer adjacency than open cells.
pub fn assert_perfect_maze(grid: &Grid) {
    let open = grid.open_count();
    assert!(open > 0, "grid has no open cells");
    let first = grid
        .iter()
        .find(|(_, kind)| kind.is_open())
        .map(|(pos, _)| pos)
        .expect("open cell exists");
    assert_connected_from(grid, first);
    assert_eq!(
        grid.open_connections(),
        open - 1,
        "open cells contain a cycle"
    );
}
