//! Concrete level scenarios.

use warren_core::{CellKind, Direction, Position};
use warren_engine::{Maze, MazeConfig, MazeError};
use warren_gen::FarthestPointFinder;
use warren_test_utils::{assert_border_is_wall, assert_connected_from};

#[test]
fn level_one_layout() {
    let m = Maze::seeded(1, 2024).unwrap();
    assert_eq!((m.width(), m.height()), (7, 7));
    assert_eq!(m.start_position(), Position::new(1, 1));
    assert_eq!(m.player_position(), Position::new(1, 1));
    assert_border_is_wall(m.grid());
    assert_connected_from(m.grid(), m.start_position());
}

#[test]
fn first_step_right_depends_on_the_wall() {
    for seed in 0..32 {
        let mut m = Maze::seeded(1, seed).unwrap();
        let open = m.cell_kind(2, 1) != Some(CellKind::Wall);
        assert_eq!(m.try_move(1, 0), open, "seed {seed}");
        let expected = if open {
            Position::new(2, 1)
        } else {
            Position::new(1, 1)
        };
        assert_eq!(m.player_position(), expected, "seed {seed}");
    }
}

#[test]
fn level_three_goal_is_unique_and_farthest() {
    for seed in [1, 7, 99, 31337] {
        let m = Maze::seeded(3, seed).unwrap();
        assert_eq!((m.width(), m.height()), (11, 11));
        let goals: Vec<_> = m.grid().positions_of(CellKind::Goal).collect();
        assert_eq!(goals, vec![m.goal_position()]);

        let map = FarthestPointFinder::distances(m.grid(), m.start_position()).unwrap();
        let max = m
            .grid()
            .iter()
            .filter(|(_, k)| k.is_open())
            .filter_map(|(p, _)| map.distance(p))
            .max()
            .unwrap();
        assert_eq!(map.distance(m.goal_position()), Some(max));
    }
}

#[test]
fn goal_is_reached_only_on_the_goal_cell() {
    let mut m = Maze::seeded(5, 4).unwrap();
    let route = m.route_from_player().unwrap();
    let (last, rest) = route.split_last().unwrap();
    for pair in rest.windows(2) {
        assert!(!m.is_goal_reached());
        let dir = Direction::from_delta(
            pair[1].x as i32 - pair[0].x as i32,
            pair[1].y as i32 - pair[0].y as i32,
        )
        .unwrap();
        assert!(m.try_step(dir));
    }
    // One step short of the goal.
    assert!(!m.is_goal_reached());
    let before = m.player_position();
    let dir = Direction::from_delta(
        last.x as i32 - before.x as i32,
        last.y as i32 - before.y as i32,
    )
    .unwrap();
    assert!(m.try_step(dir));
    assert!(m.is_goal_reached());
    assert_eq!(m.moves_made(), m.optimal_moves());
}

#[test]
fn restart_keeps_the_same_maze() {
    let mut m = Maze::seeded(4, 8).unwrap();
    let fingerprint = m.grid().fingerprint();
    for dir in Direction::ALL {
        m.try_step(dir);
    }
    m.reset_player();
    assert_eq!(m.player_position(), m.start_position());
    assert_eq!(m.grid().fingerprint(), fingerprint);
}

#[test]
fn levels_chain_through_next_level() {
    let cfg = MazeConfig::with_seed(17);
    let mut m = Maze::create(1, &cfg).unwrap();
    for expected in [9, 11, 13, 15] {
        m = m.next_level(&cfg).unwrap();
        assert_eq!(m.width(), expected);
        assert_eq!(m.player_position(), m.start_position());
    }
}

#[test]
fn level_above_max_is_refused() {
    let cfg = MazeConfig {
        max_level: 3,
        ..MazeConfig::with_seed(0)
    };
    let m = Maze::create(3, &cfg).unwrap();
    assert!(matches!(m.next_level(&cfg), Err(MazeError::Config(_))));
}
