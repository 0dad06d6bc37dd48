//! Generator and goal-search properties over many sizes and seeds.

use proptest::prelude::*;
use warren_core::CellKind;
use warren_gen::{FarthestPointFinder, MazeGenerator, START};
use warren_grid::Dimensions;
use warren_test_utils::{assert_border_is_wall, assert_perfect_maze, reachable};

fn odd_side() -> impl Strategy<Value = u32> {
    (3u32..=20).prop_map(|k| 2 * k + 1)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn any_odd_rectangle_carves_a_perfect_maze(
        w in odd_side(),
        h in odd_side(),
        seed in any::<u64>(),
    ) {
        let dims = Dimensions::new(w, h).unwrap();
        let g = MazeGenerator::new(seed).generate(dims).unwrap();
        assert_border_is_wall(&g);
        assert_perfect_maze(&g);
        prop_assert_eq!(g.open_count(), 2 * dims.node_count() - 1);
        prop_assert_eq!(g.count(CellKind::Start) + g.count(CellKind::Goal), 0);
    }

    #[test]
    fn goal_distance_is_the_maximum(
        w in odd_side(),
        h in odd_side(),
        seed in any::<u64>(),
    ) {
        let g = MazeGenerator::new(seed).generate(Dimensions::new(w, h).unwrap()).unwrap();
        let far = FarthestPointFinder::farthest(&g, START).unwrap();
        let map = FarthestPointFinder::distances(&g, START).unwrap();
        let seen = reachable(&g, START);
        for (i, (pos, _)) in g.iter().enumerate() {
            prop_assert_eq!(map.is_reachable(pos), seen[i]);
            if let Some(d) = map.distance(pos) {
                prop_assert!(d <= far.distance);
            }
        }
        prop_assert!(far.position != START);
        prop_assert_eq!(map.route_to(far.position).map(|r| r.len() as u32), Some(far.distance + 1));
    }
}

#[test]
fn goal_search_is_repeatable() {
    let g = MazeGenerator::new(123).generate(Dimensions::new(41, 41).unwrap()).unwrap();
    let a = FarthestPointFinder::farthest(&g, START).unwrap();
    let b = FarthestPointFinder::farthest(&g, START).unwrap();
    assert_eq!(a, b);
}
