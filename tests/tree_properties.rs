use std::collections::HashSet;

use proptest::prelude::*;
use space_filling_tree::Coord;
use space_filling_tree::Point;
use space_filling_tree::SpaceFillingTree;

/// Farthest reach of the rings on either axis, halving with truncation like the tree does.
fn expected_extent(radius: Coord, depth: u32) -> Coord {
    let mut offset = radius / 2;
    let mut extent = 0;

    for _ in 0..=depth {
        extent += offset;
        offset /= 2;
    }

    extent
}

fn extent(tree: &SpaceFillingTree, center: Point) -> Coord {
    tree.iter()
        .map(|node| node.position().chebyshev_distance(&center))
        .max()
        .unwrap_or(0)
}

#[test]
fn invariant_holds_for_depth_sweep() {
    for depth in 0..=6 {
        for radius in [0, 1, 99, 1000, 123_456_789] {
            let tree = SpaceFillingTree::new(Point::new(-40, 17), radius, depth);

            assert_eq!(tree.check(), Ok(()), "depth {depth}, radius {radius}");
        }
    }
}

#[test]
fn first_ring_scenario() {
    let tree = SpaceFillingTree::new(Point::new(0, 0), 100, 0);
    assert_eq!(tree.len(), 5);

    let points: Vec<_> = tree.points().collect();
    assert_eq!(
        points,
        [
            Point::new(0, 0),
            Point::new(50, 50),
            Point::new(0, 0),
            Point::new(-50, 50),
            Point::new(0, 0),
            Point::new(-50, -50),
            Point::new(0, 0),
            Point::new(50, -50),
            Point::new(0, 0),
        ]
    );
}

#[test]
fn zero_radius_scenario() {
    for depth in 0..=3 {
        let tree = SpaceFillingTree::new(Point::new(0, 0), 0, depth);

        assert!(tree.points().all(|p| p == Point::new(0, 0)));
        assert_eq!(tree.points().count(), 2 * (tree.len() - 1) + 1);
        assert_eq!(tree.len(), 4usize.pow(depth + 1) + 1);
    }
}

#[test]
fn extent_approaches_radius() {
    let center = Point::new(0, 0);
    let mut last = 0;

    for depth in 0..=6 {
        let tree = SpaceFillingTree::new(center, 1024, depth);
        let reach = extent(&tree, center);

        assert!(reach >= last);
        assert!(reach <= 1024);
        last = reach;
    }

    // 512 + 256 + ... + 8
    assert_eq!(last, 1016);
}

#[test]
fn truncating_offsets_drift_below_radius() {
    // 1000 / 2 / 2 / 2 ... loses a little on every odd offset
    let tree = SpaceFillingTree::new(Point::new(0, 0), 1000, 6);

    assert_eq!(extent(&tree, Point::new(0, 0)), 990);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn structure(
        radius in 0i64..10_000_000,
        depth in 0u32..=5,
        x in -1_000_000i64..1_000_000,
        y in -1_000_000i64..1_000_000,
    ) {
        let center = Point::new(x, y);
        let tree = SpaceFillingTree::new(center, radius, depth);

        prop_assert_eq!(tree.check(), Ok(()));

        // depth bound: the root holds the whole budget, everything below at most one less
        let root = tree.root();
        prop_assert_eq!(root.position(), center);
        prop_assert_eq!(root.depth_remaining(), depth + 1);
        for node in tree.iter().filter(|node| node.id() != root.id()) {
            prop_assert!(node.depth_remaining() <= depth);
            prop_assert!(node.parent().is_some());
        }

        // convergence
        let reach = extent(&tree, center);
        prop_assert!(reach <= radius);
        prop_assert_eq!(reach, expected_extent(radius, depth));
        prop_assert!(tree.iter().all(|node| tree.bbox().contains(&node.position())));
    }

    #[test]
    fn walk(
        radius in 0i64..10_000_000,
        depth in 0u32..=5,
    ) {
        let tree = SpaceFillingTree::new(Point::new(0, 0), radius, depth);

        let mut walked = Vec::new();
        tree.walk(&mut |p: Point| walked.push(p));

        // every edge out and back, plus the first visit to the root
        prop_assert_eq!(walked.len(), 2 * (tree.len() - 1) + 1);
        prop_assert_eq!(walked.first(), Some(&Point::new(0, 0)));
        prop_assert_eq!(walked.last(), Some(&Point::new(0, 0)));

        let visited: HashSet<_> = walked.iter().copied().collect();
        for node in tree.iter() {
            prop_assert!(visited.contains(&node.position()));
        }

        // consecutive visits always sit at the two ends of one edge
        let edges: HashSet<_> = tree
            .iter()
            .filter_map(|node| node.parent().map(|parent| (parent.position(), node.position())))
            .collect();
        for pair in walked.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!(edges.contains(&(a, b)) || edges.contains(&(b, a)));
        }

        // restartable
        let again: Vec<_> = tree.points().collect();
        prop_assert_eq!(walked, again);
    }
}
