//! QuadTree properties over random inputs
//!
//! Run with: cargo test --test partition_integration_tests

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use quadview_engine::quadview::math::{subdivide, AABB};
use quadview_engine::quadview::partition::QuadTree;

fn random_aabb(rng: &mut StdRng, field: f32) -> AABB {
    let size = Vec2::new(rng.gen_range(0.5..40.0), rng.gen_range(0.5..40.0));
    let min = Vec2::new(
        rng.gen_range(0.0..field - size.x),
        rng.gen_range(0.0..field - size.y),
    );
    AABB::new(min, min + size)
}

#[test]
fn test_integration_subdivide_tiles_parent() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let parent = random_aabb(&mut rng, 500.0);
        let children = subdivide(&parent);

        let area: f32 = children.iter().map(AABB::area).sum();
        assert!((area - parent.area()).abs() <= parent.area() * 1e-4);

        let bounds = AABB::from_points(&children.iter().flat_map(|c| [c.min, c.max]).collect::<Vec<_>>()).unwrap();
        assert_eq!(bounds, parent);
        for child in &children {
            assert!(parent.contains(child));
        }
    }
}

#[test]
fn test_integration_add_to_tree_contains_input() {
    let mut rng = StdRng::seed_from_u64(2);
    for depth in 0..7 {
        let mut tree = QuadTree::new(AABB::square(512.0), depth);
        for _ in 0..200 {
            let aabb = random_aabb(&mut rng, 512.0);
            let node = tree.add_to_tree(&aabb);
            assert!(tree.node(node).unwrap().aabb().contains(&aabb));
            assert!(tree.depth_of(node).unwrap() <= depth);
        }
    }
}

#[test]
fn test_integration_rebuild_is_isomorphic() {
    let mut rng = StdRng::seed_from_u64(3);
    let aabbs: Vec<AABB> = (0..300).map(|_| random_aabb(&mut rng, 512.0)).collect();
    let mut tree = QuadTree::new(AABB::square(512.0), 5);

    let first: Vec<usize> = aabbs.iter().map(|a| tree.add_to_tree(a)).collect();
    let snapshot: Vec<_> = tree.nodes().map(|(i, n)| (i, n.clone())).collect();

    tree.clear();
    assert_eq!(tree.node_count(), 1);

    let second: Vec<usize> = aabbs.iter().map(|a| tree.add_to_tree(a)).collect();
    let rebuilt: Vec<_> = tree.nodes().map(|(i, n)| (i, n.clone())).collect();

    assert_eq!(first, second);
    assert_eq!(snapshot, rebuilt);
}

#[test]
fn test_integration_parent_links_are_consistent() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut tree = QuadTree::new(AABB::square(256.0), 6);
    for _ in 0..200 {
        tree.add_to_tree(&random_aabb(&mut rng, 256.0));
    }

    for (index, node) in tree.nodes() {
        for child in node.children().iter().flatten() {
            let child_node = tree.node(*child).unwrap();
            assert_eq!(child_node.parent(), Some(index));
            assert!(node.aabb().contains(child_node.aabb()));
        }
        if !node.is_root() {
            assert!(tree.ancestors(index).last() == Some(0));
        }
    }
}
