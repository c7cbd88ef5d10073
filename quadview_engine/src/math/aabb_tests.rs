use glam::Vec2;
use super::*;

fn make_aabb(min: (f32, f32), max: (f32, f32)) -> AABB {
    AABB::new(Vec2::new(min.0, min.1), Vec2::new(max.0, max.1))
}

// ============================================================================
// Derived measures
// ============================================================================

#[test]
fn test_width_height_area() {
    let a = make_aabb((2.0, 3.0), (10.0, 7.0));
    assert_eq!(a.width(), 8.0);
    assert_eq!(a.height(), 4.0);
    assert_eq!(a.area(), 32.0);
    assert_eq!(a.center(), Vec2::new(6.0, 5.0));
}

#[test]
fn test_from_points() {
    let points = [Vec2::new(3.0, -1.0), Vec2::new(-2.0, 4.0), Vec2::new(1.0, 1.0)];
    let a = AABB::from_points(&points).unwrap();
    assert_eq!(a, make_aabb((-2.0, -1.0), (3.0, 4.0)));
    assert!(AABB::from_points(&[]).is_none());
}

#[test]
fn test_rect_vertex_order() {
    let a = make_aabb((0.0, 0.0), (4.0, 2.0));
    assert_eq!(
        a.rect(),
        [Vec2::new(0.0, 0.0), Vec2::new(0.0, 2.0), Vec2::new(4.0, 2.0), Vec2::new(4.0, 0.0)]
    );
}

// ============================================================================
// contains / intersects
// ============================================================================

#[test]
fn test_aabb_contains() {
    let big = make_aabb((-10.0, -10.0), (10.0, 10.0));
    let small = make_aabb((-1.0, -1.0), (1.0, 1.0));
    let straddling = make_aabb((5.0, 5.0), (15.0, 15.0));

    assert!(big.contains(&small));
    assert!(!small.contains(&big));
    assert!(!big.contains(&straddling));
    assert!(big.contains(&big));
}

#[test]
fn test_contains_implies_area_and_vertices() {
    let outer = make_aabb((0.0, 0.0), (50.0, 40.0));
    let inner = make_aabb((10.0, 5.0), (30.0, 40.0));

    assert!(outer.contains(&inner));
    assert!(outer.area() >= inner.area());
    for v in inner.rect() {
        assert!(outer.contains_point(v));
    }
}

#[test]
fn test_aabb_intersects() {
    let a = make_aabb((-2.0, -2.0), (2.0, 2.0));
    let b = make_aabb((1.0, 1.0), (3.0, 3.0));
    let c = make_aabb((5.0, 5.0), (7.0, 7.0));
    let touching = make_aabb((2.0, -1.0), (4.0, 1.0));

    assert!(a.intersects(&b));
    assert!(!a.intersects(&c));
    assert!(a.intersects(&touching));
}

// ============================================================================
// subdivide
// ============================================================================

#[test]
fn test_subdivide_order() {
    let parent = make_aabb((0.0, 0.0), (100.0, 100.0));
    let [bl, br, tr, tl] = subdivide(&parent);

    assert_eq!(bl, make_aabb((0.0, 50.0), (50.0, 100.0)));
    assert_eq!(br, make_aabb((50.0, 50.0), (100.0, 100.0)));
    assert_eq!(tr, make_aabb((50.0, 0.0), (100.0, 50.0)));
    assert_eq!(tl, make_aabb((0.0, 0.0), (50.0, 50.0)));
}

#[test]
fn test_subdivide_tiles_parent_exactly() {
    let parent = make_aabb((-3.0, 7.0), (13.0, 19.0));
    let children = subdivide(&parent);

    let corners: Vec<Vec2> = children.iter().flat_map(|c| c.rect()).collect();
    assert_eq!(AABB::from_points(&corners).unwrap(), parent);

    let total: f32 = children.iter().map(|c| c.area()).sum();
    assert!((total - parent.area()).abs() < 1e-4);

    for i in 0..4 {
        assert!(parent.contains(&children[i]));
        for j in (i + 1)..4 {
            let a = children[i];
            let b = children[j];
            let overlap_w = (a.max.x.min(b.max.x) - a.min.x.max(b.min.x)).max(0.0);
            let overlap_h = (a.max.y.min(b.max.y) - a.min.y.max(b.min.y)).max(0.0);
            assert_eq!(overlap_w * overlap_h, 0.0, "children {} and {} overlap", i, j);
        }
    }
}

#[test]
fn test_quadrant_indices_follow_slot_order() {
    let indices: Vec<usize> = Quadrant::ALL.iter().map(|q| q.index()).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}
