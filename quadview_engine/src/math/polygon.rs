/// Polygon predicates: convexity, winding, and convex intersection.
///
/// Polygons are plain vertex slices. Callers guarantee simple, CCW-wound
/// (screen space) input; nothing here validates that at runtime.

use glam::Vec2;
use super::vector::{cross, sign};

/// A 4-vertex polygon (box outline, frustum trapezoid, AABB rect).
pub type Quad = [Vec2; 4];

/// Edge `i` of `polygon`, from vertex `i` to vertex `i + 1` (wrapping).
#[inline]
fn edge(polygon: &[Vec2], i: usize) -> Vec2 {
    polygon[(i + 1) % polygon.len()] - polygon[i]
}

/// True iff consecutive edges always turn the same way.
///
/// Polygons with fewer than 3 vertices are reported convex.
pub fn is_convex(polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return true;
    }

    let first = sign(cross(edge(polygon, 0), edge(polygon, 1)));
    (1..n).all(|i| sign(cross(edge(polygon, i), edge(polygon, (i + 1) % n))) == first)
}

/// True iff the first corner turns counter-clockwise.
///
/// Only meaningful for convex polygons; needs at least 3 vertices.
pub fn is_ccw(polygon: &[Vec2]) -> bool {
    polygon.len() >= 3 && cross(edge(polygon, 0), edge(polygon, 1)) > 0.0
}

/// Convex polygon intersection restricted to both polygons' own edges.
///
/// For every edge of either polygon: if all vertices of the other polygon
/// lie strictly on the outer side, the polygons are disjoint. Touching
/// counts as intersecting. Both polygons must be CCW.
pub fn has_intersection(a: &[Vec2], b: &[Vec2]) -> bool {
    !separated_by_edges_of(a, b) && !separated_by_edges_of(b, a)
}

/// Whether some edge of `primary` has every vertex of `secondary` outside.
fn separated_by_edges_of(primary: &[Vec2], secondary: &[Vec2]) -> bool {
    (0..primary.len()).any(|i| {
        let origin = primary[i];
        let e = edge(primary, i);
        secondary.iter().all(|&p| cross(p - origin, e) > 0.0)
    })
}

#[cfg(test)]
#[path = "polygon_tests.rs"]
mod tests;
