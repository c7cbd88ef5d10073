/// Axis-aligned bounding boxes on the 2D field.

use glam::Vec2;
use super::polygon::Quad;

/// Axis-Aligned Bounding Box
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y)
    pub min: Vec2,
    /// Maximum corner (x, y)
    pub max: Vec2,
}

impl AABB {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y, "inverted AABB {:?} {:?}", min, max);
        Self { min, max }
    }

    /// Square region `[0, size]²`, the shape of the simulated field.
    pub fn square(size: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::splat(size))
    }

    /// Tightest box around a set of points. Returns `None` for an empty slice.
    pub fn from_points(points: &[Vec2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Self { min, max })
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// Length of the diagonal.
    pub fn diagonal(&self) -> f32 {
        (self.max - self.min).length()
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Outline as a 4-vertex polygon, CCW in screen space:
    /// `min`, `(min.x, max.y)`, `max`, `(max.x, min.y)`.
    pub fn rect(&self) -> Quad {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }

    /// Test if this AABB fully contains another AABB (shared edges count).
    pub fn contains(&self, other: &AABB) -> bool {
        self.min.x <= other.min.x && self.max.x >= other.max.x
        && self.min.y <= other.min.y && self.max.y >= other.max.y
    }

    /// Test if a point lies inside or on the boundary.
    pub fn contains_point(&self, p: Vec2) -> bool {
        self.min.x <= p.x && p.x <= self.max.x
        && self.min.y <= p.y && p.y <= self.max.y
    }

    /// Test if this AABB overlaps or touches another AABB.
    pub fn intersects(&self, other: &AABB) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x
        && self.min.y <= other.max.y && self.max.y >= other.min.y
    }
}

/// Quadrant slots, in the fixed order used by `subdivide` and the partition.
///
/// "Bottom" is the larger-y half: the field uses screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    BottomLeft = 0,
    BottomRight = 1,
    TopRight = 2,
    TopLeft = 3,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
        Quadrant::TopRight,
        Quadrant::TopLeft,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Split an AABB at its center into 4 children, ordered
/// bottom-left, bottom-right, top-right, top-left.
///
/// The children tile the parent exactly; neighbours share an edge.
pub fn subdivide(aabb: &AABB) -> [AABB; 4] {
    let min = aabb.min;
    let c = aabb.center();
    let max = aabb.max;

    [
        AABB::new(Vec2::new(min.x, c.y), Vec2::new(c.x, max.y)),
        AABB::new(c, max),
        AABB::new(Vec2::new(c.x, min.y), Vec2::new(max.x, c.y)),
        AABB::new(min, c),
    ]
}

#[cfg(test)]
#[path = "aabb_tests.rs"]
mod tests;
