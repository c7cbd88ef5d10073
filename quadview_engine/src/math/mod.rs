//! Geometry kernel — 2D vectors, AABBs, and convex polygon tests.

mod aabb;
mod polygon;
mod vector;

pub use aabb::{AABB, Quadrant, subdivide};
pub use polygon::{Quad, is_convex, is_ccw, has_intersection};
pub use vector::{
    EPSILON, length, distance, normalize, dot, cross, angle, signed_angle, sign,
};
