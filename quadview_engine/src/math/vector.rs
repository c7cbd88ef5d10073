/// 2D vector helpers on top of `glam::Vec2`.
///
/// The field uses screen-space coordinates (y axis pointing down), so the
/// scalar cross product is defined with the sign that makes a
/// counter-clockwise turn *on screen* positive. Every winding test in the
/// crate goes through `cross` and shares this convention.

use std::f32::consts::PI;
use glam::Vec2;

/// Lengths at or below this are treated as zero by `normalize`.
pub const EPSILON: f32 = 1e-6;

/// Euclidean length.
#[inline]
pub fn length(v: Vec2) -> f32 {
    v.length()
}

/// Distance between two points.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}

/// Unit vector in the direction of `v`.
///
/// Returns `Vec2::ZERO` when `|v| <= EPSILON` instead of dividing by zero,
/// so a body sitting on its destination or at rest never injects NaN into
/// the simulation.
#[inline]
pub fn normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len <= EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}

/// Dot product.
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f32 {
    a.dot(b)
}

/// Scalar 2D cross product, `a.y * b.x - a.x * b.y`.
///
/// Positive when `b` turns counter-clockwise from `a` in screen space.
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.y * b.x - a.x * b.y
}

/// Unsigned angle between two directions, in `[0, PI]`.
///
/// Linear in the cosine: 0 when aligned, PI/2 when perpendicular, PI when
/// opposite. Used as a steering rate, where monotonicity matters more than
/// an exact arc cosine.
#[inline]
pub fn angle(a: Vec2, b: Vec2) -> f32 {
    (1.0 - dot(normalize(a), normalize(b))) * 0.5 * PI
}

/// `angle(a, b)` carrying the sign of `cross(a, b)`.
///
/// Zero when either vector is zero or the two are collinear.
#[inline]
pub fn signed_angle(a: Vec2, b: Vec2) -> f32 {
    angle(a, b) * sign(cross(a, b))
}

/// Sign of `x` as -1, 0 or 1 (unlike `f32::signum`, zero maps to zero).
#[inline]
pub fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "vector_tests.rs"]
mod tests;
