/// Transform — position and rotation of an entity on the field.
///
/// The affine matrix is recomputed on every write, so readers never pay
/// for (or observe) a stale cache.

use glam::{Affine2, Vec2};

/// 2D rigid transform (translation + rotation, radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    position: Vec2,
    rotation: f32,
    matrix: Affine2,
}

impl Transform {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self {
            position,
            rotation,
            matrix: Affine2::from_angle_translation(rotation, position),
        }
    }

    // ===== GETTERS =====

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Local-to-world matrix
    pub fn matrix(&self) -> &Affine2 {
        &self.matrix
    }

    /// Local +x axis in world space (first matrix column)
    pub fn right(&self) -> Vec2 {
        self.matrix.matrix2.x_axis
    }

    /// Local +y axis in world space (second matrix column)
    pub fn forward(&self) -> Vec2 {
        self.matrix.matrix2.y_axis
    }

    /// Map a local-space point to world space
    pub fn transform_point(&self, local: Vec2) -> Vec2 {
        self.matrix.transform_point2(local)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec2) {
        self.set(position, self.rotation);
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.set(self.position, rotation);
    }

    /// Set position and rotation with a single matrix rebuild
    pub fn set(&mut self, position: Vec2, rotation: f32) {
        self.position = position;
        self.rotation = rotation;
        self.matrix = Affine2::from_angle_translation(rotation, position);
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }
}
