/// Entity types for the scene.
///
/// An Entity is a Transform plus kind-specific shape data. Derived geometry
/// (oriented polygon, AABB, frustum trapezoid) is recomputed by every
/// setter, so the getters are plain reads.

use glam::Vec2;
use slotmap::{new_key_type, SlotMap};
use crate::math::{AABB, Quad};
use super::transform::Transform;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable handle of an entity within a Scene.
    ///
    /// Entities are never removed during a scene's lifetime, so a key stays
    /// valid until the whole scene is dropped.
    pub struct EntityKey;
}

/// Arena owning every entity of a scene.
pub type EntityStore = SlotMap<EntityKey, Entity>;

// ===== BOX =====

/// Rectangular agent driven by the crowd simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxShape {
    size: Vec2,
    polygon: Quad,
    aabb: AABB,
}

impl BoxShape {
    fn new(size: Vec2, transform: &Transform) -> Self {
        let mut shape = Self {
            size,
            polygon: [Vec2::ZERO; 4],
            aabb: AABB::new(Vec2::ZERO, Vec2::ZERO),
        };
        shape.recompute(transform);
        shape
    }

    fn recompute(&mut self, transform: &Transform) {
        let min = self.size * -0.5;
        let max = self.size * 0.5;
        let local = [min, Vec2::new(min.x, max.y), max, Vec2::new(max.x, min.y)];

        self.polygon = local.map(|v| transform.transform_point(v));
        self.aabb = AABB::from_points(&self.polygon).unwrap_or(self.aabb);
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Oriented outline in world space (CCW)
    pub fn polygon(&self) -> &Quad {
        &self.polygon
    }

    /// World-space bounds of the oriented outline
    pub fn aabb(&self) -> &AABB {
        &self.aabb
    }

    /// World direction of the longer side: `right` if wider than tall,
    /// `forward` otherwise.
    pub fn main_axis(&self, transform: &Transform) -> Vec2 {
        if self.size.x > self.size.y {
            transform.right()
        } else {
            transform.forward()
        }
    }
}

// ===== FRUSTUM =====

/// 2D viewing frustum: a trapezoid between `near` and `far` along the
/// entity's forward axis, opening with `fov`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrustumShape {
    fov: f32,
    near: f32,
    far: f32,
    polygon: Quad,
}

impl FrustumShape {
    fn new(fov: f32, near: f32, far: f32, transform: &Transform) -> Self {
        let mut shape = Self {
            fov,
            near,
            far,
            polygon: [Vec2::ZERO; 4],
        };
        shape.recompute(transform);
        shape
    }

    fn recompute(&mut self, transform: &Transform) {
        let half_tan = (self.fov * 0.5).tan();
        let n = self.near * half_tan;
        let f = self.far * half_tan;
        let local = [
            Vec2::new(n, self.near),
            Vec2::new(-n, self.near),
            Vec2::new(-f, self.far),
            Vec2::new(f, self.far),
        ];

        self.polygon = local.map(|v| transform.transform_point(v));
    }

    /// Field of view in radians
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Trapezoid in world space (CCW)
    pub fn polygon(&self) -> &Quad {
        &self.polygon
    }
}

// ===== ENTITY =====

/// Kind-specific entity data
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    Box(BoxShape),
    Frustum(FrustumShape),
}

/// A positioned, rotated object on the field.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    transform: Transform,
    kind: EntityKind,
}

impl Entity {
    /// Create a box of `size` centered at `position`, rotated by `rotation` radians.
    pub fn new_box(size: Vec2, position: Vec2, rotation: f32) -> Self {
        let transform = Transform::new(position, rotation);
        let kind = EntityKind::Box(BoxShape::new(size, &transform));
        Self { transform, kind }
    }

    /// Create a frustum; `fov_degrees` is converted to radians.
    pub fn new_frustum(fov_degrees: f32, near: f32, far: f32, position: Vec2, rotation: f32) -> Self {
        let transform = Transform::new(position, rotation);
        let kind = EntityKind::Frustum(FrustumShape::new(fov_degrees.to_radians(), near, far, &transform));
        Self { transform, kind }
    }

    // ===== GETTERS =====

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    pub fn position(&self) -> Vec2 {
        self.transform.position()
    }

    /// Rotation in radians
    pub fn rotation(&self) -> f32 {
        self.transform.rotation()
    }

    pub fn rotation_degrees(&self) -> f32 {
        self.transform.rotation().to_degrees()
    }

    pub fn forward(&self) -> Vec2 {
        self.transform.forward()
    }

    pub fn right(&self) -> Vec2 {
        self.transform.right()
    }

    /// World-space outline used for visibility tests
    pub fn polygon(&self) -> &Quad {
        match &self.kind {
            EntityKind::Box(shape) => shape.polygon(),
            EntityKind::Frustum(shape) => shape.polygon(),
        }
    }

    pub fn as_box(&self) -> Option<&BoxShape> {
        match &self.kind {
            EntityKind::Box(shape) => Some(shape),
            EntityKind::Frustum(_) => None,
        }
    }

    pub fn as_frustum(&self) -> Option<&FrustumShape> {
        match &self.kind {
            EntityKind::Frustum(shape) => Some(shape),
            EntityKind::Box(_) => None,
        }
    }

    pub fn is_box(&self) -> bool {
        matches!(self.kind, EntityKind::Box(_))
    }

    pub fn is_frustum(&self) -> bool {
        matches!(self.kind, EntityKind::Frustum(_))
    }

    // ===== SETTERS (each one refreshes derived geometry) =====

    pub fn set_position(&mut self, position: Vec2) {
        self.transform.set_position(position);
        self.refresh();
    }

    /// Set rotation in radians
    pub fn set_rotation(&mut self, rotation: f32) {
        self.transform.set_rotation(rotation);
        self.refresh();
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.set_rotation(degrees.to_radians());
    }

    /// Set position and rotation (radians) with a single refresh
    pub fn set_transform(&mut self, position: Vec2, rotation: f32) {
        self.transform.set(position, rotation);
        self.refresh();
    }

    fn refresh(&mut self) {
        match &mut self.kind {
            EntityKind::Box(shape) => shape.recompute(&self.transform),
            EntityKind::Frustum(shape) => shape.recompute(&self.transform),
        }
    }
}

#[cfg(test)]
#[path = "entity_tests.rs"]
mod tests;
