/// First-person controller for the viewing frustum.

use std::f32::consts::PI;
use crate::entity::{EntityKey, EntityStore};
use super::controller::SceneController;
use super::input::{InputMask, InputState};

/// Drives one entity from the held input directions.
///
/// Steps are applied in bit order (rotate-left, move-backward,
/// rotate-right, move-forward); each step reads the transform written by
/// the previous one, so "rotate + move" in the same tick moves along the
/// already-rotated forward axis.
pub struct FpsSceneController {
    target: EntityKey,
    /// Units per second along `forward`
    speed: f32,
    /// Radians per second
    angular_speed: f32,
}

impl FpsSceneController {
    pub const DEFAULT_SPEED: f32 = 512.0;
    pub const DEFAULT_ANGULAR_SPEED: f32 = PI;

    pub fn new(target: EntityKey) -> Self {
        Self::with_speeds(target, Self::DEFAULT_SPEED, Self::DEFAULT_ANGULAR_SPEED)
    }

    pub fn with_speeds(target: EntityKey, speed: f32, angular_speed: f32) -> Self {
        Self {
            target,
            speed,
            angular_speed,
        }
    }

    pub fn target(&self) -> EntityKey {
        self.target
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn angular_speed(&self) -> f32 {
        self.angular_speed
    }
}

impl SceneController for FpsSceneController {
    fn update(&mut self, entities: &mut EntityStore, input: &InputState, dt: f32) {
        let mask = input.mask();
        if mask.is_empty() {
            return;
        }

        let entity = match entities.get_mut(self.target) {
            Some(entity) => entity,
            None => return,
        };

        if mask.contains(InputMask::ROTATE_LEFT) {
            entity.set_rotation(entity.rotation() - self.angular_speed * dt);
        }

        if mask.contains(InputMask::MOVE_BACKWARD) {
            entity.set_position(entity.position() - entity.forward() * (self.speed * dt));
        }

        if mask.contains(InputMask::ROTATE_RIGHT) {
            entity.set_rotation(entity.rotation() + self.angular_speed * dt);
        }

        if mask.contains(InputMask::MOVE_FORWARD) {
            entity.set_position(entity.position() + entity.forward() * (self.speed * dt));
        }
    }
}

#[cfg(test)]
#[path = "fps_tests.rs"]
mod tests;
