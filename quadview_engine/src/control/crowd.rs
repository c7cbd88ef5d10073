/// Crowd steering for the box agents.
///
/// Each body is attracted toward a wandering destination and pushed away
/// from every neighbor within `IMPACT_DISTANCE`. The neighbor scan is a
/// plain all-pairs loop: the quadtree keeps every straddling box at an
/// inner node, so it would not narrow the candidate set much.
///
/// Bodies are updated in place, in order. A body late in the list sees the
/// positions its predecessors already reached this tick.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::Rng;
use crate::entity::{Entity, EntityKey, EntityStore};
use crate::math::{distance, length, normalize, signed_angle};
use super::controller::SceneController;
use super::input::InputState;

/// Simulation state of one box agent.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    position: Vec2,
    /// Orientation in radians
    angle: f32,
    velocity: Vec2,
    /// Angular velocity in radians per second
    omega: f32,
    destination: Vec2,
    entity: EntityKey,
}

impl Body {
    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn omega(&self) -> f32 {
        self.omega
    }

    pub fn destination(&self) -> Vec2 {
        self.destination
    }

    /// Box entity driven by this body
    pub fn entity(&self) -> EntityKey {
        self.entity
    }
}

/// Attraction + short-range repulsion steering for every registered box.
pub struct CrowdSceneController {
    bodies: Vec<Body>,
    field_size: f32,
    rng: StdRng,
}

impl CrowdSceneController {
    pub const ATTRACTION_COEFF: f32 = 32.0;
    pub const IMPACT_DISTANCE: f32 = 32.0;
    pub const REPULSIVE_COEFF: f32 = 128.0;
    pub const MAX_SPEED: f32 = 32.0;
    pub const MIN_INITIAL_SPEED: f32 = 4.0;
    pub const MAX_INITIAL_SPEED: f32 = 32.0;
    /// Separation below which two bodies count as coincident.
    pub const MIN_SEPARATION: f32 = 1e-3;

    /// Controller for a square field `[0, field_size]²`, drawing
    /// destinations and initial speeds from `rng`.
    pub fn new(field_size: f32, rng: StdRng) -> Self {
        Self {
            bodies: Vec::new(),
            field_size,
            rng,
        }
    }

    /// Register a box. Returns `false` (and registers nothing) if `entity`
    /// is not a box.
    ///
    /// The body starts at the entity's transform, moving along its main
    /// axis at a random speed, heading to a random destination.
    pub fn add_body(&mut self, key: EntityKey, entity: &Entity) -> bool {
        let shape = match entity.as_box() {
            Some(shape) => shape,
            None => return false,
        };

        let speed = self.rng.gen_range(Self::MIN_INITIAL_SPEED..Self::MAX_INITIAL_SPEED);
        let velocity = shape.main_axis(entity.transform()) * speed;
        let destination = self.random_point();

        self.bodies.push(Body {
            position: entity.position(),
            angle: entity.rotation(),
            velocity,
            omega: 0.0,
            destination,
            entity: key,
        });
        true
    }

    /// Overwrite a body's position and orientation after its entity was
    /// moved from outside the simulation. Velocity and destination are kept.
    pub fn sync_body(&mut self, key: EntityKey, position: Vec2, angle: f32) -> bool {
        match self.bodies.iter_mut().find(|body| body.entity == key) {
            Some(body) => {
                body.position = position;
                body.angle = angle;
                true
            }
            None => false,
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn field_size(&self) -> f32 {
        self.field_size
    }

    fn random_point(&mut self) -> Vec2 {
        Vec2::new(self.rng.gen::<f32>(), self.rng.gen::<f32>()) * self.field_size
    }

    /// Sum of repulsive pushes from every body within `IMPACT_DISTANCE` of body `index`.
    fn repulsion(&self, index: usize) -> Vec2 {
        let position = self.bodies[index].position;
        let mut force = Vec2::ZERO;

        for (other_index, other) in self.bodies.iter().enumerate() {
            if other_index == index {
                continue;
            }

            let mut offset = position - other.position;
            let mut dist = length(offset);
            if dist >= Self::IMPACT_DISTANCE {
                continue;
            }

            if dist < Self::MIN_SEPARATION {
                // Coincident pair: push apart along ±x, lower index toward +x
                let direction = if index < other_index { Vec2::X } else { Vec2::NEG_X };
                offset = direction * Self::MIN_SEPARATION;
                dist = Self::MIN_SEPARATION;
            }

            force += offset * (Self::REPULSIVE_COEFF / dist + Self::REPULSIVE_COEFF / (dist * dist));
        }

        force
    }
}

impl SceneController for CrowdSceneController {
    fn update(&mut self, entities: &mut EntityStore, _input: &InputState, dt: f32) {
        if dt == 0.0 {
            return;
        }

        for index in 0..self.bodies.len() {
            let key = self.bodies[index].entity;
            let (arrival_radius, main_axis) = match entities.get(key) {
                Some(entity) => match entity.as_box() {
                    Some(shape) => (shape.aabb().diagonal() * 0.5, shape.main_axis(entity.transform())),
                    None => continue,
                },
                None => continue,
            };

            // 1. destination
            if distance(self.bodies[index].destination, self.bodies[index].position) <= arrival_radius {
                let destination = self.random_point();
                self.bodies[index].destination = destination;
            }

            // 2. attraction + 3. repulsion
            let body = &self.bodies[index];
            let mut force = normalize(body.destination - body.position) * Self::ATTRACTION_COEFF;
            force += self.repulsion(index);

            // 4. integrate
            let body = &mut self.bodies[index];
            body.velocity += force * dt;
            let speed = length(body.velocity).min(Self::MAX_SPEED);
            body.velocity = normalize(body.velocity) * speed;

            body.omega = signed_angle(main_axis, body.velocity);
            body.position += body.velocity * dt;
            body.angle += body.omega * dt;

            // 5. write back
            let (position, angle) = (body.position, body.angle);
            if let Some(entity) = entities.get_mut(key) {
                entity.set_transform(position, angle);
            }
        }
    }
}

#[cfg(test)]
#[path = "crowd_tests.rs"]
mod tests;
