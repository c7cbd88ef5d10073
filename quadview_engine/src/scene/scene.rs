/// Scene — the field, its entities, and the per-tick partition.
///
/// Entities live in a SlotMap and are never removed, so keys stay valid
/// for the scene's whole lifetime. The quadtree and both lookup tables are
/// thrown away and rebuilt on every `update()`:
///
/// 1. clear the tree and the lookups
/// 2. run the controllers (crowd, first-person, then extras)
/// 3. insert every box's current AABB and record where it landed
///
/// The frustum is never inserted: it is the query, not a queried object.

use std::f32::consts::TAU;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use crate::error::Result;
use crate::control::{CrowdSceneController, FpsSceneController, InputState, SceneController};
use crate::entity::{Entity, EntityKey, EntityStore};
use crate::math::AABB;
use crate::partition::QuadTree;
use crate::{engine_debug, engine_info, engine_trace, entity_err};
use super::options::SceneOptions;

const SOURCE: &str = "quadview::Scene";

/// Size range of randomly populated boxes, per axis
const MIN_BOX_SIZE: f32 = 4.0;
const MAX_BOX_SIZE: f32 = 32.0;

/// A simulated field of boxes watched by a single frustum.
pub struct Scene {
    options: SceneOptions,
    entities: EntityStore,
    /// Boxes in creation order (the order they are simulated and indexed)
    box_keys: Vec<EntityKey>,
    frustum: EntityKey,
    quad_tree: QuadTree,
    /// Box -> node the box was placed in during the last reindex
    entity_node_lookup: FxHashMap<EntityKey, usize>,
    /// Node -> boxes placed exactly at that node
    node_entities_lookup: FxHashMap<usize, Vec<EntityKey>>,
    crowd: CrowdSceneController,
    fps: FpsSceneController,
    /// Extra controllers, run after the built-in ones in registration order
    controllers: Vec<Box<dyn SceneController>>,
    /// Population RNG (the crowd owns a separate stream derived from it)
    rng: StdRng,
    ticks: u64,
}

impl Scene {
    /// Create a scene populated with `options.total_items` random boxes.
    ///
    /// Positions are uniform over the field, rotations uniform in
    /// `[0, 2π)`, sizes uniform in `[4, 32]` per axis.
    pub fn new(options: SceneOptions) -> Result<Self> {
        let mut scene = Self::build(options)?;

        for _ in 0..scene.options.total_items {
            let size = Vec2::new(
                scene.random_in(MIN_BOX_SIZE, MAX_BOX_SIZE),
                scene.random_in(MIN_BOX_SIZE, MAX_BOX_SIZE),
            );
            let position = Vec2::new(
                scene.random_in(0.0, scene.options.field_size),
                scene.random_in(0.0, scene.options.field_size),
            );
            let rotation = scene.random_in(0.0, TAU);
            scene.insert_box(size, position, rotation);
        }
        scene.reindex();

        engine_info!(SOURCE, "Scene created: {} boxes on a {}x{} field",
            scene.box_keys.len(), scene.options.field_size, scene.options.field_size);

        Ok(scene)
    }

    /// Create a scene with the frustum but no boxes.
    ///
    /// `options.total_items` is ignored; add boxes with `spawn_box`.
    pub fn empty(options: SceneOptions) -> Result<Self> {
        let scene = Self::build(options)?;
        engine_debug!(SOURCE, "Empty scene created on a {}x{} field",
            scene.options.field_size, scene.options.field_size);
        Ok(scene)
    }

    fn build(options: SceneOptions) -> Result<Self> {
        options.validate()?;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let crowd_rng = StdRng::seed_from_u64(rng.gen());

        let field_size = options.field_size;
        let center = Vec2::splat(field_size * 0.5);

        let mut entities = EntityStore::with_key();
        let frustum = entities.insert(Entity::new_frustum(
            options.frustum_fov,
            options.effective_near(),
            options.frustum_far,
            center,
            0.0,
        ));

        Ok(Self {
            quad_tree: QuadTree::new(AABB::square(field_size), options.max_depth),
            entities,
            box_keys: Vec::new(),
            frustum,
            entity_node_lookup: FxHashMap::default(),
            node_entities_lookup: FxHashMap::default(),
            crowd: CrowdSceneController::new(field_size, crowd_rng),
            fps: FpsSceneController::new(frustum),
            controllers: Vec::new(),
            ticks: 0,
            options,
            rng,
        })
    }

    fn random_in(&mut self, min: f32, max: f32) -> f32 {
        min + self.rng.gen::<f32>() * (max - min)
    }

    fn insert_box(&mut self, size: Vec2, position: Vec2, rotation: f32) -> EntityKey {
        let key = self.entities.insert(Entity::new_box(size, position, rotation));
        self.crowd.add_body(key, &self.entities[key]);
        self.box_keys.push(key);
        key
    }

    /// Add a box (rotation in radians) and register it with the crowd.
    ///
    /// The box is indexed immediately, so it is visible to a cull before
    /// the next `update()`.
    pub fn spawn_box(&mut self, size: Vec2, position: Vec2, rotation: f32) -> EntityKey {
        let key = self.insert_box(size, position, rotation);
        self.index_box(key);
        key
    }

    /// Register an extra controller, run after the crowd and the
    /// first-person controller.
    pub fn add_controller(&mut self, controller: Box<dyn SceneController>) {
        self.controllers.push(controller);
    }

    // ===== TICK =====

    /// Advance the scene by `dt` seconds: clear, simulate, reindex.
    pub fn update(&mut self, dt: f32, input: &InputState) {
        if self.ticks == 0 {
            engine_debug!(SOURCE, "First tick (dt = {})", dt);
        }
        self.ticks += 1;

        self.quad_tree.clear();
        self.entity_node_lookup.clear();
        self.node_entities_lookup.clear();

        self.crowd.update(&mut self.entities, input, dt);
        self.fps.update(&mut self.entities, input, dt);
        for controller in &mut self.controllers {
            controller.update(&mut self.entities, input, dt);
        }

        self.reindex();

        engine_trace!(SOURCE, "Tick {}: {} nodes for {} boxes",
            self.ticks, self.quad_tree.node_count(), self.box_keys.len());
    }

    fn reindex(&mut self) {
        for index in 0..self.box_keys.len() {
            self.index_box(self.box_keys[index]);
        }
    }

    fn index_box(&mut self, key: EntityKey) {
        let aabb = match self.entities.get(key).and_then(Entity::as_box) {
            Some(shape) => *shape.aabb(),
            None => return,
        };

        let node = self.quad_tree.add_to_tree(&aabb);
        self.entity_node_lookup.insert(key, node);
        self.node_entities_lookup.entry(node).or_default().push(key);
    }

    // ===== MUTATION =====

    /// Move the frustum (rotation in radians).
    pub fn set_frustum_transform(&mut self, position: Vec2, rotation: f32) -> Result<()> {
        if !position.is_finite() || !rotation.is_finite() {
            return Err(entity_err!(SOURCE, "non-finite frustum transform ({}, {})", position, rotation));
        }

        let frustum = self.frustum;
        match self.entities.get_mut(frustum) {
            Some(entity) => {
                entity.set_transform(position, rotation);
                Ok(())
            }
            None => Err(entity_err!(SOURCE, "frustum entity is missing")),
        }
    }

    /// Move a box (rotation in radians), keeping its simulation body in
    /// step. The partition reflects the move after the next `update()`.
    pub fn set_box_transform(&mut self, key: EntityKey, position: Vec2, rotation: f32) -> Result<()> {
        if !position.is_finite() || !rotation.is_finite() {
            return Err(entity_err!(SOURCE, "non-finite box transform ({}, {})", position, rotation));
        }

        let entity = match self.entities.get_mut(key) {
            Some(entity) => entity,
            None => return Err(entity_err!(SOURCE, "unknown entity {:?}", key)),
        };
        if !entity.is_box() {
            return Err(entity_err!(SOURCE, "entity {:?} is not a box", key));
        }

        entity.set_transform(position, rotation);
        self.crowd.sync_body(key, position, rotation);
        Ok(())
    }

    // ===== ACCESSORS =====

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn field_size(&self) -> f32 {
        self.options.field_size
    }

    pub fn entities(&self) -> &EntityStore {
        &self.entities
    }

    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key)
    }

    /// Box keys in creation order
    pub fn box_keys(&self) -> &[EntityKey] {
        &self.box_keys
    }

    /// Iterate over boxes in creation order
    pub fn boxes(&self) -> impl Iterator<Item = (EntityKey, &Entity)> + '_ {
        self.box_keys
            .iter()
            .filter_map(move |&key| self.entities.get(key).map(|entity| (key, entity)))
    }

    pub fn box_count(&self) -> usize {
        self.box_keys.len()
    }

    pub fn frustum_key(&self) -> EntityKey {
        self.frustum
    }

    /// The viewing frustum entity.
    pub fn frustum(&self) -> Option<&Entity> {
        self.entities.get(self.frustum)
    }

    pub fn quad_tree(&self) -> &QuadTree {
        &self.quad_tree
    }

    /// Node a box was placed in by the last reindex
    pub fn entity_node(&self, key: EntityKey) -> Option<usize> {
        self.entity_node_lookup.get(&key).copied()
    }

    /// Boxes placed exactly at `node` (empty if none)
    pub fn node_entities(&self, node: usize) -> &[EntityKey] {
        self.node_entities_lookup
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entity_node_lookup(&self) -> &FxHashMap<EntityKey, usize> {
        &self.entity_node_lookup
    }

    pub fn node_entities_lookup(&self) -> &FxHashMap<usize, Vec<EntityKey>> {
        &self.node_entities_lookup
    }

    pub fn crowd(&self) -> &CrowdSceneController {
        &self.crowd
    }

    pub fn fps(&self) -> &FpsSceneController {
        &self.fps
    }

    /// Number of `update()` calls so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
