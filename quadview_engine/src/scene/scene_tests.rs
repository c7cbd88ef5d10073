use glam::Vec2;
use crate::control::{InputMask, InputState, SceneController};
use crate::entity::{EntityKey, EntityStore};
use crate::error::Error;
use crate::partition::ROOT;
use super::*;

fn seeded(total: usize) -> SceneOptions {
    SceneOptions::new().with_total_items(total).with_seed(1234)
}

/// Every box is recorded in exactly one node, both lookups agree, and the
/// node region contains the box AABB unless the box sticks out of the field.
fn assert_lookups_consistent(scene: &Scene) {
    let mut indexed = 0;
    for (key, entity) in scene.boxes() {
        let node = scene.entity_node(key).expect("every box is indexed");
        assert!(scene.node_entities(node).contains(&key));

        let aabb = entity.as_box().unwrap().aabb();
        let region = scene.quad_tree().node(node).unwrap().aabb();
        assert!(region.contains(aabb) || node == ROOT);
        indexed += 1;
    }

    let listed: usize = scene.node_entities_lookup().values().map(Vec::len).sum();
    assert_eq!(listed, indexed);
    assert_eq!(scene.entity_node_lookup().len(), indexed);
    assert!(scene.entity_node(scene.frustum_key()).is_none());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_populates_boxes_and_frustum() {
    let scene = Scene::new(seeded(64)).unwrap();

    assert_eq!(scene.box_count(), 64);
    assert_eq!(scene.entities().len(), 65);

    let frustum = scene.frustum().unwrap();
    assert!(frustum.is_frustum());
    assert_eq!(frustum.position(), Vec2::splat(256.0));
    assert_eq!(frustum.rotation(), 0.0);

    for (_, entity) in scene.boxes() {
        let size = entity.as_box().unwrap().size();
        assert!(size.x >= 4.0 && size.x <= 32.0);
        assert!(size.y >= 4.0 && size.y <= 32.0);
        let p = entity.position();
        assert!(p.x >= 0.0 && p.x <= 512.0 && p.y >= 0.0 && p.y <= 512.0);
        assert!(entity.rotation() >= 0.0 && entity.rotation() <= std::f32::consts::TAU);
    }

    assert_eq!(scene.crowd().bodies().len(), 64);
    assert_eq!(scene.fps().target(), scene.frustum_key());
}

#[test]
fn test_new_indexes_boxes_before_first_tick() {
    let scene = Scene::new(seeded(32)).unwrap();
    assert_lookups_consistent(&scene);
}

#[test]
fn test_new_rejects_invalid_options() {
    let result = Scene::new(SceneOptions::new().with_field_size(-1.0));
    assert!(matches!(result, Err(Error::InvalidConfiguration(_))));
}

#[test]
fn test_near_is_clamped_to_far() {
    let scene = Scene::empty(SceneOptions::new().with_frustum_near(300.0).with_frustum_far(100.0)).unwrap();
    let frustum = scene.frustum().unwrap().as_frustum().unwrap();
    assert_eq!(frustum.near(), 100.0);
    assert_eq!(frustum.far(), 100.0);
}

#[test]
fn test_seed_makes_population_deterministic() {
    let a = Scene::new(seeded(16)).unwrap();
    let b = Scene::new(seeded(16)).unwrap();

    let pa: Vec<_> = a.boxes().map(|(_, e)| e.clone()).collect();
    let pb: Vec<_> = b.boxes().map(|(_, e)| e.clone()).collect();
    assert_eq!(pa, pb);
}

#[test]
fn test_empty_scene_has_only_frustum() {
    let scene = Scene::empty(seeded(100)).unwrap();
    assert_eq!(scene.box_count(), 0);
    assert_eq!(scene.entities().len(), 1);
    assert_eq!(scene.quad_tree().node_count(), 1);
}

// ============================================================================
// Tick
// ============================================================================

#[test]
fn test_update_rebuilds_lookups() {
    let mut scene = Scene::new(seeded(48)).unwrap();
    for _ in 0..5 {
        scene.update(1.0 / 60.0, &InputState::new());
        assert_lookups_consistent(&scene);
    }
    assert_eq!(scene.ticks(), 5);
}

#[test]
fn test_zero_dt_rebuilds_identical_tree() {
    let mut scene = Scene::new(seeded(48)).unwrap();
    scene.update(0.0, &InputState::new());
    let first: Vec<_> = scene.quad_tree().nodes().map(|(i, n)| (i, n.clone())).collect();

    scene.update(0.0, &InputState::new());
    let second: Vec<_> = scene.quad_tree().nodes().map(|(i, n)| (i, n.clone())).collect();

    assert_eq!(first, second);
}

#[test]
fn test_update_moves_frustum_from_input() {
    let mut scene = Scene::empty(seeded(0)).unwrap();
    scene.update(0.5, &InputState::from_mask(InputMask::MOVE_BACKWARD));

    // forward is +y: 512 * 0.5 backward
    let pos = scene.frustum().unwrap().position();
    assert!((pos - Vec2::new(256.0, 0.0)).length() < 1e-3);
}

#[test]
fn test_spawn_box_is_indexed_immediately() {
    let mut scene = Scene::empty(SceneOptions::new().with_field_size(100.0)).unwrap();
    let key = scene.spawn_box(Vec2::splat(4.0), Vec2::new(90.0, 90.0), 0.0);

    let node = scene.entity_node(key).unwrap();
    assert_ne!(node, ROOT);
    assert_eq!(scene.quad_tree().depth_of(node), Some(4));
    assert_eq!(scene.node_entities(node), &[key]);
}

struct Gather(Vec2);

impl SceneController for Gather {
    fn update(&mut self, entities: &mut EntityStore, _input: &InputState, _dt: f32) {
        for (_, entity) in entities.iter_mut() {
            if entity.is_box() {
                entity.set_position(self.0);
            }
        }
    }
}

#[test]
fn test_extra_controllers_run_after_builtins() {
    let mut scene = Scene::new(seeded(10)).unwrap();
    scene.add_controller(Box::new(Gather(Vec2::new(10.0, 10.0))));

    scene.update(0.1, &InputState::new());

    for (key, entity) in scene.boxes() {
        assert_eq!(entity.position(), Vec2::new(10.0, 10.0));
        assert!(scene.entity_node(key).is_some());
    }
}

// ============================================================================
// Mutation
// ============================================================================

#[test]
fn test_set_box_transform() {
    let mut scene = Scene::empty(seeded(0)).unwrap();
    let key = scene.spawn_box(Vec2::splat(8.0), Vec2::new(20.0, 20.0), 0.0);

    scene.set_box_transform(key, Vec2::new(400.0, 400.0), 1.0).unwrap();

    assert_eq!(scene.entity(key).unwrap().position(), Vec2::new(400.0, 400.0));
    assert_eq!(scene.crowd().bodies()[0].position(), Vec2::new(400.0, 400.0));
}

#[test]
fn test_set_box_transform_rejects_bad_keys() {
    let mut scene = Scene::empty(seeded(0)).unwrap();
    let frustum = scene.frustum_key();

    let wrong_kind = scene.set_box_transform(frustum, Vec2::ZERO, 0.0);
    assert!(matches!(wrong_kind, Err(Error::InvalidEntity(_))));

    let unknown = scene.set_box_transform(EntityKey::default(), Vec2::ZERO, 0.0);
    assert!(matches!(unknown, Err(Error::InvalidEntity(_))));
}

#[test]
fn test_set_frustum_transform() {
    let mut scene = Scene::empty(seeded(0)).unwrap();
    scene.set_frustum_transform(Vec2::new(50.0, 0.0), 0.5).unwrap();

    let frustum = scene.frustum().unwrap();
    assert_eq!(frustum.position(), Vec2::new(50.0, 0.0));
    assert_eq!(frustum.rotation(), 0.5);

    let result = scene.set_frustum_transform(Vec2::new(f32::NAN, 0.0), 0.0);
    assert!(matches!(result, Err(Error::InvalidEntity(_))));
    assert_eq!(scene.frustum().unwrap().position(), Vec2::new(50.0, 0.0));
}
