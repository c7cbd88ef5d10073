/// Frustum culling strategies.
///
/// A Culler decides which boxes of a Scene intersect its frustum.
/// `QuadTreeCuller` walks the partition and prunes whole subtrees;
/// `BruteForceCuller` tests every box and is the baseline the quadtree
/// statistics are compared against.

use crate::entity::EntityKey;
use crate::math::{Quad, has_intersection};
use crate::partition::ROOT;
use super::render_view::RenderView;
use super::scene::Scene;

/// Strategy for determining visible boxes.
///
/// Called once per tick after `Scene::update`. `&mut self` allows
/// stateful implementations to keep scratch buffers across ticks.
pub trait Culler: Send + Sync {
    /// Cull the scene against its frustum.
    fn cull(&mut self, scene: &Scene) -> RenderView;
}

/// Quadtree culler: recursive descent with subtree pruning.
///
/// Counts one check per visited node and one per box tested at a node
/// that survived. A surviving node does not make its boxes visible: each
/// one is tested with its own oriented polygon.
pub struct QuadTreeCuller;

impl QuadTreeCuller {
    pub fn new() -> Self {
        Self
    }

    /// Visit `node`; returns the checks performed in its subtree.
    fn visit(
        scene: &Scene,
        frustum: &Quad,
        node: usize,
        nodes: &mut Vec<usize>,
        entities: &mut Vec<EntityKey>,
    ) -> usize {
        let tree_node = match scene.quad_tree().node(node) {
            Some(n) => n,
            None => return 0,
        };

        let mut checks = 1;
        if !has_intersection(frustum, &tree_node.aabb().rect()) {
            return checks;
        }
        nodes.push(node);

        for &key in scene.node_entities(node) {
            checks += 1;
            if let Some(entity) = scene.entity(key) {
                if has_intersection(frustum, entity.polygon()) {
                    entities.push(key);
                }
            }
        }

        for child in tree_node.children().iter().flatten() {
            checks += Self::visit(scene, frustum, *child, nodes, entities);
        }

        checks
    }
}

impl Default for QuadTreeCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl Culler for QuadTreeCuller {
    fn cull(&mut self, scene: &Scene) -> RenderView {
        let frustum = match scene.frustum() {
            Some(entity) => *entity.polygon(),
            None => return RenderView::new(Vec::new(), Vec::new(), scene.box_count(), 0),
        };

        let mut nodes = Vec::new();
        let mut entities = Vec::new();
        let checks = Self::visit(scene, &frustum, ROOT, &mut nodes, &mut entities);

        RenderView::new(nodes, entities, scene.box_count(), checks)
    }
}

/// Brute-force culler. Tests every box polygon and ignores the partition.
///
/// `in_frustum_checks` always equals `total`.
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BruteForceCuller {
    fn default() -> Self {
        Self::new()
    }
}

impl Culler for BruteForceCuller {
    fn cull(&mut self, scene: &Scene) -> RenderView {
        let frustum = match scene.frustum() {
            Some(entity) => *entity.polygon(),
            None => return RenderView::new(Vec::new(), Vec::new(), scene.box_count(), 0),
        };

        let visible: Vec<EntityKey> = scene
            .boxes()
            .filter(|(_, entity)| has_intersection(&frustum, entity.polygon()))
            .map(|(key, _)| key)
            .collect();

        RenderView::new(Vec::new(), visible, scene.box_count(), scene.box_count())
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
