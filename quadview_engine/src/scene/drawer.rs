/// Drawing strategies.
///
/// Pixels are out of scope; a Drawer turns a Scene and its RenderView into
/// outline primitives that any 2D backend (canvas, SVG, terminal) can
/// stroke.

use rustc_hash::FxHashSet;
use crate::math::{AABB, Quad};
use super::render_view::RenderView;
use super::scene::Scene;

/// What an outline represents, so a backend can pick its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStyle {
    /// Oriented box outline
    Box,
    /// Axis-aligned bounds of a box
    BoxBounds,
    /// Partition node on the ancestor chain of some box
    Node,
    Frustum,
    /// Partition node intersecting the frustum
    VisibleNode,
    /// Box intersecting the frustum
    VisibleEntity,
}

/// One outline to stroke.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon { points: Quad, style: DrawStyle, dashed: bool },
    Aabb { aabb: AABB, style: DrawStyle, dashed: bool },
}

impl DrawCommand {
    pub fn style(&self) -> DrawStyle {
        match self {
            DrawCommand::Polygon { style, .. } | DrawCommand::Aabb { style, .. } => *style,
        }
    }

    pub fn is_dashed(&self) -> bool {
        match self {
            DrawCommand::Polygon { dashed, .. } | DrawCommand::Aabb { dashed, .. } => *dashed,
        }
    }
}

/// Strategy for drawing a culled scene.
///
/// `&mut self` so implementations can accumulate output.
pub trait Drawer: Send + Sync {
    fn draw(&mut self, scene: &Scene, view: &RenderView);
}

/// Drawer that records the frame as a flat list of commands.
///
/// Emission order (back to front):
/// 1. every box polygon, followed by its dashed AABB
/// 2. the ancestor chain of every box's node, each node once (dashed)
/// 3. the frustum
/// 4. visible nodes (dashed)
/// 5. visible boxes
#[derive(Debug, Default)]
pub struct RecordingDrawer {
    commands: Vec<DrawCommand>,
}

impl RecordingDrawer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last `draw()`
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    fn polygon(&mut self, points: Quad, style: DrawStyle, dashed: bool) {
        self.commands.push(DrawCommand::Polygon { points, style, dashed });
    }

    fn aabb(&mut self, aabb: AABB, style: DrawStyle, dashed: bool) {
        self.commands.push(DrawCommand::Aabb { aabb, style, dashed });
    }
}

impl Drawer for RecordingDrawer {
    fn draw(&mut self, scene: &Scene, view: &RenderView) {
        self.commands.clear();
        let tree = scene.quad_tree();

        let mut seen = FxHashSet::default();
        let mut chain = Vec::new();
        for (key, entity) in scene.boxes() {
            if let Some(shape) = entity.as_box() {
                self.polygon(*shape.polygon(), DrawStyle::Box, false);
                self.aabb(*shape.aabb(), DrawStyle::BoxBounds, true);
            }

            if let Some(node) = scene.entity_node(key) {
                for ancestor in tree.ancestors(node) {
                    if seen.insert(ancestor) {
                        chain.push(ancestor);
                    }
                }
            }
        }

        for node in chain {
            if let Some(n) = tree.node(node) {
                self.aabb(*n.aabb(), DrawStyle::Node, true);
            }
        }

        if let Some(frustum) = scene.frustum() {
            self.polygon(*frustum.polygon(), DrawStyle::Frustum, false);
        }

        for &node in view.visible_nodes() {
            if let Some(n) = tree.node(node) {
                self.aabb(*n.aabb(), DrawStyle::VisibleNode, true);
            }
        }

        for &key in view.visible_entities() {
            if let Some(entity) = scene.entity(key) {
                self.polygon(*entity.polygon(), DrawStyle::VisibleEntity, false);
            }
        }
    }
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
