/// RenderView — result of one visibility query.
///
/// Ephemeral: produced by a `Culler`, consumed by a `Drawer` or the
/// statistics display, dropped at the end of the tick.

use crate::entity::EntityKey;

/// Per-tick visibility counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawStatistics {
    /// Number of boxes in the scene (the brute-force cost)
    pub total: usize,
    /// Boxes whose polygon intersects the frustum
    pub in_frustum: usize,
    /// Intersection tests performed by the query
    pub in_frustum_checks: usize,
}

/// Visible partition nodes and boxes, plus the counters that produced them.
#[derive(Debug, Clone, Default)]
pub struct RenderView {
    visible_nodes: Vec<usize>,
    visible_entities: Vec<EntityKey>,
    statistics: DrawStatistics,
}

impl RenderView {
    pub(crate) fn new(
        visible_nodes: Vec<usize>,
        visible_entities: Vec<EntityKey>,
        total: usize,
        in_frustum_checks: usize,
    ) -> Self {
        let statistics = DrawStatistics {
            total,
            in_frustum: visible_entities.len(),
            in_frustum_checks,
        };
        Self {
            visible_nodes,
            visible_entities,
            statistics,
        }
    }

    /// Indices of partition nodes intersecting the frustum, in visit order
    pub fn visible_nodes(&self) -> &[usize] {
        &self.visible_nodes
    }

    /// Keys of boxes intersecting the frustum
    pub fn visible_entities(&self) -> &[EntityKey] {
        &self.visible_entities
    }

    pub fn visible_count(&self) -> usize {
        self.visible_entities.len()
    }

    pub fn statistics(&self) -> DrawStatistics {
        self.statistics
    }
}

#[cfg(test)]
#[path = "render_view_tests.rs"]
mod tests;
