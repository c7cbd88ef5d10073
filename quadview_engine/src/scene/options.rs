/// Scene configuration.
///
/// Any change to these values produces a brand-new Scene; nothing here is
/// read again after construction.

use crate::error::Result;
use crate::engine_bail;

const SOURCE: &str = "quadview::SceneOptions";

/// Parameters of a scene: field extent, agent count, frustum shape and
/// partition depth.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneOptions {
    /// Side of the square field `[0, field_size]²`
    pub field_size: f32,
    /// Number of box agents
    pub total_items: usize,
    /// Frustum field of view, in degrees
    pub frustum_fov: f32,
    pub frustum_near: f32,
    pub frustum_far: f32,
    /// Depth limit of the quadtree (root is depth 0)
    pub max_depth: u32,
    /// RNG seed for population and steering; `None` draws from OS entropy
    pub seed: Option<u64>,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            field_size: 512.0,
            total_items: 256,
            frustum_fov: 45.0,
            frustum_near: 10.0,
            frustum_far: 512.0,
            max_depth: 4,
            seed: None,
        }
    }
}

impl SceneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field_size(mut self, field_size: f32) -> Self {
        self.field_size = field_size;
        self
    }

    pub fn with_total_items(mut self, total_items: usize) -> Self {
        self.total_items = total_items;
        self
    }

    pub fn with_frustum_fov(mut self, degrees: f32) -> Self {
        self.frustum_fov = degrees;
        self
    }

    pub fn with_frustum_near(mut self, near: f32) -> Self {
        self.frustum_near = near;
        self
    }

    pub fn with_frustum_far(mut self, far: f32) -> Self {
        self.frustum_far = far;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Near distance actually used by the frustum: `min(near, far)`.
    pub fn effective_near(&self) -> f32 {
        self.frustum_near.min(self.frustum_far)
    }

    /// Check every field. A near plane beyond the far plane is accepted
    /// and clamped at scene construction.
    pub fn validate(&self) -> Result<()> {
        if !self.field_size.is_finite() || self.field_size <= 0.0 {
            engine_bail!(SOURCE, "field size must be positive and finite, got {}", self.field_size);
        }

        if !self.frustum_fov.is_finite() || self.frustum_fov <= 0.0 || self.frustum_fov >= 180.0 {
            engine_bail!(SOURCE, "frustum fov must lie in (0, 180) degrees, got {}", self.frustum_fov);
        }

        if !self.frustum_near.is_finite() || self.frustum_near < 0.0 {
            engine_bail!(SOURCE, "frustum near must be non-negative and finite, got {}", self.frustum_near);
        }

        if !self.frustum_far.is_finite() || self.frustum_far <= 0.0 {
            engine_bail!(SOURCE, "frustum far must be positive and finite, got {}", self.frustum_far);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
