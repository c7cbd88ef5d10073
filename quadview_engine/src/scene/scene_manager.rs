//! Central scene manager.
//!
//! Owns the current options and the Scene built from them. A change of
//! options replaces the whole Scene; a rejected change leaves the running
//! Scene untouched.

use crate::error::Result;
use crate::control::InputState;
use crate::{engine_info, engine_warn};
use super::culler::{Culler, QuadTreeCuller};
use super::drawer::Drawer;
use super::options::SceneOptions;
use super::render_view::{DrawStatistics, RenderView};
use super::scene::Scene;

const SOURCE: &str = "quadview::SceneManager";

pub struct SceneManager {
    options: SceneOptions,
    scene: Scene,
    culler: Box<dyn Culler>,
    /// Result of the last `tick()`
    view: RenderView,
}

impl SceneManager {
    /// Build a scene from `options`, culled with a `QuadTreeCuller`.
    pub fn new(options: SceneOptions) -> Result<Self> {
        let scene = Scene::new(options.clone())?;
        Ok(Self {
            options,
            scene,
            culler: Box::new(QuadTreeCuller::new()),
            view: RenderView::default(),
        })
    }

    /// Replace the culling strategy
    pub fn set_culler(&mut self, culler: Box<dyn Culler>) {
        self.culler = culler;
    }

    /// Rebuild the scene if `options` differ from the current ones.
    ///
    /// Returns `Ok(true)` when a new scene was built, `Ok(false)` when the
    /// options were unchanged. On error the previous scene keeps running.
    pub fn apply_options(&mut self, options: SceneOptions) -> Result<bool> {
        if options == self.options {
            return Ok(false);
        }

        let scene = match Scene::new(options.clone()) {
            Ok(scene) => scene,
            Err(e) => {
                engine_warn!(SOURCE, "Options rejected, keeping current scene: {}", e);
                return Err(e);
            }
        };

        engine_info!(SOURCE, "Scene replaced: {} boxes, fov {}, near {}, far {}",
            options.total_items, options.frustum_fov, options.effective_near(), options.frustum_far);

        self.scene = scene;
        self.options = options;
        self.view = RenderView::default();
        Ok(true)
    }

    /// Advance the scene by `dt` seconds and cull it.
    pub fn tick(&mut self, dt: f32, input: &InputState) -> DrawStatistics {
        self.scene.update(dt, input);
        self.view = self.culler.cull(&self.scene);
        self.view.statistics()
    }

    /// Draw the result of the last tick.
    pub fn draw(&self, drawer: &mut dyn Drawer) {
        drawer.draw(&self.scene, &self.view);
    }

    pub fn options(&self) -> &SceneOptions {
        &self.options
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Visibility result of the last tick
    pub fn view(&self) -> &RenderView {
        &self.view
    }
}

#[cfg(test)]
#[path = "scene_manager_tests.rs"]
mod tests;
