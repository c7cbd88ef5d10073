//! Scene module
//!
//! Provides the scene orchestrator, its configuration, and the per-tick
//! strategies that consume it (culling, drawing).

mod options;
mod scene;
mod scene_manager;
mod render_view;
mod culler;
mod drawer;

pub use options::SceneOptions;
pub use scene::Scene;
pub use scene_manager::SceneManager;
pub use render_view::{RenderView, DrawStatistics};
pub use culler::{Culler, QuadTreeCuller, BruteForceCuller};
pub use drawer::{Drawer, RecordingDrawer, DrawCommand, DrawStyle};
