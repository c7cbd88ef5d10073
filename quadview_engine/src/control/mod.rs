//! Per-tick entity drivers: crowd steering and the first-person frustum.

mod controller;
mod crowd;
mod fps;
mod input;

pub use controller::SceneController;
pub use crowd::{Body, CrowdSceneController};
pub use fps::FpsSceneController;
pub use input::{InputMask, InputState};
