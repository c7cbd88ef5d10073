/// Scene controllers.
///
/// A SceneController mutates entity transforms once per tick. The scene
/// runs them in a fixed order after clearing the partition and before
/// reindexing, so every controller sees the state left by the previous one.

use crate::entity::EntityStore;
use super::input::InputState;

/// Per-tick entity driver.
///
/// `&mut self` lets implementations keep simulation state (bodies, RNG)
/// across ticks.
pub trait SceneController: Send + Sync {
    /// Advance by `dt` seconds.
    fn update(&mut self, entities: &mut EntityStore, input: &InputState, dt: f32);
}
