//! Entity model — transforms, boxes, and the viewing frustum.

mod entity;
mod transform;

pub use entity::{Entity, EntityKind, EntityKey, EntityStore, BoxShape, FrustumShape};
pub use transform::Transform;
