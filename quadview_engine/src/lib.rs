/*!
# QuadView Engine

Core of a 2D visibility sandbox: a crowd of rotated boxes wanders a square
field, a quadtree is rebuilt from their bounds every tick, and a moving
frustum queries that tree to find what it can see.

## Architecture

- **math**: 2D vector helpers, AABBs, convex polygon intersection
- **partition**: QuadTree rebuilt from scratch every tick
- **entity**: Box and Frustum entities addressed by stable keys
- **control**: Crowd steering and the first-person frustum controller
- **scene**: Scene orchestrator, cullers, drawers and the SceneManager

Everything is single-threaded and in-memory; a tick is
`Scene::update` followed by a `Culler` pass.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod partition;
pub mod entity;
pub mod control;
pub mod scene;

// Main quadview namespace module
pub mod quadview {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Logging sub-module (types only; the engine_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry kernel
    pub mod math {
        pub use crate::math::*;
    }

    // Spatial partition
    pub mod partition {
        pub use crate::partition::*;
    }

    // Entities
    pub mod entity {
        pub use crate::entity::*;
    }

    // Controllers and input
    pub mod control {
        pub use crate::control::*;
    }

    // Scene sub-module
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
