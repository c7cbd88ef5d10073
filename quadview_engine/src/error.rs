//! Error types for the QuadView engine
//!
//! Only configuration and entity-handle misuse are reported as errors.
//! Geometric degeneracies (zero-length vectors, coincident bodies, AABBs
//! that straddle every quadrant) are resolved by policy and never surface
//! as `Err`.

use std::fmt;

/// Result type for QuadView engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// QuadView engine errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Scene options rejected by validation (field size, frustum parameters, ...)
    InvalidConfiguration(String),

    /// Entity key unknown to the scene, or pointing at the wrong entity kind
    InvalidEntity(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::InvalidEntity(msg) => write!(f, "Invalid entity: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an `Error::InvalidConfiguration`, logging it at ERROR level first.
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("quadview::SceneOptions", "field size {} must be positive", size));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::quadview::Error::InvalidConfiguration(message)
    }};
}

/// Log and return an `Error::InvalidConfiguration` from the current function.
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

/// Build an `Error::InvalidEntity`, logging it at ERROR level first.
#[macro_export]
macro_rules! entity_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::quadview::Error::InvalidEntity(message)
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
