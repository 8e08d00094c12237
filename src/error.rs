//! Construction-time error types
//!
//! The simulation itself never fails. Everything here is raised while
//! loading configuration or building levels, before a session starts.

use thiserror::Error;

/// A level layout that must not be offered to a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("level {level}: {what} has non-positive size {width}x{height}")]
    EmptyRect {
        level: u32,
        what: &'static str,
        width: i32,
        height: i32,
    },

    #[error("level {level}: {what} lies outside the coordinate range")]
    OutOfRange { level: u32, what: &'static str },

    #[error("level {level}: player spawn ({x}, {y}) overlaps a wall")]
    SpawnInsideWall { level: u32, x: i32, y: i32 },

    #[error("campaign has no levels")]
    NoLevels,

    #[error("layout json: {0}")]
    Json(String),
}

/// Invalid tuning or settings data.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("ending timeline out of order: {0}")]
    Timeline(String),
}
