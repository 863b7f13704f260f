//! Error types for scene construction and serialization.

use thiserror::Error;

/// Errors that can occur while building, loading or saving a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Max recursion level must be at least 1, got {0}")]
    InvalidRecursionLevel(u32),

    #[error("Anti-aliasing factor must be at least 1, got {0}")]
    InvalidAntiAliasingFactor(u32),

    #[error("Surface {index} is invalid: {reason}")]
    InvalidSurface { index: usize, reason: String },

    #[error("Unknown preset scene: {0}")]
    UnknownPreset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
