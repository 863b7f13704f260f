//! Render errors.

use thiserror::Error;

/// Errors that can occur while rendering a scene.
///
/// Configuration problems are reported before any work is scheduled;
/// pixel failures are reported once every pixel task has finished.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image resolution must be positive, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },

    #[error("View angle must be between 0 and 180 degrees, got {0}")]
    InvalidViewAngle(f64),

    #[error("Scene has no camera")]
    MissingCamera,

    #[error("Failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pixel ({x}, {y}) failed: {reason}")]
    Pixel { x: u32, y: u32, reason: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for rendering.
pub type RenderResult<T> = Result<T, RenderError>;
