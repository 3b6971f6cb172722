//! Construction-time errors.
//!
//! Anything that would make tracing numerically undefined is rejected
//! when the object is built, never in the middle of a render.

use thiserror::Error;

/// Errors raised while building materials, primitives, cameras or render
/// settings, and while writing the finished image.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid fuzz {0}: must be a finite value >= 0")]
    InvalidFuzz(f64),

    #[error("Invalid index of refraction {0}: must be a finite value > 0")]
    InvalidIor(f64),

    #[error("Invalid albedo {0:?}: components must be finite and >= 0")]
    InvalidAlbedo([f64; 3]),

    #[error("Invalid sphere radius {0}: must be finite and non-zero")]
    InvalidRadius(f64),

    #[error("Invalid sphere center {0:?}: components must be finite")]
    InvalidCenter([f64; 3]),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Invalid render settings: {0}")]
    InvalidRenderConfig(String),

    #[error("Scene references unknown material '{0}'")]
    UnknownMaterial(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for construction and output operations.
pub type ConfigResult<T> = Result<T, ConfigError>;
