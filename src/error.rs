//! Error types for the badge service

use thiserror::Error;

/// Result type alias for badge operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or rendering badges
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to render a badge
    #[error("Rendering failed: {0}")]
    RenderError(String),

    /// Failed to encode the rasterized badge as PNG
    #[cfg(feature = "raster")]
    #[error("PNG encoding failed: {0}")]
    EncodeError(String),
}
