//! Error types for neon-canvas.

use thiserror::Error;

/// Result type alias using CanvasError.
pub type CanvasResult<T> = Result<T, CanvasError>;

/// Errors that can occur in canvas operations.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// Invalid canvas dimensions (must be positive and within limits).
    #[error("Invalid dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// None of the requested font families is installed.
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngError(String),

    /// Raster image decoding error.
    #[error("Failed to decode image: {0}")]
    ImageDecodeError(String),

    /// Reading or writing an image file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<png::EncodingError> for CanvasError {
    fn from(err: png::EncodingError) -> Self {
        CanvasError::PngError(err.to_string())
    }
}

impl From<image::ImageError> for CanvasError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(err) => CanvasError::Io(err),
            other => CanvasError::ImageDecodeError(other.to_string()),
        }
    }
}
