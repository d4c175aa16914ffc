//! Error types for neon-glow.

use neon_canvas::CanvasError;

/// Result type alias using NeonError.
pub type NeonResult<T> = Result<T, NeonError>;

#[derive(Debug, thiserror::Error)]
pub enum NeonError {
    /// A color argument is not exactly six hexadecimal digits.
    #[error("Invalid color format: {0}")]
    InvalidColor(String),

    /// The blur radius is negative or not a finite number.
    #[error("Invalid blur radius: {0} (expected a finite number >= 0)")]
    InvalidBlurRadius(f32),

    /// Drawing, font lookup, or image encoding/decoding failed.
    #[error(transparent)]
    Canvas(#[from] CanvasError),
}
