//! Error types for overlay rendering.

use thiserror::Error;

/// Errors that can occur during overlay rendering.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Pixel buffer does not match the stated dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },

    /// No finite values to derive a scale from.
    #[error("no finite values to scale")]
    EmptyScale,

    /// PNG compression failed.
    #[error("IDAT compression failed: {0}")]
    Compression(#[from] std::io::Error),
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
