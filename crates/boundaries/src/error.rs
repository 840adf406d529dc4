//! Error types for boundary loading.

use thiserror::Error;

/// Errors that can occur while loading state boundaries.
#[derive(Error, Debug)]
pub enum BoundaryError {
    /// Failed to read the boundary file.
    #[error("failed to read boundary file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid GeoJSON.
    #[error("invalid GeoJSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A feature has no usable name property.
    #[error("feature {index} has no '{property}' property")]
    MissingName { index: usize, property: String },

    /// The collection contains no polygon features.
    #[error("boundary file contains no polygon features")]
    EmptyCollection,
}

/// Result type for boundary operations.
pub type Result<T> = std::result::Result<T, BoundaryError>;
