//! Error types for raster file access.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while indexing or loading rasters.
#[derive(Error, Debug)]
pub enum RasterIoError {
    /// Failed to open the raster file.
    #[error("failed to open raster: {0}")]
    OpenFailed(String),

    /// Failed to decode pixel data.
    #[error("failed to read raster data: {0}")]
    ReadFailed(String),

    /// Missing or malformed georeferencing tags.
    #[error("invalid raster metadata: {0}")]
    InvalidMetadata(String),

    /// The scan directory contains no raster files.
    #[error("no raster files found in {0}")]
    NoRasters(PathBuf),

    /// The pixel sample format is not supported.
    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl RasterIoError {
    /// Create an OpenFailed error.
    pub fn open_failed(msg: impl Into<String>) -> Self {
        Self::OpenFailed(msg.into())
    }

    /// Create a ReadFailed error.
    pub fn read_failed(msg: impl Into<String>) -> Self {
        Self::ReadFailed(msg.into())
    }

    /// Create an InvalidMetadata error.
    pub fn invalid_metadata(msg: impl Into<String>) -> Self {
        Self::InvalidMetadata(msg.into())
    }
}

/// Result type for raster I/O operations.
pub type Result<T> = std::result::Result<T, RasterIoError>;
