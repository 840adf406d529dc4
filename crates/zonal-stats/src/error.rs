//! Error types for zonal aggregation.

use thiserror::Error;

/// Errors that can occur during zonal aggregation.
#[derive(Error, Debug)]
pub enum ZonalError {
    /// A raster tile could not be loaded.
    #[error("raster error: {0}")]
    Raster(#[from] raster_io::RasterIoError),

    /// No files were supplied for a year.
    #[error("no raster files for year {0}")]
    NoFiles(i32),
}

/// Result type for zonal aggregation operations.
pub type Result<T> = std::result::Result<T, ZonalError>;
