//! Raster file access for co2-atlas.
//!
//! Two concerns live here:
//!
//! - **Indexing**: scan a data directory for emission GeoTIFFs and
//!   group them by the year embedded in each filename.
//! - **Loading**: decode one GeoTIFF into a [`RasterTile`]: band 1 as
//!   `f32`, geo tags interpreted into an affine transform, with
//!   optional block-average downsampling for display use.
//!
//! The TIFF container itself is decoded by the `tiff` crate; this crate
//! owns the georeferencing and grouping contracts on top of it.

pub mod downsample;
pub mod error;
pub mod geotiff;
pub mod indexer;

pub use emission_common::RasterTile;
pub use error::{RasterIoError, Result};
pub use geotiff::{open_raster, open_raster_downsampled};
pub use indexer::RasterIndex;
