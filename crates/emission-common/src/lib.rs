//! Common types and utilities shared across all co2-atlas crates.

pub mod bbox;
pub mod boundary;
pub mod raster;
pub mod transform;

pub use bbox::BoundingBox;
pub use boundary::{Polygon, Ring, StateBoundary};
pub use raster::RasterTile;
pub use transform::GeoTransform;
