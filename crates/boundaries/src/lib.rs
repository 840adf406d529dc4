//! US state boundary loading.
//!
//! Boundaries are distributed as a GeoJSON FeatureCollection (Census
//! cartographic boundary files converted to GeoJSON), one feature per
//! state, in EPSG:4326. Polygon and MultiPolygon geometries keep
//! their part grouping in [`emission_common::StateBoundary`], so a
//! multi-part state can be written back out as a valid MultiPolygon;
//! containment tests downstream use the even-odd rule over all rings.

pub mod error;
pub mod geojson;
pub mod loader;

pub use error::{BoundaryError, Result};
pub use loader::{load_boundaries, load_boundaries_with_property};
