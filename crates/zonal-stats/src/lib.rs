//! Raster-to-polygon zonal aggregation.
//!
//! This crate is the computational core of co2-atlas. It turns gridded
//! emission rasters into per-state sums:
//!
//! ```text
//! RasterIndex (year -> files)
//!      │
//!      ▼
//! CachedAggregator::sums_for_year(year, files)
//!      │
//!      ├─► Cache hit: return cached per-state sums
//!      │
//!      └─► Cache miss:
//!            for each tile (sorted):
//!                scanline mask per state (even-odd rule)
//!                sum pixels (clamp negatives, skip NaN)
//!            accumulate across tiles
//!      │
//!      ▼
//! EmissionPanel (state × year × million tonnes)
//! ```
//!
//! Aggregation is a pure function of the file set and boundary set:
//! files are processed in sorted order and pixel visitation order is
//! fixed, so repeated invocations return bit-identical sums.

pub mod aggregate;
pub mod cache;
pub mod error;
pub mod mask;
pub mod panel;

pub use aggregate::{aggregate_year, sum_boundary, sum_tile};
pub use cache::{AggregateCache, AggregateKey, CacheStats, CachedAggregator};
pub use error::{Result, ZonalError};
pub use panel::{EmissionPanel, PanelRow, TONNES_PER_MEGATONNE};
