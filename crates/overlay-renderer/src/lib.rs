//! Map overlay rendering for emission rasters.
//!
//! Turns a raster tile into a georeferenced RGBA image for the
//! dashboard map: values are normalized against a per-year scale
//! (vmin fixed at 0, vmax at the 99.5th percentile so a handful of
//! urban hot cells do not wash out the gradient), colored through a
//! YlOrRd gradient, and made transparent where emissions are near
//! zero so the base map shows through. The RGBA buffer is encoded as
//! PNG in-process.

pub mod colormap;
pub mod error;
pub mod overlay;
pub mod png;
pub mod scale;

pub use colormap::Colormap;
pub use error::{RenderError, Result};
pub use overlay::{render_overlay, OverlayOptions};
pub use png::{create_png, create_png_auto};
pub use scale::ValueScale;
