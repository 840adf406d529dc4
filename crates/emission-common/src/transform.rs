//! Affine geotransform mapping pixel indices to world coordinates.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

/// North-up affine transform for a raster grid.
///
/// `origin_x`/`origin_y` is the world coordinate of the TOP-LEFT corner
/// of pixel (0, 0). `pixel_height` is negative for north-up rasters
/// (row index increases southward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    /// X coordinate of the top-left corner of pixel (0, 0)
    pub origin_x: f64,
    /// Y coordinate of the top-left corner of pixel (0, 0)
    pub origin_y: f64,
    /// Pixel width in world units (positive)
    pub pixel_width: f64,
    /// Pixel height in world units (negative for north-up)
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Create a new transform from origin and pixel sizes.
    pub fn new(origin_x: f64, origin_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            pixel_width,
            pixel_height,
        }
    }

    /// World coordinate of the CENTER of pixel (col, row).
    pub fn pixel_center(&self, col: usize, row: usize) -> (f64, f64) {
        (
            self.origin_x + (col as f64 + 0.5) * self.pixel_width,
            self.origin_y + (row as f64 + 0.5) * self.pixel_height,
        )
    }

    /// Fractional pixel position of a world coordinate.
    ///
    /// The returned values are continuous; pixel (0, 0) covers the
    /// half-open range [0, 1) on both axes.
    pub fn world_to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (
            (x - self.origin_x) / self.pixel_width,
            (y - self.origin_y) / self.pixel_height,
        )
    }

    /// Bounding box covered by a grid of the given dimensions.
    pub fn bounds(&self, width: usize, height: usize) -> BoundingBox {
        let x0 = self.origin_x;
        let x1 = self.origin_x + width as f64 * self.pixel_width;
        let y0 = self.origin_y;
        let y1 = self.origin_y + height as f64 * self.pixel_height;

        BoundingBox {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Transform for the same raster downsampled by an integer factor.
    ///
    /// The origin is unchanged; pixel sizes scale by the factor.
    pub fn downsampled(&self, factor: usize) -> Self {
        Self {
            origin_x: self.origin_x,
            origin_y: self.origin_y,
            pixel_width: self.pixel_width * factor as f64,
            pixel_height: self.pixel_height * factor as f64,
        }
    }
}
