//! In-memory raster tile with georeferencing.

use crate::{BoundingBox, GeoTransform};

/// One decoded raster tile: pixel values plus the transform that places
/// them in the world.
///
/// Data is row-major, row 0 at the transform origin (north for
/// north-up rasters).
#[derive(Debug, Clone, PartialEq)]
pub struct RasterTile {
    /// Pixel values in row-major order
    pub data: Vec<f32>,
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Affine transform for this tile
    pub transform: GeoTransform,
}

impl RasterTile {
    /// Create a tile, checking that the data length matches the dimensions.
    pub fn new(data: Vec<f32>, width: usize, height: usize, transform: GeoTransform) -> Self {
        debug_assert_eq!(data.len(), width * height);
        Self {
            data,
            width,
            height,
            transform,
        }
    }

    /// Pixel value at (col, row), if in bounds.
    pub fn get(&self, col: usize, row: usize) -> Option<f32> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.data[row * self.width + col])
    }

    /// Geographic bounds of this tile.
    pub fn bounds(&self) -> BoundingBox {
        self.transform.bounds(self.width, self.height)
    }

    /// Total number of pixels.
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    /// Check if the tile has no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_out_of_bounds() {
        let t = RasterTile::new(
            vec![1.0, 2.0, 3.0, 4.0],
            2,
            2,
            GeoTransform::new(0.0, 2.0, 1.0, -1.0),
        );
        assert_eq!(t.get(1, 1), Some(4.0));
        assert_eq!(t.get(2, 0), None);
        assert_eq!(t.get(0, 2), None);
    }
}
