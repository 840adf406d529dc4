//! Per-state pixel sums.

use std::path::PathBuf;

use rayon::prelude::*;
use tracing::debug;

use emission_common::{RasterTile, StateBoundary};

use crate::error::{Result, ZonalError};
use crate::mask::{interval_to_cols, row_crossings};

/// Sum the pixels of one tile that fall inside one boundary.
///
/// Pixel values below zero are clamped to zero before summing
/// (sensor/processing artifacts); NaN pixels are skipped. A boundary
/// with no covered pixels sums to 0.0.
pub fn sum_boundary(tile: &RasterTile, boundary: &StateBoundary) -> f64 {
    let Some(bbox) = boundary.bbox() else {
        return 0.0;
    };
    if !bbox.intersects(&tile.bounds()) {
        return 0.0;
    }

    let transform = &tile.transform;
    let mut crossings = Vec::new();
    let mut sum = 0.0f64;

    for row in 0..tile.height {
        let (_, y) = transform.pixel_center(0, row);
        if y < bbox.min_y || y > bbox.max_y {
            continue;
        }

        row_crossings(boundary, y, &mut crossings);

        for pair in crossings.chunks_exact(2) {
            let (start, end) = interval_to_cols(transform, tile.width, pair[0], pair[1]);
            let row_base = row * tile.width;

            for &v in &tile.data[row_base + start..row_base + end] {
                if v.is_nan() || v <= 0.0 {
                    continue;
                }
                sum += v as f64;
            }
        }
    }

    sum
}

/// Per-state sums for one tile, aligned to the boundary slice order.
///
/// States are independent, so this runs them in parallel.
pub fn sum_tile(tile: &RasterTile, boundaries: &[StateBoundary]) -> Vec<f64> {
    boundaries
        .par_iter()
        .map(|b| sum_boundary(tile, b))
        .collect()
}

/// Per-state sums for one year across all of its raster tiles.
///
/// Tiles are loaded at full resolution and processed in sorted path
/// order, and per-state sums add element-wise across tiles. With
/// non-overlapping tiles this equals the sum over the union of the
/// tiles' pixel grids, and the fixed order makes the result a pure
/// function of the file set.
pub fn aggregate_year(
    year: i32,
    files: &[PathBuf],
    boundaries: &[StateBoundary],
) -> Result<Vec<f64>> {
    if files.is_empty() {
        return Err(ZonalError::NoFiles(year));
    }

    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort();

    let mut totals = vec![0.0f64; boundaries.len()];
    for path in sorted {
        let tile = raster_io::open_raster(path)?;
        let sums = sum_tile(&tile, boundaries);
        for (total, sum) in totals.iter_mut().zip(sums) {
            *total += sum;
        }
        debug!(year, tile = %path.display(), "aggregated tile");
    }

    Ok(totals)
}
