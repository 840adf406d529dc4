//! Scanline polygon masking.
//!
//! Pixel membership uses the even-odd rule on pixel CENTERS, the same
//! test as point-in-polygon ray casting, but computed one raster row
//! at a time: all edge crossings with the row's center latitude are
//! collected and sorted, and consecutive crossing pairs bound the
//! inside intervals. Cost is O(rows × edges) instead of
//! O(pixels × edges).
//!
//! Because membership is decided per pixel center, a pixel belongs to
//! a polygon independently of which tile it sits in; summing per tile
//! and adding across tiles gives exactly the sum over the union of the
//! tiles' pixels.

use emission_common::{GeoTransform, StateBoundary};

/// Collect the x-coordinates where any ring edge crosses the
/// horizontal line at `y`, sorted ascending.
///
/// The crossing count for a closed ring is always even; sorted
/// consecutive pairs `(c[2k], c[2k+1])` bound the intervals that are
/// inside under the even-odd rule.
pub fn row_crossings(boundary: &StateBoundary, y: f64, out: &mut Vec<f64>) {
    out.clear();

    for ring in boundary.rings() {
        let n = ring.len();
        if n < 3 {
            continue;
        }

        let mut j = n - 1;
        for i in 0..n {
            let (xi, yi) = ring[i];
            let (xj, yj) = ring[j];

            if (yi > y) != (yj > y) {
                out.push(xi + (y - yi) * (xj - xi) / (yj - yi));
            }
            j = i;
        }
    }

    out.sort_by(|a, b| a.total_cmp(b));
}

/// Column range `[start, end)` of pixels whose centers fall inside the
/// world-x interval `[a, b)`.
///
/// The half-open interval matches the even-odd crossing pairs: a pixel
/// center exactly on the left crossing is inside, on the right
/// crossing outside, so adjacent polygons sharing an edge never both
/// claim the same pixel.
pub fn interval_to_cols(transform: &GeoTransform, width: usize, a: f64, b: f64) -> (usize, usize) {
    // center(col) = origin_x + (col + 0.5) * pixel_width
    let first = ((a - transform.origin_x) / transform.pixel_width - 0.5).ceil() as i64;
    let end = ((b - transform.origin_x) / transform.pixel_width - 0.5).ceil() as i64;

    let start = first.clamp(0, width as i64) as usize;
    let end = end.clamp(0, width as i64) as usize;
    (start, end.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> StateBoundary {
        StateBoundary::new("sq", vec![vec![vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]]])
    }

    #[test]
    fn test_row_crossings_square() {
        let b = square(-100.0, 35.0, -98.0, 37.0);
        let mut out = Vec::new();

        row_crossings(&b, 36.0, &mut out);
        assert_eq!(out.len(), 2);
        assert!((out[0] - -100.0).abs() < 1e-12);
        assert!((out[1] - -98.0).abs() < 1e-12);

        row_crossings(&b, 38.0, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_row_crossings_match_contains_point() {
        // concave polygon: crossings must agree with the point test
        let b = StateBoundary::new(
            "concave",
            vec![vec![vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (5.0, 5.0),
                (0.0, 10.0),
            ]]],
        );

        let mut out = Vec::new();
        for &y in &[1.0, 4.5, 7.5, 9.5] {
            row_crossings(&b, y, &mut out);
            assert_eq!(out.len() % 2, 0);

            for &x in &[0.5, 2.5, 5.0, 7.5, 9.5] {
                let by_intervals = out
                    .chunks_exact(2)
                    .any(|pair| pair[0] <= x && x < pair[1]);
                assert_eq!(
                    by_intervals,
                    b.contains_point(x, y),
                    "disagreement at ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_interval_to_cols_half_open() {
        // pixels at centers 0.5, 1.5, 2.5, 3.5
        let t = GeoTransform::new(0.0, 4.0, 1.0, -1.0);

        assert_eq!(interval_to_cols(&t, 4, 0.0, 4.0), (0, 4));
        assert_eq!(interval_to_cols(&t, 4, 1.0, 3.0), (1, 3));
        // center exactly on the left edge is inside, on the right edge outside
        assert_eq!(interval_to_cols(&t, 4, 0.5, 2.5), (0, 2));
    }

    #[test]
    fn test_interval_to_cols_clamps_to_grid() {
        let t = GeoTransform::new(0.0, 4.0, 1.0, -1.0);
        assert_eq!(interval_to_cols(&t, 4, -10.0, 2.0), (0, 2));
        assert_eq!(interval_to_cols(&t, 4, 2.0, 100.0), (2, 4));
        assert_eq!(interval_to_cols(&t, 4, 10.0, 20.0), (4, 4));
    }
}
