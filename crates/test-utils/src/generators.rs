//! Generators for synthetic emission data.
//!
//! These generators create predictable, verifiable data patterns that
//! can be used across the test suite.

use emission_common::{Ring, StateBoundary};

/// Creates a test grid with predictable values.
///
/// Each cell value is calculated as: `col * 1000 + row`
///
/// This makes it easy to verify that data is being read/written
/// correctly by checking that grid[row][col] == col * 1000 + row.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.len(), 50); // 10 * 5
/// assert_eq!(grid[0], 0.0);    // col=0, row=0 -> 0*1000 + 0
/// assert_eq!(grid[1], 1000.0); // col=1, row=0 -> 1*1000 + 0
/// assert_eq!(grid[10], 1.0);   // col=0, row=1 -> 0*1000 + 1
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            data.push((col * 1000 + row) as f32);
        }
    }
    data
}

/// Creates a grid where every pixel has the same value.
///
/// The expected sum over any pixel subset is `value * pixel_count`,
/// which makes zonal-sum assertions trivial.
pub fn create_constant_grid(width: usize, height: usize, value: f32) -> Vec<f32> {
    vec![value; width * height]
}

/// Creates an emission-like grid: mostly near zero with a few hot
/// cells, plus occasional small negative artifacts like real sensor
/// output.
///
/// Deterministic: the pattern depends only on the dimensions.
pub fn create_emission_grid(width: usize, height: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(width * height);
    for row in 0..height {
        for col in 0..width {
            let i = row * width + col;
            let v = match i % 17 {
                0 => 250.0 + (i % 7) as f32 * 40.0, // hot cell
                5 => -0.3,                          // sensor artifact
                _ => (i % 5) as f32 * 0.1,
            };
            data.push(v);
        }
    }
    data
}

/// A single rectangular ring from corner coordinates.
pub fn rect_ring(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
    vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]
}

/// A rectangular single-polygon state boundary.
pub fn rect_state(name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> StateBoundary {
    StateBoundary::new(name, vec![vec![rect_ring(x0, y0, x1, y1)]])
}

/// A two-part state (multipolygon) made of two disjoint rectangles.
pub fn split_state(
    name: &str,
    part_a: (f64, f64, f64, f64),
    part_b: (f64, f64, f64, f64),
) -> StateBoundary {
    StateBoundary::new(
        name,
        vec![
            vec![rect_ring(part_a.0, part_a.1, part_a.2, part_a.3)],
            vec![rect_ring(part_b.0, part_b.1, part_b.2, part_b.3)],
        ],
    )
}
