//! State boundary polygons.

use crate::BoundingBox;
use serde::{Deserialize, Serialize};

/// A single closed ring of (lon, lat) vertices.
pub type Ring = Vec<(f64, f64)>;

/// One polygon: exterior ring first, hole rings after.
pub type Polygon = Vec<Ring>;

/// One state's boundary: a name plus one or more polygons.
///
/// Multi-part states (islands, peninsulas split across water) carry
/// each part as its own polygon, so the original grouping survives to
/// GeoJSON output. Containment uses the even-odd rule, for which the
/// grouping is irrelevant: holes and disjoint parts both flip parity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBoundary {
    /// State name, e.g. "Texas"
    pub name: String,
    /// The state's polygons, each an exterior ring plus any holes
    pub polygons: Vec<Polygon>,
}

impl StateBoundary {
    /// Create a boundary from a name and polygons.
    pub fn new(name: impl Into<String>, polygons: Vec<Polygon>) -> Self {
        Self {
            name: name.into(),
            polygons,
        }
    }

    /// Iterate over all rings of all polygons.
    pub fn rings(&self) -> impl Iterator<Item = &Ring> {
        self.polygons.iter().flatten()
    }

    /// Bounding box over all rings.
    ///
    /// Returns `None` when the boundary has no vertices.
    pub fn bbox(&self) -> Option<BoundingBox> {
        let mut points = self.rings().flatten();
        let &(x0, y0) = points.next()?;

        let mut bbox = BoundingBox::new(x0, y0, x0, y0);
        for &(x, y) in points {
            bbox.min_x = bbox.min_x.min(x);
            bbox.min_y = bbox.min_y.min(y);
            bbox.max_x = bbox.max_x.max(x);
            bbox.max_y = bbox.max_y.max(y);
        }
        Some(bbox)
    }

    /// Check if a point is inside the boundary using the even-odd
    /// (ray casting) rule over all rings.
    pub fn contains_point(&self, lon: f64, lat: f64) -> bool {
        let mut inside = false;

        for ring in self.rings() {
            let n = ring.len();
            if n < 3 {
                continue;
            }

            let mut j = n - 1;
            for i in 0..n {
                let (xi, yi) = ring[i];
                let (xj, yj) = ring[j];

                if ((yi > lat) != (yj > lat)) && (lon < (xj - xi) * (lat - yi) / (yj - yi) + xi) {
                    inside = !inside;
                }
                j = i;
            }
        }

        inside
    }

    /// Total number of vertices across all rings.
    pub fn vertex_count(&self) -> usize {
        self.rings().map(|r| r.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Ring {
        vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1)]
    }

    #[test]
    fn test_contains_point_square() {
        let b = StateBoundary::new("Square", vec![vec![square(-100.0, 35.0, -98.0, 37.0)]]);

        assert!(b.contains_point(-99.0, 36.0));
        assert!(!b.contains_point(-101.0, 36.0));
        assert!(!b.contains_point(-99.0, 38.0));
    }

    #[test]
    fn test_contains_point_with_hole() {
        let b = StateBoundary::new(
            "Donut",
            vec![vec![
                square(0.0, 0.0, 10.0, 10.0),
                square(4.0, 4.0, 6.0, 6.0), // hole
            ]],
        );

        assert!(b.contains_point(2.0, 2.0));
        assert!(!b.contains_point(5.0, 5.0));
        assert!(!b.contains_point(11.0, 5.0));
    }

    #[test]
    fn test_contains_point_multipolygon() {
        let b = StateBoundary::new(
            "TwoParts",
            vec![
                vec![square(0.0, 0.0, 1.0, 1.0)],
                vec![square(5.0, 5.0, 6.0, 6.0)],
            ],
        );

        assert!(b.contains_point(0.5, 0.5));
        assert!(b.contains_point(5.5, 5.5));
        assert!(!b.contains_point(3.0, 3.0));
    }

    #[test]
    fn test_bbox_spans_all_polygons() {
        let b = StateBoundary::new(
            "TwoParts",
            vec![
                vec![square(0.0, 0.0, 1.0, 1.0)],
                vec![square(5.0, 5.0, 6.0, 6.0)],
            ],
        );
        let bbox = b.bbox().unwrap();
        assert_eq!(bbox.min_x, 0.0);
        assert_eq!(bbox.max_x, 6.0);
    }

    #[test]
    fn test_empty_boundary_has_no_bbox() {
        let b = StateBoundary::new("Empty", vec![]);
        assert!(b.bbox().is_none());
        assert!(!b.contains_point(0.0, 0.0));
    }
}
