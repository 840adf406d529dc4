//! GeoJSON types for boundary files.
//!
//! Only the subset needed for state boundaries is modeled: a
//! FeatureCollection of Polygon/MultiPolygon features with free-form
//! properties. Positions are kept as `Vec<f64>` because GeoJSON allows
//! an optional third (elevation) element.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// Properties bag; state name lives here.
    #[serde(default)]
    pub properties: HashMap<String, Value>,

    /// The feature geometry, if any.
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// String property by key.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(|v| v.as_str())
    }
}

/// A GeoJSON geometry, tagged by its "type" member.
///
/// Geometry types other than Polygon/MultiPolygon are preserved during
/// parsing but skipped by the loader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A single polygon: exterior ring plus optional hole rings.
    Polygon { coordinates: Vec<Vec<Vec<f64>>> },

    /// Multiple polygons, each with its own rings.
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Vec<f64>>>>,
    },

    /// Any other geometry type (points, lines); carried but unused.
    #[serde(other)]
    Other,
}

impl Geometry {
    /// Convert this geometry into polygons of (lon, lat) rings,
    /// keeping the Polygon/MultiPolygon part grouping.
    ///
    /// Positions with fewer than two elements are dropped; rings left
    /// with fewer than three vertices are dropped, as are polygons
    /// left with no rings.
    pub fn polygons(&self) -> Vec<emission_common::Polygon> {
        fn convert_ring(ring: &[Vec<f64>]) -> Option<emission_common::Ring> {
            let r: emission_common::Ring = ring
                .iter()
                .filter(|pos| pos.len() >= 2)
                .map(|pos| (pos[0], pos[1]))
                .collect();
            (r.len() >= 3).then_some(r)
        }

        fn convert_polygon(rings: &[Vec<Vec<f64>>]) -> Option<emission_common::Polygon> {
            let p: emission_common::Polygon =
                rings.iter().filter_map(|r| convert_ring(r)).collect();
            (!p.is_empty()).then_some(p)
        }

        match self {
            Geometry::Polygon { coordinates } => {
                convert_polygon(coordinates).into_iter().collect()
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .filter_map(|p| convert_polygon(p))
                .collect(),
            Geometry::Other => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_polygon_feature() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"NAME": "Kansas"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[-102.0, 37.0], [-94.6, 37.0], [-94.6, 40.0], [-102.0, 40.0], [-102.0, 37.0]]]
                }
            }]
        }"#;

        let fc: FeatureCollection = serde_json::from_str(json).unwrap();
        assert_eq!(fc.features.len(), 1);
        assert_eq!(fc.features[0].property_str("NAME"), Some("Kansas"));

        let polygons = fc.features[0].geometry.as_ref().unwrap().polygons();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].len(), 1);
        assert_eq!(polygons[0][0][0], (-102.0, 37.0));
    }

    #[test]
    fn test_parse_multipolygon() {
        let json = r#"{
            "type": "MultiPolygon",
            "coordinates": [
                [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]],
                [[[5.0, 5.0], [6.0, 5.0], [6.0, 6.0], [5.0, 5.0]]]
            ]
        }"#;

        let geom: Geometry = serde_json::from_str(json).unwrap();
        let polygons = geom.polygons();
        // two separate parts, not two rings of one polygon
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[0].len(), 1);
        assert_eq!(polygons[1].len(), 1);
    }

    #[test]
    fn test_unknown_geometry_yields_no_polygons() {
        let json = r#"{"type": "Point", "coordinates": [0.0, 0.0]}"#;
        let geom: Geometry = serde_json::from_str(json).unwrap();
        assert!(matches!(geom, Geometry::Other));
        assert!(geom.polygons().is_empty());
    }

    #[test]
    fn test_elevation_positions_are_truncated() {
        let json = r#"{
            "type": "Polygon",
            "coordinates": [[[0.0, 0.0, 10.0], [1.0, 0.0, 10.0], [1.0, 1.0, 10.0], [0.0, 0.0, 10.0]]]
        }"#;
        let geom: Geometry = serde_json::from_str(json).unwrap();
        let polygons = geom.polygons();
        assert_eq!(polygons[0][0][0], (0.0, 0.0));
    }
}
