//! Boundary file loading.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use emission_common::StateBoundary;

use crate::error::{BoundaryError, Result};
use crate::geojson::FeatureCollection;

/// Default property carrying the state name in Census boundary files.
pub const DEFAULT_NAME_PROPERTY: &str = "NAME";

/// Load state boundaries from a GeoJSON file, reading names from the
/// default `NAME` property.
pub fn load_boundaries(path: impl AsRef<Path>) -> Result<Vec<StateBoundary>> {
    load_boundaries_with_property(path, DEFAULT_NAME_PROPERTY)
}

/// Load state boundaries, reading names from the given property.
///
/// Features without polygon geometry are skipped with a warning; a
/// feature with polygon geometry but no name property is an error,
/// because downstream sums are keyed by name and silently dropping a
/// state would skew every total.
pub fn load_boundaries_with_property(
    path: impl AsRef<Path>,
    name_property: &str,
) -> Result<Vec<StateBoundary>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let collection: FeatureCollection = serde_json::from_str(&content)?;

    let mut boundaries = Vec::with_capacity(collection.features.len());

    for (index, feature) in collection.features.iter().enumerate() {
        let polygons = match &feature.geometry {
            Some(geom) => geom.polygons(),
            None => Vec::new(),
        };

        if polygons.is_empty() {
            warn!(index, "skipping feature with no polygon geometry");
            continue;
        }

        let name = feature.property_str(name_property).ok_or_else(|| {
            BoundaryError::MissingName {
                index,
                property: name_property.to_string(),
            }
        })?;

        boundaries.push(StateBoundary::new(name, polygons));
    }

    if boundaries.is_empty() {
        return Err(BoundaryError::EmptyCollection);
    }

    // Stable order: sums and panel rows are aligned by index.
    boundaries.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(
        path = %path.display(),
        states = boundaries.len(),
        "loaded state boundaries"
    );

    Ok(boundaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_load_sorts_by_name() {
        let f = write_fixture(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Texas"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}},
                {"type": "Feature", "properties": {"NAME": "Kansas"},
                 "geometry": {"type": "Polygon", "coordinates": [[[2,2],[3,2],[3,3],[2,2]]]}}
            ]
        }"#,
        );

        let boundaries = load_boundaries(f.path()).unwrap();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].name, "Kansas");
        assert_eq!(boundaries[1].name, "Texas");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let f = write_fixture(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
            ]
        }"#,
        );

        let err = load_boundaries(f.path()).unwrap_err();
        assert!(matches!(err, BoundaryError::MissingName { index: 0, .. }));
    }

    #[test]
    fn test_custom_name_property() {
        let f = write_fixture(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"STUSPS": "KS"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
            ]
        }"#,
        );

        let boundaries = load_boundaries_with_property(f.path(), "STUSPS").unwrap();
        assert_eq!(boundaries[0].name, "KS");
    }

    #[test]
    fn test_multipolygon_parts_stay_grouped() {
        let f = write_fixture(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Hawaii"},
                 "geometry": {"type": "MultiPolygon", "coordinates": [
                    [[[0,0],[1,0],[1,1],[0,0]]],
                    [[[5,5],[6,5],[6,6],[5,5]]]
                 ]}}
            ]
        }"#,
        );

        let boundaries = load_boundaries(f.path()).unwrap();
        assert_eq!(boundaries[0].polygons.len(), 2);
        assert_eq!(boundaries[0].polygons[0].len(), 1);
    }

    #[test]
    fn test_geometryless_features_are_skipped() {
        let f = write_fixture(
            r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"NAME": "Nowhere"}, "geometry": null},
                {"type": "Feature", "properties": {"NAME": "Kansas"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
            ]
        }"#,
        );

        let boundaries = load_boundaries(f.path()).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].name, "Kansas");
    }

    #[test]
    fn test_empty_collection_is_an_error() {
        let f = write_fixture(r#"{"type": "FeatureCollection", "features": []}"#);
        let err = load_boundaries(f.path()).unwrap_err();
        assert!(matches!(err, BoundaryError::EmptyCollection));
    }
}
