//! On-disk fixtures: minimal GeoTIFF and GeoJSON writers.
//!
//! The TIFF writer emits the smallest file the loaders accept: classic
//! little-endian, single uncompressed strip, one Float32 sample per
//! pixel, with ModelPixelScale and ModelTiepoint tags. Enough for
//! tests; real emission rasters come from upstream providers.

use std::fs;
use std::io;
use std::path::Path;

use emission_common::{GeoTransform, StateBoundary};

// TIFF field types
const TYPE_SHORT: u16 = 3;
const TYPE_LONG: u16 = 4;
const TYPE_DOUBLE: u16 = 12;

/// Write a single-band Float32 GeoTIFF.
///
/// `transform.pixel_height` must be negative (north-up), matching what
/// the loader produces.
pub fn write_geotiff(
    path: impl AsRef<Path>,
    data: &[f32],
    width: usize,
    height: usize,
    transform: &GeoTransform,
) -> io::Result<()> {
    assert_eq!(data.len(), width * height, "data length mismatch");
    assert!(
        transform.pixel_height < 0.0,
        "fixture writer expects a north-up transform"
    );

    let pixel_bytes = data.len() * 4;
    let strip_offset = 8u32;
    let scale_offset = strip_offset + pixel_bytes as u32;
    let tiepoint_offset = scale_offset + 24;
    let ifd_offset = tiepoint_offset + 48;

    let mut out = Vec::with_capacity(ifd_offset as usize + 2 + 12 * 12 + 4);

    // Header
    out.extend_from_slice(b"II");
    out.extend_from_slice(&42u16.to_le_bytes());
    out.extend_from_slice(&ifd_offset.to_le_bytes());

    // Pixel data (one strip)
    for &v in data {
        out.extend_from_slice(&v.to_le_bytes());
    }

    // ModelPixelScale: (sx, sy, sz) with sy positive
    for v in [transform.pixel_width, -transform.pixel_height, 0.0] {
        out.extend_from_slice(&v.to_le_bytes());
    }

    // ModelTiepoint: raster (0,0,0) -> world (origin_x, origin_y, 0)
    for v in [0.0, 0.0, 0.0, transform.origin_x, transform.origin_y, 0.0] {
        out.extend_from_slice(&v.to_le_bytes());
    }

    // IFD: entries must be in ascending tag order
    let entries: [(u16, u16, u32, u32); 12] = [
        (256, TYPE_LONG, 1, width as u32),        // ImageWidth
        (257, TYPE_LONG, 1, height as u32),       // ImageLength
        (258, TYPE_SHORT, 1, 32),                 // BitsPerSample
        (259, TYPE_SHORT, 1, 1),                  // Compression: none
        (262, TYPE_SHORT, 1, 1),                  // Photometric: BlackIsZero
        (273, TYPE_LONG, 1, strip_offset),        // StripOffsets
        (277, TYPE_SHORT, 1, 1),                  // SamplesPerPixel
        (278, TYPE_LONG, 1, height as u32),       // RowsPerStrip
        (279, TYPE_LONG, 1, pixel_bytes as u32),  // StripByteCounts
        (339, TYPE_SHORT, 1, 3),                  // SampleFormat: IEEE float
        (33550, TYPE_DOUBLE, 3, scale_offset),    // ModelPixelScale
        (33922, TYPE_DOUBLE, 6, tiepoint_offset), // ModelTiepoint
    ];

    out.extend_from_slice(&(entries.len() as u16).to_le_bytes());
    for (tag, type_, count, value) in entries {
        out.extend_from_slice(&tag.to_le_bytes());
        out.extend_from_slice(&type_.to_le_bytes());
        out.extend_from_slice(&count.to_le_bytes());
        out.extend_from_slice(&value.to_le_bytes());
    }
    out.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    fs::write(path, out)
}

/// Write a GeoJSON FeatureCollection for the given boundaries.
///
/// Single-polygon states become Polygon features, multi-part states
/// MultiPolygon, with the state name in the `NAME` property, mirroring
/// Census boundary files.
pub fn write_boundaries_geojson(
    path: impl AsRef<Path>,
    boundaries: &[StateBoundary],
) -> io::Result<()> {
    let features: Vec<serde_json::Value> = boundaries
        .iter()
        .map(|b| {
            let polygons: Vec<Vec<Vec<[f64; 2]>>> = b
                .polygons
                .iter()
                .map(|polygon| {
                    polygon
                        .iter()
                        .map(|ring| ring.iter().map(|&(x, y)| [x, y]).collect())
                        .collect()
                })
                .collect();
            let geometry = if polygons.len() == 1 {
                serde_json::json!({ "type": "Polygon", "coordinates": polygons[0] })
            } else {
                serde_json::json!({ "type": "MultiPolygon", "coordinates": polygons })
            };
            serde_json::json!({
                "type": "Feature",
                "properties": { "NAME": b.name },
                "geometry": geometry
            })
        })
        .collect();

    let collection = serde_json::json!({
        "type": "FeatureCollection",
        "features": features,
    });

    fs::write(path, collection.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geotiff_layout() {
        let dir = std::env::temp_dir().join("co2-atlas-fixture-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("tiny.tif");

        let t = GeoTransform::new(-100.0, 40.0, 1.0, -1.0);
        write_geotiff(&path, &[1.0, 2.0, 3.0, 4.0], 2, 2, &t).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"II");
        assert_eq!(u16::from_le_bytes([bytes[2], bytes[3]]), 42);
        // first pixel right after the 8-byte header
        assert_eq!(
            f32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            1.0
        );

        fs::remove_file(&path).ok();
    }
}
