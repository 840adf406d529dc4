//! GeoTIFF loading.
//!
//! The TIFF container is decoded by the `tiff` crate; this module
//! interprets the GeoTIFF georeferencing tags (ModelPixelScale and
//! ModelTiepoint) into a [`GeoTransform`] and converts band 1 to `f32`.
//!
//! Emission rasters are single-band; multi-sample files are rejected.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tracing::debug;

use emission_common::{GeoTransform, RasterTile};

use crate::downsample::downsample_mean;
use crate::error::{RasterIoError, Result};

/// Open a GeoTIFF and decode it at full resolution.
pub fn open_raster(path: impl AsRef<Path>) -> Result<RasterTile> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| RasterIoError::open_failed(format!("{}: {}", path.display(), e)))?;

    let mut decoder = Decoder::new(BufReader::new(file))
        .map_err(|e| RasterIoError::open_failed(format!("{}: {}", path.display(), e)))?;

    let (width, height) = decoder
        .dimensions()
        .map_err(|e| RasterIoError::read_failed(e.to_string()))?;
    let (width, height) = (width as usize, height as usize);

    let transform = read_geotransform(&mut decoder)?;

    let data = match decoder
        .read_image()
        .map_err(|e| RasterIoError::read_failed(e.to_string()))?
    {
        DecodingResult::F32(v) => v,
        DecodingResult::F64(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::U8(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::U16(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::U32(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::U64(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::I8(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::I16(v) => v.into_iter().map(f32::from).collect(),
        DecodingResult::I32(v) => v.into_iter().map(|x| x as f32).collect(),
        DecodingResult::I64(v) => v.into_iter().map(|x| x as f32).collect(),
    };

    if data.len() != width * height {
        return Err(RasterIoError::UnsupportedFormat(format!(
            "expected single-band image, got {} samples for {}x{} pixels",
            data.len(),
            width,
            height
        )));
    }

    debug!(
        path = %path.display(),
        width,
        height,
        "decoded raster"
    );

    Ok(RasterTile::new(data, width, height, transform))
}

/// Open a GeoTIFF and downsample it by `factor` via block averaging.
///
/// The transform is adjusted so the downsampled tile covers the same
/// extent as the pixels that survive truncation.
pub fn open_raster_downsampled(path: impl AsRef<Path>, factor: usize) -> Result<RasterTile> {
    let tile = open_raster(path)?;
    if factor <= 1 {
        return Ok(tile);
    }

    let (data, width, height) = downsample_mean(&tile.data, tile.width, tile.height, factor);
    Ok(RasterTile::new(
        data,
        width,
        height,
        tile.transform.downsampled(factor),
    ))
}

/// Read ModelPixelScale + ModelTiepoint into an affine transform.
fn read_geotransform<R: std::io::Read + std::io::Seek>(
    decoder: &mut Decoder<R>,
) -> Result<GeoTransform> {
    let scale = decoder
        .get_tag_f64_vec(Tag::ModelPixelScaleTag)
        .map_err(|e| RasterIoError::invalid_metadata(format!("ModelPixelScale: {}", e)))?;
    if scale.len() < 2 {
        return Err(RasterIoError::invalid_metadata(format!(
            "ModelPixelScale has {} values, need at least 2",
            scale.len()
        )));
    }

    let tiepoint = decoder
        .get_tag_f64_vec(Tag::ModelTiepointTag)
        .map_err(|e| RasterIoError::invalid_metadata(format!("ModelTiepoint: {}", e)))?;
    if tiepoint.len() < 6 {
        return Err(RasterIoError::invalid_metadata(format!(
            "ModelTiepoint has {} values, need at least 6",
            tiepoint.len()
        )));
    }

    // Tiepoint maps raster point (i, j) to world point (x, y).
    // Almost always (0, 0) -> top-left corner, but honor offsets.
    let (i, j) = (tiepoint[0], tiepoint[1]);
    let (x, y) = (tiepoint[3], tiepoint[4]);
    let (sx, sy) = (scale[0], scale[1]);

    Ok(GeoTransform::new(x - i * sx, y + j * sy, sx, -sy))
}
