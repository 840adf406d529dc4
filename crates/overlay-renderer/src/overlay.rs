//! Raster tile to RGBA overlay conversion.

use emission_common::RasterTile;

use crate::colormap::Colormap;
use crate::scale::ValueScale;

/// Options controlling overlay appearance.
#[derive(Debug, Clone)]
pub struct OverlayOptions {
    /// Gradient used for pixel colors.
    pub colormap: Colormap,
    /// Normalized values at or below this threshold render fully
    /// transparent, letting the base map show through where emissions
    /// are negligible.
    pub alpha_cutoff: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            colormap: Colormap::ylorrd(),
            alpha_cutoff: 0.05,
        }
    }
}

/// Render a tile to an RGBA buffer (4 bytes per pixel, row-major).
///
/// NaN pixels are transparent. All other pixels are normalized through
/// the scale, colored by the gradient, and given alpha 255 unless they
/// fall at or below the cutoff.
pub fn render_overlay(tile: &RasterTile, scale: &ValueScale, options: &OverlayOptions) -> Vec<u8> {
    let mut rgba = Vec::with_capacity(tile.len() * 4);

    for &v in &tile.data {
        if v.is_nan() {
            rgba.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        let t = scale.normalize(v);
        if t <= options.alpha_cutoff {
            rgba.extend_from_slice(&[0, 0, 0, 0]);
            continue;
        }

        let [r, g, b] = options.colormap.sample(t);
        rgba.extend_from_slice(&[r, g, b, 255]);
    }

    rgba
}

#[cfg(test)]
mod tests {
    use super::*;
    use emission_common::GeoTransform;

    fn tile(data: Vec<f32>, width: usize, height: usize) -> RasterTile {
        RasterTile::new(
            data,
            width,
            height,
            GeoTransform::new(0.0, height as f64, 1.0, -1.0),
        )
    }

    #[test]
    fn test_near_zero_pixels_are_transparent() {
        let t = tile(vec![0.0, 0.01, 50.0, 100.0], 2, 2);
        let scale = ValueScale::new(0.0, 100.0);
        let rgba = render_overlay(&t, &scale, &OverlayOptions::default());

        assert_eq!(rgba.len(), 16);
        assert_eq!(rgba[3], 0); // 0.0 -> transparent
        assert_eq!(rgba[7], 0); // 0.01 normalizes below cutoff
        assert_eq!(rgba[11], 255);
        assert_eq!(rgba[15], 255);
    }

    #[test]
    fn test_nan_pixels_are_transparent() {
        let t = tile(vec![f32::NAN, 80.0], 2, 1);
        let scale = ValueScale::new(0.0, 100.0);
        let rgba = render_overlay(&t, &scale, &OverlayOptions::default());

        assert_eq!(rgba[3], 0);
        assert_eq!(rgba[7], 255);
    }

    #[test]
    fn test_hot_pixels_trend_red() {
        let t = tile(vec![10.0, 100.0], 2, 1);
        let scale = ValueScale::new(0.0, 100.0);
        let rgba = render_overlay(&t, &scale, &OverlayOptions::default());

        // hotter pixel loses the yellow: green channel drops sharply
        assert!(rgba[5] < rgba[1]);
    }
}
