//! Value normalization for display.

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// Linear normalization of raw emission values to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueScale {
    pub vmin: f32,
    pub vmax: f32,
}

impl ValueScale {
    /// Create a scale from explicit bounds.
    pub fn new(vmin: f32, vmax: f32) -> Self {
        Self { vmin, vmax }
    }

    /// Scale for emission display: vmin pinned to 0, vmax at the
    /// 99.5th percentile of the finite values across the supplied
    /// tiles. Pinning vmax below the true maximum keeps a few urban
    /// hot cells from flattening the rest of the gradient.
    pub fn from_tiles<'a>(tiles: impl IntoIterator<Item = &'a [f32]>) -> Result<Self> {
        let mut values: Vec<f32> = tiles
            .into_iter()
            .flatten()
            .copied()
            .filter(|v| v.is_finite())
            .collect();

        if values.is_empty() {
            return Err(RenderError::EmptyScale);
        }

        values.sort_by(|a, b| a.total_cmp(b));
        let vmax = percentile_sorted(&values, 99.5);

        Ok(Self { vmin: 0.0, vmax })
    }

    /// Normalize a raw value to [0, 1], clamping out-of-range input.
    pub fn normalize(&self, v: f32) -> f32 {
        let span = self.vmax - self.vmin;
        if span <= 0.0 {
            return 0.0;
        }
        ((v - self.vmin) / span).clamp(0.0, 1.0)
    }
}

/// Percentile of a sorted slice with linear interpolation between
/// order statistics (the same definition numpy uses by default).
pub fn percentile_sorted(sorted: &[f32], p: f64) -> f32 {
    debug_assert!(!sorted.is_empty());
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0).clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = (rank - lo as f64) as f32;

    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentile_interpolates() {
        let v = [0.0, 10.0];
        assert_eq!(percentile_sorted(&v, 50.0), 5.0);
        assert_eq!(percentile_sorted(&v, 0.0), 0.0);
        assert_eq!(percentile_sorted(&v, 100.0), 10.0);
    }

    #[test]
    fn test_percentile_caps_outliers() {
        // 999 ordinary values and one huge outlier
        let mut v: Vec<f32> = (0..999).map(|i| i as f32 / 1000.0).collect();
        v.push(1e9);
        v.sort_by(|a, b| a.total_cmp(b));

        let p = percentile_sorted(&v, 99.5);
        assert!(p < 100.0, "p99.5 should not reach the outlier, got {}", p);
    }

    #[test]
    fn test_from_tiles_skips_non_finite() {
        let a = vec![1.0, f32::NAN, 3.0];
        let b = vec![f32::INFINITY, 2.0];
        let scale = ValueScale::from_tiles([a.as_slice(), b.as_slice()]).unwrap();
        assert_eq!(scale.vmin, 0.0);
        assert!(scale.vmax <= 3.0);
    }

    #[test]
    fn test_from_tiles_empty_is_an_error() {
        let empty: Vec<f32> = vec![f32::NAN];
        assert!(matches!(
            ValueScale::from_tiles([empty.as_slice()]),
            Err(RenderError::EmptyScale)
        ));
    }

    #[test]
    fn test_normalize_clamps() {
        let s = ValueScale::new(0.0, 10.0);
        assert_eq!(s.normalize(-5.0), 0.0);
        assert_eq!(s.normalize(5.0), 0.5);
        assert_eq!(s.normalize(50.0), 1.0);
    }

    #[test]
    fn test_degenerate_scale_normalizes_to_zero() {
        let s = ValueScale::new(0.0, 0.0);
        assert_eq!(s.normalize(5.0), 0.0);
    }
}
