//! Block-average downsampling for display-resolution rasters.
//!
//! Zonal aggregation always runs at full resolution; downsampling is
//! only used when a tile is loaded for map overlay rendering, where a
//! 1 km grid is far denser than the screen.

/// Downsample a 2D grid by an integer factor using block averaging.
///
/// Takes a grid of size (width, height) and produces a grid of size
/// (width/factor, height/factor), rounded down for non-divisible
/// dimensions. Each output pixel is the mean of its factor×factor
/// input block, ignoring NaN values; an all-NaN block stays NaN.
///
/// # Returns
/// Tuple of (downsampled_data, new_width, new_height)
pub fn downsample_mean(
    data: &[f32],
    width: usize,
    height: usize,
    factor: usize,
) -> (Vec<f32>, usize, usize) {
    if factor <= 1 {
        return (data.to_vec(), width, height);
    }

    let new_width = width / factor;
    let new_height = height / factor;

    if new_width == 0 || new_height == 0 {
        return (vec![], 0, 0);
    }

    let mut output = vec![f32::NAN; new_width * new_height];

    for out_y in 0..new_height {
        for out_x in 0..new_width {
            let mut sum = 0.0f64;
            let mut count = 0usize;

            for dy in 0..factor {
                let in_y = out_y * factor + dy;
                let row = &data[in_y * width..in_y * width + width];
                for dx in 0..factor {
                    let v = row[out_x * factor + dx];
                    if !v.is_nan() {
                        sum += v as f64;
                        count += 1;
                    }
                }
            }

            if count > 0 {
                output[out_y * new_width + out_x] = (sum / count as f64) as f32;
            }
        }
    }

    (output, new_width, new_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downsample_4x4_by_2() {
        #[rustfmt::skip]
        let data = vec![
            1.0, 2.0, 3.0, 4.0,
            5.0, 6.0, 7.0, 8.0,
            1.0, 1.0, 2.0, 2.0,
            1.0, 1.0, 2.0, 2.0,
        ];

        let (out, w, h) = downsample_mean(&data, 4, 4, 2);
        assert_eq!((w, h), (2, 2));
        assert_eq!(out, vec![3.5, 5.5, 1.0, 2.0]);
    }

    #[test]
    fn test_downsample_skips_nan() {
        let data = vec![1.0, f32::NAN, f32::NAN, 3.0];
        let (out, w, h) = downsample_mean(&data, 2, 2, 2);
        assert_eq!((w, h), (1, 1));
        assert_eq!(out[0], 2.0);
    }

    #[test]
    fn test_downsample_all_nan_block_stays_nan() {
        let data = vec![f32::NAN; 4];
        let (out, _, _) = downsample_mean(&data, 2, 2, 2);
        assert!(out[0].is_nan());
    }

    #[test]
    fn test_factor_one_is_identity() {
        let data = vec![1.0, 2.0, 3.0, 4.0];
        let (out, w, h) = downsample_mean(&data, 2, 2, 1);
        assert_eq!((w, h), (2, 2));
        assert_eq!(out, data);
    }

    #[test]
    fn test_odd_dimensions_truncate() {
        let data = vec![1.0; 5 * 5];
        let (out, w, h) = downsample_mean(&data, 5, 5, 2);
        assert_eq!((w, h), (2, 2));
        assert_eq!(out.len(), 4);
    }
}
