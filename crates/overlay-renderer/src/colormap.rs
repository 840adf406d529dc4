//! Color gradients for emission display.

use serde::{Deserialize, Serialize};

/// A piecewise-linear color gradient over normalized [0, 1] values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Colormap {
    /// (position, rgb) stops, positions ascending over [0, 1]
    stops: Vec<(f32, [u8; 3])>,
}

impl Colormap {
    /// The 9-class YlOrRd gradient used for emission intensity.
    pub fn ylorrd() -> Self {
        Self {
            stops: vec![
                (0.000, [0xff, 0xff, 0xcc]),
                (0.125, [0xff, 0xed, 0xa0]),
                (0.250, [0xfe, 0xd9, 0x76]),
                (0.375, [0xfe, 0xb2, 0x4c]),
                (0.500, [0xfd, 0x8d, 0x3c]),
                (0.625, [0xfc, 0x4e, 0x2a]),
                (0.750, [0xe3, 0x1a, 0x1c]),
                (0.875, [0xbd, 0x00, 0x26]),
                (1.000, [0x80, 0x00, 0x26]),
            ],
        }
    }

    /// Build a colormap from custom stops.
    ///
    /// Stops are sorted by position; at least one is required.
    pub fn from_stops(mut stops: Vec<(f32, [u8; 3])>) -> Option<Self> {
        if stops.is_empty() {
            return None;
        }
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Some(Self { stops })
    }

    /// Color for a normalized value, clamped to [0, 1].
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let t = t.clamp(0.0, 1.0);

        let first = self.stops[0];
        if t <= first.0 {
            return first.1;
        }

        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = p1 - p0;
                let f = if span > 0.0 { (t - p0) / span } else { 0.0 };
                return [
                    lerp_u8(c0[0], c1[0], f),
                    lerp_u8(c0[1], c1[1], f),
                    lerp_u8(c0[2], c1[2], f),
                ];
            }
        }

        self.stops[self.stops.len() - 1].1
    }
}

#[inline]
fn lerp_u8(a: u8, b: u8, f: f32) -> u8 {
    (a as f32 + (b as f32 - a as f32) * f).round() as u8
}
