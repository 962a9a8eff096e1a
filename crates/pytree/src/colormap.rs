//! Named color scales.
//!
//! Each scale is a list of `(position, color)` stops on [0, 1], sampled by
//! linear interpolation between neighbouring stops. Names follow the usual
//! plotting conventions and any name takes an `_r` suffix to run the scale
//! backwards (`viridis_r`).

use crate::color::Color;
use crate::error::RenderError;

type Stops = &'static [(f64, u32)];

const VIRIDIS: Stops = &[
    (0.0, 0x440154), (0.1, 0x482475), (0.2, 0x414487), (0.3, 0x355f8d),
    (0.4, 0x2a788e), (0.5, 0x21918c), (0.6, 0x22a884), (0.7, 0x44bf70),
    (0.8, 0x7ad151), (0.9, 0xbddf26), (1.0, 0xfde725),
];

const PLASMA: Stops = &[
    (0.0, 0x0d0887), (0.1, 0x41049d), (0.2, 0x6a00a8), (0.3, 0x8f0da4),
    (0.4, 0xb12a90), (0.5, 0xcc4778), (0.6, 0xe16462), (0.7, 0xf2844b),
    (0.8, 0xfca636), (0.9, 0xfcce25), (1.0, 0xf0f921),
];

const INFERNO: Stops = &[
    (0.0, 0x000004), (0.1, 0x160b39), (0.2, 0x420a68), (0.3, 0x6a176e),
    (0.4, 0x932667), (0.5, 0xbc3754), (0.6, 0xdd513a), (0.7, 0xf37819),
    (0.8, 0xfca50a), (0.9, 0xf6d746), (1.0, 0xfcffa4),
];

const MAGMA: Stops = &[
    (0.0, 0x000004), (0.1, 0x140e36), (0.2, 0x3b0f70), (0.3, 0x641a80),
    (0.4, 0x8c2981), (0.5, 0xb73779), (0.6, 0xde4968), (0.7, 0xf7705c),
    (0.8, 0xfe9f6d), (0.9, 0xfecf92), (1.0, 0xfcfdbf),
];

const CIVIDIS: Stops = &[
    (0.0, 0x00204d), (0.2, 0x31446b), (0.4, 0x666970),
    (0.6, 0x958f78), (0.8, 0xcbba69), (1.0, 0xffea46),
];

const GREENS: Stops = &[
    (0.0, 0xf7fcf5), (0.125, 0xe5f5e0), (0.25, 0xc7e9c0), (0.375, 0xa1d99b),
    (0.5, 0x74c476), (0.625, 0x41ab5d), (0.75, 0x238b45), (0.875, 0x006d2c),
    (1.0, 0x00441b),
];

const BLUES: Stops = &[
    (0.0, 0xf7fbff), (0.125, 0xdeebf7), (0.25, 0xc6dbef), (0.375, 0x9ecae1),
    (0.5, 0x6baed6), (0.625, 0x4292c6), (0.75, 0x2171b5), (0.875, 0x08519c),
    (1.0, 0x08306b),
];

const GREYS: Stops = &[
    (0.0, 0xffffff), (0.125, 0xf0f0f0), (0.25, 0xd9d9d9), (0.375, 0xbdbdbd),
    (0.5, 0x969696), (0.625, 0x737373), (0.75, 0x525252), (0.875, 0x252525),
    (1.0, 0x000000),
];

const GRAY: Stops = &[(0.0, 0x000000), (1.0, 0xffffff)];
const AUTUMN: Stops = &[(0.0, 0xff0000), (1.0, 0xffff00)];
const SPRING: Stops = &[(0.0, 0xff00ff), (1.0, 0xffff00)];
const SUMMER: Stops = &[(0.0, 0x008066), (1.0, 0xffff66)];
const WINTER: Stops = &[(0.0, 0x0000ff), (1.0, 0x00ff80)];
const COOL: Stops = &[(0.0, 0x00ffff), (1.0, 0xff00ff)];

const HOT: Stops = &[
    (0.0, 0x0b0000), (0.365, 0xff0000), (0.746, 0xffff00), (1.0, 0xffffff),
];

const COPPER: Stops = &[(0.0, 0x000000), (0.8, 0xffa066), (1.0, 0xffc77f)];

const JET: Stops = &[
    (0.0, 0x000080), (0.11, 0x0000ff), (0.36, 0x00ffff),
    (0.62, 0xffff00), (0.89, 0xff0000), (1.0, 0x800000),
];

/// Every built-in scale, in listing order.
const SCALES: &[(&str, Stops)] = &[
    ("viridis", VIRIDIS),
    ("plasma", PLASMA),
    ("inferno", INFERNO),
    ("magma", MAGMA),
    ("cividis", CIVIDIS),
    ("greens", GREENS),
    ("blues", BLUES),
    ("greys", GREYS),
    ("gray", GRAY),
    ("autumn", AUTUMN),
    ("spring", SPRING),
    ("summer", SUMMER),
    ("winter", WINTER),
    ("cool", COOL),
    ("hot", HOT),
    ("copper", COPPER),
    ("jet", JET),
];

/// A color scale mapping [0, 1] to colors.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    name: String,
    stops: Vec<(f64, Color)>,
}

impl ColorScale {
    /// Look up a built-in scale. Case-insensitive; `_r` reverses it.
    pub fn by_name(name: &str) -> Result<Self, RenderError> {
        let lower = name.trim().to_ascii_lowercase();
        let (base, reversed) = match lower.strip_suffix("_r") {
            Some(base) => (base, true),
            None => (lower.as_str(), false),
        };
        let base = if base == "grey" { "gray" } else { base };

        let stops = SCALES
            .iter()
            .find(|(n, _)| *n == base)
            .map(|(_, stops)| *stops)
            .ok_or_else(|| RenderError::UnknownColorScale(name.to_string()))?;

        let mut stops: Vec<(f64, Color)> = stops.iter().map(|&(t, hex)| (t, from_hex(hex))).collect();
        if reversed {
            stops = stops.into_iter().rev().map(|(t, c)| (1.0 - t, c)).collect();
        }
        Ok(Self { name: lower, stops })
    }

    /// A scale from explicit stops. Stops are sorted by position; an empty
    /// list samples as black.
    pub fn from_stops(name: impl Into<String>, mut stops: Vec<(f64, Color)>) -> Self {
        stops.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { name: name.into(), stops }
    }

    /// Names accepted by [`ColorScale::by_name`] (without the `_r` variants).
    pub fn names() -> impl Iterator<Item = &'static str> {
        SCALES.iter().map(|(n, _)| *n)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Color at `t`. Values outside [0, 1] are clamped and NaN samples the
    /// start of the scale.
    pub fn sample(&self, t: f64) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

        let (Some(first), Some(last)) = (self.stops.first(), self.stops.last()) else {
            return Color::BLACK;
        };
        if t <= first.0 {
            return first.1;
        }
        if t >= last.0 {
            return last.1;
        }

        for pair in self.stops.windows(2) {
            let (t0, c0) = pair[0];
            let (t1, c1) = pair[1];
            if t <= t1 {
                let span = t1 - t0;
                let f = if span > 0.0 { (t - t0) / span } else { 1.0 };
                return lerp(c0, c1, f);
            }
        }
        last.1
    }
}

fn from_hex(hex: u32) -> Color {
    Color::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

fn lerp(a: Color, b: Color, f: f64) -> Color {
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;
    Color {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
        a: mix(a.a, b.a),
    }
}
