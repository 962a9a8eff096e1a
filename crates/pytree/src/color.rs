//! RGBA colors.
//!
//! The geometry treats colors as opaque values that it only carries around
//! and compares. Parsing accepts anything SVG/CSS accepts (`"blue"`,
//! `"#1f77b4"`, `"rgb(31, 119, 180)"`) by delegating to `svgtypes`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::RenderError;

/// An 8-bit RGBA color.
///
/// `Eq + Hash` matter here: branch colors are part of the generation cache
/// key, so every color must be usable as a map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    /// Opaque color from 8-bit channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque color from channels in [0, 1]. Out of range values are clamped.
    pub fn from_unit_rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgb(unit_to_byte(r), unit_to_byte(g), unit_to_byte(b))
    }

    /// Alpha as a fraction in [0, 1].
    pub fn opacity(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// `#rrggbb` form, without alpha.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn unit_to_byte(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = svgtypes::Color::from_str(s.trim())
            .map_err(|_| RenderError::InvalidColor(s.to_string()))?;
        Ok(Color {
            r: parsed.red,
            g: parsed.green,
            b: parsed.blue,
            a: parsed.alpha,
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())?;
        if self.a != 255 {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
