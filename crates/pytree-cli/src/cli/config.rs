//! Tree settings file.
//!
//! Settings are YAML; every key is optional:
//!
//! ```yaml
//! depth: 10
//! side: 1.0
//! ratio: 0.5
//! colormap: viridis
//! face: "#2a788e"
//! line: black
//! canvas:
//!   width: 800
//!   background: white
//!   stroke_width: 0.002
//!   margin: 0.05
//! ```
//!
//! Command line flags win over the file.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use pytree::{Branch, Color, SvgStyle, trunk};

use super::args::TreeArgs;
use super::error::CliError;

/// Deepest tree the CLI will grow (2^20 leaves).
pub const MAX_DEPTH: usize = 20;

/// Everything needed to grow and draw a tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeConfig {
    pub depth: usize,
    pub side: f64,
    pub ratio: f64,
    pub colormap: String,
    pub face: String,
    pub line: String,
    pub canvas: Canvas,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: 10,
            side: 1.0,
            ratio: 0.5,
            colormap: "viridis".to_string(),
            face: "#2a788e".to_string(),
            line: "black".to_string(),
            canvas: Canvas::default(),
        }
    }
}

/// Output document settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Canvas {
    /// Width in pixels
    pub width: u32,
    /// Page color; transparent when absent
    pub background: Option<String>,
    /// Stroke width as a fraction of the drawing size
    pub stroke_width: f64,
    /// Border as a fraction of the drawing size
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        let style = SvgStyle::default();
        Self {
            width: style.width_px,
            background: None,
            stroke_width: style.stroke_width,
            margin: style.margin,
        }
    }
}

impl TreeConfig {
    /// Parse a settings file.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&text).map_err(|source| CliError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty map.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Config file (if any) with the command line flags laid over it.
    pub fn resolve(args: &TreeArgs) -> Result<Self, CliError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply(args);
        Ok(config)
    }

    pub fn apply(&mut self, args: &TreeArgs) {
        if let Some(depth) = args.depth {
            self.depth = depth;
        }
        if let Some(side) = args.side {
            self.side = side;
        }
        if let Some(ratio) = args.ratio {
            self.ratio = ratio;
        }
        if let Some(colormap) = &args.colormap {
            self.colormap = colormap.clone();
        }
        if let Some(face) = &args.face {
            self.face = face.clone();
        }
        if let Some(line) = &args.line {
            self.line = line.clone();
        }
    }

    /// The validated trunk described by this config.
    pub fn trunk(&self) -> Result<Branch, CliError> {
        if self.depth > MAX_DEPTH {
            return Err(CliError::DepthTooLarge { depth: self.depth, max: MAX_DEPTH });
        }
        let face: Color = self.face.parse()?;
        let line: Color = self.line.parse()?;
        let root = trunk(self.side, self.ratio, face, line);
        root.validate()?;
        Ok(root)
    }

    pub fn svg_style(&self) -> Result<SvgStyle, CliError> {
        let canvas = &self.canvas;
        if canvas.width == 0 {
            return Err(CliError::NonPositive { what: "canvas width", value: 0.0 });
        }
        for (what, value) in [("stroke width", canvas.stroke_width), ("margin", canvas.margin)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(CliError::Negative { what, value });
            }
        }
        let background = canvas
            .background
            .as_deref()
            .map(str::parse::<Color>)
            .transpose()?;
        Ok(SvgStyle {
            stroke_width: canvas.stroke_width,
            margin: canvas.margin,
            width_px: canvas.width,
            background,
        })
    }
}
