//! CLI error type.

use std::path::PathBuf;

use pytree::{GeometryError, RenderError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: std::io::Error },

    #[error("invalid config {path}: {source}")]
    Config { path: PathBuf, source: serde_yaml::Error },

    #[error("invalid tree: {0}")]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("PNG export failed: {0}")]
    Png(String),

    #[error("depth {depth} is too large (max {max})")]
    DepthTooLarge { depth: usize, max: usize },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must be a finite number, zero or more, got {value}")]
    Negative { what: &'static str, value: f64 },
}
