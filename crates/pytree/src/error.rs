//! Error types.
//!
//! ## Rust Lesson #20: Error Handling
//!
//! Rust uses `Result<T, E>` instead of exceptions. `thiserror` writes the
//! `Display` and `std::error::Error` impls for us from the `#[error]`
//! attributes, so each variant documents its own message.
//!
//! Note what is *not* here: building vertices never returns an error. Out of
//! range geometry produces NaN coordinates (IEEE semantics), and `validate()`
//! is how a caller asks up front whether that will happen.

use thiserror::Error;

/// Parameters that put a unit outside its geometric domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("{what} must be positive, got {value}")]
    NonPositiveLength { what: &'static str, value: f64 },

    #[error("projection ratio must lie in [0, 1], got {0}")]
    ProjectionOutOfRange(f64),

    #[error("{what} is not finite: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Failures on the render side. None of these touch the computed tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("unknown color scale '{0}'")]
    UnknownColorScale(String),

    #[error("invalid color '{0}'")]
    InvalidColor(String),

    #[error("SVG write failed: {0}")]
    Xml(String),
}

/// Check that a length parameter is finite and strictly positive.
pub(crate) fn check_length(what: &'static str, value: f64) -> Result<(), GeometryError> {
    check_finite(what, value)?;
    if value <= 0.0 {
        return Err(GeometryError::NonPositiveLength { what, value });
    }
    Ok(())
}

pub(crate) fn check_finite(what: &'static str, value: f64) -> Result<(), GeometryError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::NonFinite { what, value })
    }
}

pub(crate) fn check_projection(p: f64) -> Result<(), GeometryError> {
    // NaN fails both comparisons, so it lands here too.
    if (0.0..=1.0).contains(&p) {
        Ok(())
    } else {
        Err(GeometryError::ProjectionOutOfRange(p))
    }
}
