//! Right triangle unit.
//!
//! The triangle is described by its hypotenuse AB and by where the right
//! angle vertex C projects onto it:
//!
//! ```text
//!              C
//!            /   \
//!          /       \
//!        A --- H ---- B        |AH| = p · |AB|
//! ```
//!
//! With |AB| = h the leg AC has length h·√p and meets AB at α = acos(√p).

use std::f64::consts::FRAC_PI_2;

use crate::color::Color;
use crate::error::{GeometryError, check_finite, check_length, check_projection};
use crate::geometry::{Point, Polygon};

/// A right triangle hanging off the hypotenuse `AB`.
///
/// Preconditions `h > 0` and `0 <= p <= 1` are not checked on construction.
/// Outside them `sqrt`/`acos` return NaN and every derived vertex and angle
/// is NaN too; call [`Triangle::validate`] to catch that up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    x: f64,
    y: f64,
    h: f64,
    theta: f64,
    p: f64,
    face: Color,
    line: Color,
}

impl Triangle {
    pub fn new(x: f64, y: f64, h: f64, theta: f64, p: f64, face: Color, line: Color) -> Self {
        Self { x, y, h, theta, p, face, line }
    }

    pub fn hypotenuse(&self) -> f64 {
        self.h
    }

    pub fn inclination(&self) -> f64 {
        self.theta
    }

    pub fn projection(&self) -> f64 {
        self.p
    }

    pub fn face(&self) -> Color {
        self.face
    }

    pub fn line(&self) -> Color {
        self.line
    }

    /// Origin.
    pub fn vertex_a(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Far end of the hypotenuse.
    pub fn vertex_b(&self) -> Point {
        self.vertex_a().polar(self.h, self.theta)
    }

    /// Right angle vertex.
    pub fn vertex_c(&self) -> Point {
        self.vertex_a().polar(self.h * self.p.sqrt(), self.alpha() + self.theta)
    }

    pub fn vertices(&self) -> [Point; 3] {
        [self.vertex_a(), self.vertex_b(), self.vertex_c()]
    }

    pub fn min_x(&self) -> f64 {
        self.vertices().iter().map(|v| v.x).fold(f64::INFINITY, f64::min)
    }

    pub fn min_y(&self) -> f64 {
        self.vertices().iter().map(|v| v.y).fold(f64::INFINITY, f64::min)
    }

    pub fn max_x(&self) -> f64 {
        self.vertices().iter().map(|v| v.x).fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn max_y(&self) -> f64 {
        self.vertices().iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max)
    }

    /// Angle between leg AC and the hypotenuse, at A.
    pub fn alpha(&self) -> f64 {
        self.p.sqrt().acos()
    }

    /// Angle between leg BC and the hypotenuse, at B.
    pub fn beta(&self) -> f64 {
        FRAC_PI_2 - self.alpha()
    }

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices().to_vec(), self.face, self.line)
    }

    /// Report the first parameter that puts this triangle outside its domain.
    pub fn validate(&self) -> Result<(), GeometryError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_finite("inclination", self.theta)?;
        check_length("hypotenuse", self.h)?;
        check_projection(self.p)
    }
}
