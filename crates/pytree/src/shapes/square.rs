//! Rotated square unit.

use std::f64::consts::FRAC_PI_2;

use crate::color::Color;
use crate::error::{GeometryError, check_finite, check_length};
use crate::geometry::{Point, Polygon};

/// A square with side `a` standing on the edge `AB`, rotated by `theta`.
///
/// ```text
///   D ----- C
///   |       |
///   A ----- B
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    x: f64,
    y: f64,
    a: f64,
    theta: f64,
    face: Color,
    line: Color,
}

impl Square {
    pub fn new(x: f64, y: f64, a: f64, theta: f64, face: Color, line: Color) -> Self {
        Self { x, y, a, theta, face, line }
    }

    pub fn side(&self) -> f64 {
        self.a
    }

    pub fn inclination(&self) -> f64 {
        self.theta
    }

    pub fn face(&self) -> Color {
        self.face
    }

    pub fn line(&self) -> Color {
        self.line
    }

    /// Origin (south west).
    pub fn vertex_a(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// South east.
    pub fn vertex_b(&self) -> Point {
        self.vertex_a().polar(self.a, self.theta)
    }

    /// North east.
    pub fn vertex_c(&self) -> Point {
        self.vertex_b().polar(self.a, self.theta + FRAC_PI_2)
    }

    /// North west.
    pub fn vertex_d(&self) -> Point {
        self.vertex_a().polar(self.a, self.theta + FRAC_PI_2)
    }

    pub fn vertices(&self) -> [Point; 4] {
        [self.vertex_a(), self.vertex_b(), self.vertex_c(), self.vertex_d()]
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

    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(self.vertices().to_vec(), self.face, self.line)
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        check_finite("x", self.x)?;
        check_finite("y", self.y)?;
        check_finite("inclination", self.theta)?;
        check_length("side", self.a)
    }
}
