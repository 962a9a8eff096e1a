//! Core geometry types for pytree.
//!
//! ## Rust Lesson #3: Structs & Derives
//!
//! Every shape in the tree is built from plain `Point` values. They are
//! `Copy`, so passing them around never moves anything: a vertex returned
//! from a square can be handed straight to a triangle constructor.
//!
//! The `#[derive(...)]` macro auto-generates common functionality:
//! - `Debug` = lets you print with `{:?}`
//! - `Clone`/`Copy` = duplicate the value implicitly (small stack values only)
//! - `PartialEq` = compare with `==`
//! - `Serialize` = serde can turn it into JSON

use serde::Serialize;

use crate::color::Color;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A closed polygon with its paint.
///
/// This is the shape description the geometry hands to a render adapter:
/// the outline plus the fill and line colors the unit was built with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    /// Boundary vertices, in construction order
    pub outer: Vec<Point>,
    /// Face color
    pub fill: Color,
    /// Edge color
    pub stroke: Color,
}

// ============================================================================
// IMPLEMENTATIONS (methods)
// ============================================================================

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point reached by walking `length` from here in direction `angle`
    /// (radians, counter-clockwise from the +x axis).
    #[inline]
    pub fn polar(&self, length: f64, angle: f64) -> Point {
        Point::new(self.x + length * angle.cos(), self.y + length * angle.sin())
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// True if both coordinates are finite (not NaN, not infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Polygon {
    pub fn new(outer: Vec<Point>, fill: Color, stroke: Color) -> Self {
        Self { outer, fill, stroke }
    }

    /// Get the bounding box as (min_x, min_y, max_x, max_y).
    ///
    /// ## Rust Lesson #6: Option<T>
    ///
    /// An empty polygon has no bounding box, so we return `None` instead of
    /// inventing infinities the caller would have to special-case.
    pub fn bounding_box(&self) -> Option<(f64, f64, f64, f64)> {
        bounding_box_of_points(&self.outer)
    }

    /// Calculate signed area using the shoelace formula.
    ///
    /// Positive for counter-clockwise winding (y axis pointing up).
    #[inline]
    pub fn signed_area(&self) -> f64 {
        signed_area_of_points(&self.outer)
    }
}

/// Bounding box of a point sequence as (min_x, min_y, max_x, max_y).
pub fn bounding_box_of_points(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Merge two bounding boxes into the box covering both.
pub fn union_bounds(
    a: (f64, f64, f64, f64),
    b: (f64, f64, f64, f64),
) -> (f64, f64, f64, f64) {
    (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
}

/// Calculate signed area of a point sequence using the shoelace formula.
///
/// Returns:
/// - Positive value for counter-clockwise winding
/// - Negative value for clockwise winding
pub fn signed_area_of_points(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area / 2.0
}

// ============================================================================
// TESTS
// ============================================================================
