//! Branch: a square with a right triangle sitting on its top edge.
//!
//! ```text
//!            D
//!          /   \
//!        E ----- C
//!        |       |
//!        A ----- B
//! ```
//!
//! The triangle's hypotenuse is the square's top edge `EC`, so the outline
//! `A B C D E` is one closed pentagon. The two legs of the triangle, `ED` and
//! `DC`, are the bases the two child branches grow from.

use serde::Serialize;

use crate::color::Color;
use crate::error::{GeometryError, check_projection};
use crate::geometry::{Point, Polygon};
use crate::shapes::{Square, Triangle};

/// Paint for both halves of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BranchColors {
    pub square_face: Color,
    pub square_line: Color,
    pub triangle_face: Color,
    pub triangle_line: Color,
}

impl BranchColors {
    /// Same face and line color on the square and the triangle.
    pub fn uniform(face: Color, line: Color) -> Self {
        Self {
            square_face: face,
            square_line: line,
            triangle_face: face,
            triangle_line: line,
        }
    }
}

/// One unit of the tree.
///
/// A branch stores only its parameters. The square and triangle are derived
/// on demand, which keeps `Branch` a small `Copy` value that can be hashed
/// into the generation cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Branch {
    x: f64,
    y: f64,
    a: f64,
    theta: f64,
    p: f64,
    colors: BranchColors,
}

impl Branch {
    pub fn new(x: f64, y: f64, a: f64, theta: f64, p: f64, colors: BranchColors) -> Self {
        Self { x, y, a, theta, p, colors }
    }

    /// The root branch: origin at (0, 0), no inclination, one set of colors
    /// shared by square and triangle.
    pub fn trunk(a: f64, p: f64, face: Color, line: Color) -> Self {
        Self::new(0.0, 0.0, a, 0.0, p, BranchColors::uniform(face, line))
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn side(&self) -> f64 {
        self.a
    }

    pub fn inclination(&self) -> f64 {
        self.theta
    }

    pub fn projection(&self) -> f64 {
        self.p
    }

    pub fn colors(&self) -> BranchColors {
        self.colors
    }

    // square and triangle

    pub fn square(&self) -> Square {
        Square::new(
            self.x,
            self.y,
            self.a,
            self.theta,
            self.colors.square_face,
            self.colors.square_line,
        )
    }

    /// The triangle anchored at the square's north west corner.
    pub fn triangle(&self) -> Triangle {
        let anchor = self.square().vertex_d();
        Triangle::new(
            anchor.x,
            anchor.y,
            self.a,
            self.theta,
            self.p,
            self.colors.triangle_face,
            self.colors.triangle_line,
        )
    }

    // outline

    /// Origin.
    pub fn vertex_a(&self) -> Point {
        self.origin()
    }

    /// South east.
    pub fn vertex_b(&self) -> Point {
        self.square().vertex_b()
    }

    /// North east.
    pub fn vertex_c(&self) -> Point {
        self.square().vertex_c()
    }

    /// Apex of the triangle.
    pub fn vertex_d(&self) -> Point {
        self.triangle().vertex_c()
    }

    /// North west.
    pub fn vertex_e(&self) -> Point {
        self.square().vertex_d()
    }

    pub fn vertices(&self) -> [Point; 5] {
        let square = self.square();
        [
            square.vertex_a(),
            square.vertex_b(),
            square.vertex_c(),
            self.vertex_d(),
            square.vertex_d(),
        ]
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

    // drawing

    /// The pentagon outline, painted with the square's colors.
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(
            self.vertices().to_vec(),
            self.colors.square_face,
            self.colors.square_line,
        )
    }

    /// Square and/or triangle as separate polygons, each with its own colors.
    /// The square comes first when both are requested.
    pub fn to_polygon_parts(&self, include_square: bool, include_triangle: bool) -> Vec<Polygon> {
        let mut parts = Vec::with_capacity(2);
        if include_square {
            parts.push(self.square().to_polygon());
        }
        if include_triangle {
            parts.push(self.triangle().to_polygon());
        }
        parts
    }

    // growing

    /// Children on the triangle's legs: left on `ED`, right on `DC`.
    ///
    /// Each child is scaled so its base matches the leg exactly, and rotated
    /// so its base lies along it.
    pub fn grow(&self, left: bool, right: bool) -> Vec<Branch> {
        self.grow_with(self.colors, left, right)
    }

    /// Like [`Branch::grow`], but the children are painted with `colors`.
    pub fn grow_colored(&self, colors: BranchColors, left: bool, right: bool) -> Vec<Branch> {
        self.grow_with(colors, left, right)
    }

    fn grow_with(&self, colors: BranchColors, left: bool, right: bool) -> Vec<Branch> {
        let triangle = self.triangle();
        let alpha = triangle.alpha();
        let beta = triangle.beta();

        let mut children = Vec::with_capacity(2);
        if left {
            let origin = triangle.vertex_a();
            children.push(Branch::new(
                origin.x,
                origin.y,
                self.a * alpha.cos(),
                self.theta + alpha,
                self.p,
                colors,
            ));
        }
        if right {
            let origin = triangle.vertex_c();
            children.push(Branch::new(
                origin.x,
                origin.y,
                self.a * beta.cos(),
                self.theta - beta,
                self.p,
                colors,
            ));
        }
        children
    }

    /// Report the first parameter outside the branch's geometric domain.
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.square().validate()?;
        check_projection(self.p)
    }
}

/// Shortcut for [`Branch::trunk`].
pub fn trunk(a: f64, p: f64, face: Color, line: Color) -> Branch {
    Branch::trunk(a, p, face, line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EPS: f64 = 1e-10;

    fn blue_trunk(a: f64, p: f64) -> Branch {
        Branch::trunk(a, p, Color::rgb(0, 0, 255), Color::BLACK)
    }

    fn close(p: Point, q: Point) -> bool {
        p.distance(q) < EPS
    }

    #[test]
    fn trunk_sits_at_origin() {
        let b = blue_trunk(1.0, 0.5);
        assert_eq!(b.origin(), Point::new(0.0, 0.0));
        assert_eq!(b.inclination(), 0.0);
        assert_eq!(b.colors().square_face, b.colors().triangle_face);
        assert_eq!(b.colors().square_line, b.colors().triangle_line);
    }

    #[rstest]
    #[case(Branch::new(0.0, 0.0, 1.0, 0.0, 0.5, BranchColors::uniform(Color::BLACK, Color::BLACK)))]
    #[case(Branch::new(2.0, -1.0, 0.7, 0.9, 0.2, BranchColors::uniform(Color::BLACK, Color::BLACK)))]
    #[case(Branch::new(-3.0, 4.0, 2.2, -0.4, 0.8, BranchColors::uniform(Color::BLACK, Color::BLACK)))]
    fn triangle_sits_on_square(#[case] b: Branch) {
        // Same computation on both sides, so equality is exact.
        assert_eq!(b.square().vertex_d(), b.triangle().vertex_a());
        assert!(close(b.square().vertex_c(), b.triangle().vertex_b()));
        assert_eq!(b.triangle().hypotenuse(), b.side());
    }

    #[test]
    fn outline_order() {
        let b = blue_trunk(1.0, 0.5);
        let [a, bb, c, d, e] = b.vertices();
        assert!(close(a, Point::new(0.0, 0.0)));
        assert!(close(bb, Point::new(1.0, 0.0)));
        assert!(close(c, Point::new(1.0, 1.0)));
        assert!(close(d, Point::new(0.5, 1.5)));
        assert!(close(e, Point::new(0.0, 1.0)));
        // Square of area 1 plus a triangle of area 1/4.
        assert!((b.to_polygon().signed_area() - 1.25).abs() < EPS);
        assert!((b.max_y() - 1.5).abs() < EPS);
    }

    #[rstest]
    #[case(1.0, 0.0, 0.5)]
    #[case(2.0, 0.3, 0.3)]
    #[case(0.8, -0.6, 0.85)]
    fn growth_rule_scales_and_rotates(#[case] a: f64, #[case] theta: f64, #[case] p: f64) {
        let b = Branch::new(0.3, 0.1, a, theta, p, BranchColors::uniform(Color::BLACK, Color::WHITE));
        let alpha = b.triangle().alpha();
        let beta = b.triangle().beta();
        let children = b.grow(true, true);
        assert_eq!(children.len(), 2);

        let (left, right) = (children[0], children[1]);
        assert!((left.side() - a * alpha.cos()).abs() < EPS);
        assert!((right.side() - a * beta.cos()).abs() < EPS);
        assert!((left.inclination() - (theta + alpha)).abs() < EPS);
        assert!((right.inclination() - (theta - beta)).abs() < EPS);
        assert_eq!(left.origin(), b.vertex_e());
        assert_eq!(right.origin(), b.vertex_d());
        assert_eq!(left.projection(), p);
        assert_eq!(right.colors(), b.colors());
    }

    #[test]
    fn children_bases_cover_the_legs() {
        let b = Branch::new(0.0, 0.0, 1.0, 0.2, 0.35, BranchColors::uniform(Color::BLACK, Color::BLACK));
        let children = b.grow(true, true);
        // Left child's base runs E -> D, right child's base runs D -> C.
        assert!(close(children[0].vertex_b(), b.vertex_d()));
        assert!(close(children[1].vertex_b(), b.vertex_c()));
    }

    #[test]
    fn growth_flags_select_children() {
        let b = blue_trunk(1.0, 0.5);
        assert!(b.grow(false, false).is_empty());

        let left = b.grow(true, false);
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].origin(), b.vertex_e());

        let right = b.grow(false, true);
        assert_eq!(right.len(), 1);
        assert_eq!(right[0].origin(), b.vertex_d());
    }

    #[test]
    fn colored_growth_repaints_children_only() {
        let b = blue_trunk(1.0, 0.5);
        let red = BranchColors::uniform(Color::rgb(255, 0, 0), Color::WHITE);
        let children = b.grow_colored(red, true, true);
        assert!(children.iter().all(|c| c.colors() == red));
        assert_eq!(children[0].origin(), b.grow(true, false)[0].origin());
        assert_eq!(b.colors().square_face, Color::rgb(0, 0, 255));
    }

    #[test]
    fn outline_uses_square_colors() {
        let colors = BranchColors {
            square_face: Color::rgb(1, 2, 3),
            square_line: Color::rgb(4, 5, 6),
            triangle_face: Color::rgb(7, 8, 9),
            triangle_line: Color::rgb(10, 11, 12),
        };
        let b = Branch::new(0.0, 0.0, 1.0, 0.0, 0.5, colors);
        let poly = b.to_polygon();
        assert_eq!(poly.outer.len(), 5);
        assert_eq!(poly.fill, colors.square_face);
        assert_eq!(poly.stroke, colors.square_line);
    }

    #[test]
    fn polygon_parts_follow_flags() {
        let colors = BranchColors {
            square_face: Color::rgb(1, 1, 1),
            square_line: Color::rgb(2, 2, 2),
            triangle_face: Color::rgb(3, 3, 3),
            triangle_line: Color::rgb(4, 4, 4),
        };
        let b = Branch::new(0.0, 0.0, 1.0, 0.0, 0.5, colors);

        assert!(b.to_polygon_parts(false, false).is_empty());

        let both = b.to_polygon_parts(true, true);
        assert_eq!(both.len(), 2);
        assert_eq!(both[0].outer.len(), 4);
        assert_eq!(both[1].outer.len(), 3);
        assert_eq!(both[1].fill, colors.triangle_face);

        let tri = b.to_polygon_parts(false, true);
        assert_eq!(tri.len(), 1);
        assert_eq!(tri[0].stroke, colors.triangle_line);

        let sq = b.to_polygon_parts(true, false);
        assert_eq!(sq.len(), 1);
        assert_eq!(sq[0].fill, colors.square_face);
    }

    #[test]
    fn degenerate_projections_do_not_fail() {
        let flat_left = blue_trunk(1.0, 0.0);
        let children = flat_left.grow(true, true);
        // alpha = pi/2: the left child has zero width, the right child is full size.
        assert!(children[0].side().abs() < EPS);
        assert!((children[1].side() - 1.0).abs() < EPS);

        let flat_right = blue_trunk(1.0, 1.0);
        let children = flat_right.grow(true, true);
        assert!((children[0].side() - 1.0).abs() < EPS);
        assert!(children[1].side().abs() < EPS);
    }

    #[test]
    fn out_of_range_projection_propagates_nan() {
        let b = blue_trunk(1.0, 1.5);
        assert!(!b.vertex_d().is_finite());
        assert!(b.grow(true, true).iter().all(|c| c.side().is_nan()));
        assert_eq!(b.validate(), Err(GeometryError::ProjectionOutOfRange(1.5)));
    }

    #[test]
    fn validate_checks_side_first() {
        let b = blue_trunk(-1.0, 2.0);
        assert!(matches!(
            b.validate(),
            Err(GeometryError::NonPositiveLength { what: "side", .. })
        ));
        assert!(blue_trunk(1.0, 0.5).validate().is_ok());
    }

    #[test]
    fn free_trunk_matches_constructor() {
        let a = trunk(2.0, 0.3, Color::WHITE, Color::BLACK);
        let b = Branch::trunk(2.0, 0.3, Color::WHITE, Color::BLACK);
        assert_eq!(a, b);
    }
}
