//! Turning a tree into something drawable.
//!
//! The geometry knows nothing about output formats. It talks to a
//! [`RenderAdapter`], which supplies three things: a color scale by name, a
//! way to wrap an outline into a shape, and a container for
//! `(shape, color)` pairs. [`SvgAdapter`] is the adapter shipped with the
//! crate; its collection serialises to a standalone SVG document.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use tracing::{debug, warn};

use crate::branch::Branch;
use crate::color::Color;
use crate::colormap::ColorScale;
use crate::error::RenderError;
use crate::geometry::{Point, Polygon, bounding_box_of_points, union_bounds};
use crate::tree::Tree;

/// The services the tree needs from a drawing backend.
pub trait RenderAdapter {
    type Shape;
    type Collection;

    /// Resolve a color scale by name.
    fn color_scale(&self, name: &str) -> Result<ColorScale, RenderError>;

    /// Wrap an outline into a drawable shape.
    fn polygon(&self, points: &[Point], face: Color, line: Color) -> Self::Shape;

    /// Gather shapes, in drawing order, each painted with its color.
    fn collection(&self, items: Vec<(Self::Shape, Color)>) -> Self::Collection;
}

/// A rendered tree together with the branches it was drawn from.
#[derive(Debug, Clone)]
pub struct Drawing<C> {
    pub collection: C,
    pub tree: Tree,
}

/// Every branch outline of `tree`, colored by level: level `i` of a tree
/// with `depth` levels samples the scale at `i / depth`.
pub fn tree_collection<A: RenderAdapter>(
    tree: &Tree,
    scale_name: &str,
    adapter: &A,
) -> Result<A::Collection, RenderError> {
    let scale = adapter.color_scale(scale_name)?;
    let depth = tree.depth().max(1) as f64;

    let items: Vec<(A::Shape, Color)> = tree
        .iter()
        .map(|(level, branch)| {
            let outline = branch.to_polygon();
            let shape = adapter.polygon(&outline.outer, outline.fill, outline.stroke);
            (shape, scale.sample(level as f64 / depth))
        })
        .collect();

    debug!(shapes = items.len(), scale = scale.name(), "assembled tree collection");
    Ok(adapter.collection(items))
}

impl Branch {
    /// Outlines of generations `0..depth`, colored by level.
    pub fn tree_as_collection<A: RenderAdapter>(
        &self,
        depth: usize,
        scale_name: &str,
        adapter: &A,
    ) -> Result<A::Collection, RenderError> {
        tree_collection(&self.build_tree(depth), scale_name, adapter)
    }

    /// Like [`Branch::tree_as_collection`], also handing back the tree.
    pub fn draw_tree<A: RenderAdapter>(
        &self,
        depth: usize,
        scale_name: &str,
        adapter: &A,
    ) -> Result<Drawing<A::Collection>, RenderError> {
        let tree = self.build_tree(depth);
        let collection = tree_collection(&tree, scale_name, adapter)?;
        Ok(Drawing { collection, tree })
    }
}

impl Tree {
    /// Squares and/or triangles of every branch as separate polygons, each
    /// keeping its own colors. Level order, then branch order.
    pub fn polygon_parts(&self, include_square: bool, include_triangle: bool) -> Vec<Polygon> {
        self.iter()
            .flat_map(|(_, b)| b.to_polygon_parts(include_square, include_triangle))
            .collect()
    }

    /// Bounding box of every branch outline.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.iter()
            .filter_map(|(_, b)| bounding_box_of_points(&b.vertices()))
            .reduce(union_bounds)
    }
}

// ============================================================================
// SVG
// ============================================================================

/// Output settings for [`SvgCollection::to_svg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgStyle {
    /// Stroke width as a fraction of the drawing's larger extent
    pub stroke_width: f64,
    /// Blank border as a fraction of the drawing's larger extent
    pub margin: f64,
    /// Width of the document in pixels; height follows the aspect ratio
    pub width_px: u32,
    /// Page color, transparent when `None`
    pub background: Option<Color>,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke_width: 0.002,
            margin: 0.05,
            width_px: 800,
            background: None,
        }
    }
}

/// One painted outline.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgPolygon {
    pub points: Vec<Point>,
    pub fill: Color,
    pub stroke: Color,
}

impl SvgPolygon {
    fn is_drawable(&self) -> bool {
        self.points.len() >= 3 && self.points.iter().all(Point::is_finite)
    }
}

/// Adapter producing [`SvgCollection`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgAdapter {
    pub style: SvgStyle,
}

impl SvgAdapter {
    pub fn new(style: SvgStyle) -> Self {
        Self { style }
    }
}

impl RenderAdapter for SvgAdapter {
    type Shape = SvgPolygon;
    type Collection = SvgCollection;

    fn color_scale(&self, name: &str) -> Result<ColorScale, RenderError> {
        ColorScale::by_name(name)
    }

    fn polygon(&self, points: &[Point], face: Color, line: Color) -> SvgPolygon {
        SvgPolygon { points: points.to_vec(), fill: face, stroke: line }
    }

    /// The item color replaces both fill and stroke.
    fn collection(&self, items: Vec<(SvgPolygon, Color)>) -> SvgCollection {
        let shapes = items
            .into_iter()
            .map(|(shape, color)| SvgPolygon { fill: color, stroke: color, ..shape })
            .collect();
        SvgCollection { shapes, style: self.style }
    }
}

/// Ordered shapes ready to be written as SVG. Later shapes paint over
/// earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgCollection {
    shapes: Vec<SvgPolygon>,
    style: SvgStyle,
}

impl SvgCollection {
    /// Polygons drawn with their own colors.
    pub fn from_polygons(polygons: Vec<Polygon>, style: SvgStyle) -> Self {
        let shapes = polygons
            .into_iter()
            .map(|p| SvgPolygon { points: p.outer, fill: p.fill, stroke: p.stroke })
            .collect();
        Self { shapes, style }
    }

    pub fn shapes(&self) -> &[SvgPolygon] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn style(&self) -> SvgStyle {
        self.style
    }

    pub fn set_style(&mut self, style: SvgStyle) {
        self.style = style;
    }

    /// Bounding box of the drawable shapes.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        self.shapes
            .iter()
            .filter(|s| s.is_drawable())
            .filter_map(|s| bounding_box_of_points(&s.points))
            .reduce(union_bounds)
    }

    /// Write the collection as an SVG document.
    ///
    /// The drawing keeps equal x/y scale and fits its bounding box plus the
    /// margin. Y points up, as in the geometry. Shapes with NaN or infinite
    /// coordinates cannot be drawn and are left out with a warning.
    pub fn to_svg(&self) -> Result<String, RenderError> {
        let (min_x, min_y, max_x, max_y) = self.bounds().unwrap_or((0.0, 0.0, 1.0, 1.0));
        let extent = (max_x - min_x).max(max_y - min_y).max(f64::EPSILON);
        let margin = extent * self.style.margin;
        let view_w = (max_x - min_x) + 2.0 * margin;
        let view_h = (max_y - min_y) + 2.0 * margin;
        // The y flip maps y to -y, so the top of the view is -(max_y + margin).
        let view_box = format!(
            "{} {} {} {}",
            fmt_num(min_x - margin),
            fmt_num(-(max_y + margin)),
            fmt_num(view_w),
            fmt_num(view_h)
        );
        let width_px = self.style.width_px.max(1);
        let height_px = ((width_px as f64) * view_h / view_w).round().max(1.0) as u32;
        let stroke_width = fmt_num(extent * self.style.stroke_width);

        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;

        let mut svg = BytesStart::new("svg");
        svg.push_attribute(("xmlns", "http://www.w3.org/2000/svg"));
        svg.push_attribute(("viewBox", view_box.as_str()));
        svg.push_attribute(("width", width_px.to_string().as_str()));
        svg.push_attribute(("height", height_px.to_string().as_str()));
        writer.write_event(Event::Start(svg)).map_err(xml_error)?;

        if let Some(background) = self.style.background {
            let mut rect = BytesStart::new("rect");
            rect.push_attribute(("x", fmt_num(min_x - margin).as_str()));
            rect.push_attribute(("y", fmt_num(-(max_y + margin)).as_str()));
            rect.push_attribute(("width", fmt_num(view_w).as_str()));
            rect.push_attribute(("height", fmt_num(view_h).as_str()));
            push_paint(&mut rect, "fill", background);
            writer.write_event(Event::Empty(rect)).map_err(xml_error)?;
        }

        let mut group = BytesStart::new("g");
        group.push_attribute(("transform", "scale(1,-1)"));
        group.push_attribute(("stroke-width", stroke_width.as_str()));
        group.push_attribute(("stroke-linejoin", "round"));
        writer.write_event(Event::Start(group)).map_err(xml_error)?;

        let mut skipped = 0usize;
        for shape in &self.shapes {
            if !shape.is_drawable() {
                skipped += 1;
                continue;
            }
            let points = shape
                .points
                .iter()
                .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
                .collect::<Vec<_>>()
                .join(" ");
            let mut polygon = BytesStart::new("polygon");
            polygon.push_attribute(("points", points.as_str()));
            push_paint(&mut polygon, "fill", shape.fill);
            push_paint(&mut polygon, "stroke", shape.stroke);
            writer.write_event(Event::Empty(polygon)).map_err(xml_error)?;
        }
        if skipped > 0 {
            warn!(skipped, "left out shapes with non-finite coordinates");
        }

        writer.write_event(Event::End(BytesEnd::new("g"))).map_err(xml_error)?;
        writer.write_event(Event::End(BytesEnd::new("svg"))).map_err(xml_error)?;

        let mut out = String::from_utf8(writer.into_inner()).map_err(xml_error)?;
        out.push('\n');
        Ok(out)
    }
}

/// `fill`/`stroke` plus the matching opacity attribute when not opaque.
fn push_paint(element: &mut BytesStart<'_>, attr: &str, color: Color) {
    element.push_attribute((attr, color.to_hex().as_str()));
    if color.a != 255 {
        let opacity_attr = format!("{}-opacity", attr);
        element.push_attribute((opacity_attr.as_str(), fmt_num(color.opacity()).as_str()));
    }
}

/// Shortest decimal that reads back as `v`. Never uses exponent notation,
/// so tiny branches keep their size.
fn fmt_num(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

fn xml_error<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Xml(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::BranchColors;

    fn trunk() -> Branch {
        Branch::trunk(1.0, 0.5, Color::rgb(0, 0, 255), Color::BLACK)
    }

    /// Records what the tree asks of it.
    struct Recorder;

    impl RenderAdapter for Recorder {
        type Shape = usize;
        type Collection = Vec<(usize, Color)>;

        fn color_scale(&self, name: &str) -> Result<ColorScale, RenderError> {
            ColorScale::by_name(name)
        }

        fn polygon(&self, points: &[Point], _face: Color, _line: Color) -> usize {
            points.len()
        }

        fn collection(&self, items: Vec<(usize, Color)>) -> Self::Collection {
            items
        }
    }

    #[test]
    fn one_color_per_level() {
        let items = trunk().tree_as_collection(3, "gray", &Recorder).unwrap();
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|(n, _)| *n == 5));

        let gray = ColorScale::by_name("gray").unwrap();
        assert_eq!(items[0].1, gray.sample(0.0));
        assert!(items[1..3].iter().all(|(_, c)| *c == gray.sample(1.0 / 3.0)));
        assert!(items[3..].iter().all(|(_, c)| *c == gray.sample(2.0 / 3.0)));
    }

    #[test]
    fn unknown_scale_is_an_error() {
        let err = trunk().tree_as_collection(2, "nope", &Recorder).unwrap_err();
        assert_eq!(err, RenderError::UnknownColorScale("nope".to_string()));
    }

    #[test]
    fn draw_tree_returns_the_tree() {
        let drawing = trunk().draw_tree(4, "viridis", &SvgAdapter::default()).unwrap();
        assert_eq!(drawing.tree.depth(), 4);
        assert_eq!(drawing.collection.len(), drawing.tree.branch_count());
    }

    #[test]
    fn zero_depth_draws_nothing() {
        let drawing = trunk().draw_tree(0, "viridis", &SvgAdapter::default()).unwrap();
        assert!(drawing.collection.is_empty());
        let svg = drawing.collection.to_svg().unwrap();
        assert!(!svg.contains("<polygon"));
    }

    #[test]
    fn collection_color_paints_fill_and_stroke() {
        let adapter = SvgAdapter::default();
        let shape = adapter.polygon(&trunk().vertices(), Color::WHITE, Color::BLACK);
        let coll = adapter.collection(vec![(shape, Color::rgb(9, 9, 9))]);
        assert_eq!(coll.shapes()[0].fill, Color::rgb(9, 9, 9));
        assert_eq!(coll.shapes()[0].stroke, Color::rgb(9, 9, 9));
    }

    #[test]
    fn svg_has_one_polygon_per_branch() {
        let coll = trunk().tree_as_collection(3, "viridis", &SvgAdapter::default()).unwrap();
        let svg = coll.to_svg().unwrap();
        assert!(svg.starts_with("<?xml"));
        assert_eq!(svg.matches("<polygon").count(), 7);
        assert!(svg.contains("scale(1,-1)"));

        let tree = usvg::Tree::from_str(&svg, &usvg::Options::default());
        assert!(tree.is_ok(), "generated SVG should parse: {:?}", tree.err());
    }

    #[test]
    fn background_rect_is_optional() {
        let style = SvgStyle { background: Some(Color::WHITE), ..SvgStyle::default() };
        let coll = trunk().tree_as_collection(2, "greens", &SvgAdapter::new(style)).unwrap();
        assert!(coll.to_svg().unwrap().contains("<rect"));

        let plain = trunk().tree_as_collection(2, "greens", &SvgAdapter::default()).unwrap();
        assert!(!plain.to_svg().unwrap().contains("<rect"));
    }

    #[test]
    fn bounds_cover_the_trunk() {
        let coll = trunk().tree_as_collection(1, "gray", &SvgAdapter::default()).unwrap();
        let (min_x, min_y, max_x, max_y) = coll.bounds().unwrap();
        assert!(min_x.abs() < 1e-12 && min_y.abs() < 1e-12);
        assert!((max_x - 1.0).abs() < 1e-12);
        assert!((max_y - 1.5).abs() < 1e-12);
        assert_eq!(trunk().build_tree(1).bounds(), coll.bounds());
    }

    #[test]
    fn non_finite_shapes_are_skipped() {
        let broken = Branch::trunk(1.0, -1.0, Color::BLACK, Color::BLACK);
        let coll = broken.tree_as_collection(2, "gray", &SvgAdapter::default()).unwrap();
        assert_eq!(coll.len(), 3);
        assert_eq!(coll.bounds(), None);
        assert!(!coll.to_svg().unwrap().contains("<polygon"));
    }

    #[test]
    fn parts_keep_their_own_colors() {
        let colors = BranchColors {
            square_face: Color::rgb(1, 0, 0),
            square_line: Color::rgb(2, 0, 0),
            triangle_face: Color::rgb(3, 0, 0),
            triangle_line: Color::rgb(4, 0, 0),
        };
        let tree = Branch::new(0.0, 0.0, 1.0, 0.0, 0.5, colors).build_tree(2);
        let parts = tree.polygon_parts(true, true);
        assert_eq!(parts.len(), 6);

        let coll = SvgCollection::from_polygons(parts, SvgStyle::default());
        let svg = coll.to_svg().unwrap();
        assert!(svg.contains("#010000"));
        assert!(svg.contains("#030000"));
    }

    #[test]
    fn translucent_colors_get_opacity() {
        let adapter = SvgAdapter::default();
        let shape = adapter.polygon(&trunk().vertices(), Color::WHITE, Color::BLACK);
        let half = Color { a: 128, ..Color::BLACK };
        let svg = adapter.collection(vec![(shape, half)]).to_svg().unwrap();
        assert!(svg.contains("fill-opacity"));
        assert!(svg.contains("stroke-opacity"));
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(0.5), "0.5");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-2.25), "-2.25");
        assert_eq!(fmt_num(1e-7), "0.0000001");
        assert_eq!(fmt_num(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn tiny_trees_keep_their_shape() {
        let tiny = Branch::trunk(1e-7, 0.5, Color::BLACK, Color::BLACK);
        let svg = tiny
            .tree_as_collection(2, "viridis", &SvgAdapter::default())
            .unwrap()
            .to_svg()
            .unwrap();

        let points: Vec<&str> = svg
            .split("points=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(points.len(), 3);
        let base: Vec<(f64, f64)> = points[0]
            .split(' ')
            .filter_map(|pair| pair.split_once(','))
            .map(|(x, y)| (x.parse::<f64>().unwrap(), y.parse::<f64>().unwrap()))
            .collect();
        let max_x = base.iter().map(|p| p.0).fold(f64::MIN, f64::max);
        let max_y = base.iter().map(|p| p.1).fold(f64::MIN, f64::max);
        assert!((max_x - 1e-7).abs() < 1e-15, "trunk width {}", max_x);
        assert!((max_y - 1.5e-7).abs() < 1e-15, "trunk height {}", max_y);
        for outline in &points {
            let distinct: std::collections::HashSet<&str> = outline.split(' ').collect();
            assert_eq!(distinct.len(), 5, "outline collapsed: {}", outline);
        }
    }
}
