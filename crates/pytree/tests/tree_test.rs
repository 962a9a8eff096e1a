//! End-to-end checks on trees grown from a trunk.

use std::f64::consts::FRAC_PI_2;

use pytree::{
    BinaryGrowth, Branch, Color, Expansion, Point, Square, SvgAdapter, SvgStyle, trunk,
};

const EPS: f64 = 1e-10;

fn blue_black() -> Branch {
    let blue: Color = "blue".parse().unwrap();
    let black: Color = "black".parse().unwrap();
    trunk(1.0, 0.5, blue, black)
}

#[test]
fn three_levels_from_unit_trunk() {
    let root = blue_black();
    let tree = root.build_tree(3);
    assert_eq!(tree.depth(), 3);

    let level0 = tree.level(0).unwrap();
    assert_eq!(level0.len(), 1);
    assert_eq!(level0[0].origin(), Point::new(0.0, 0.0));
    assert_eq!(level0[0].inclination(), 0.0);

    let level1 = tree.level(1).unwrap();
    assert_eq!(level1.len(), 2);
    let reference = Square::new(0.0, 0.0, 1.0, 0.0, Color::BLACK, Color::BLACK);
    assert_eq!(level1[0].origin(), reference.vertex_d());

    assert_eq!(tree.level(2).unwrap().len(), 4);
    assert!(tree.level(3).is_none());
}

#[test]
fn symmetric_tree_mirrors_itself() {
    // p = 0.5 gives 45 degree children; every level is symmetric about x = 0.5.
    let tree = blue_black().build_tree(5);
    for (_, level) in tree.levels() {
        let xs: Vec<f64> = level
            .iter()
            .flat_map(|b| b.vertices())
            .map(|v| v.x - 0.5)
            .collect();
        let sum: f64 = xs.iter().sum();
        assert!(sum.abs() < 1e-9, "level should balance around x = 0.5, got {}", sum);
    }
}

#[test]
fn sides_shrink_by_the_leg_ratio() {
    let p: f64 = 0.3;
    let root = Branch::trunk(2.0, p, Color::WHITE, Color::BLACK);
    let level1 = root.nth_generation(1);
    assert!((level1[0].side() - 2.0 * p.sqrt()).abs() < EPS);
    assert!((level1[1].side() - 2.0 * (1.0 - p).sqrt()).abs() < EPS);
}

#[test]
fn generation_sizes_are_powers_of_two() {
    let exp = Expansion::new(BinaryGrowth::default());
    let root = blue_black();
    for n in 0..8 {
        assert_eq!(exp.nth_generation(&root, n).len(), 1usize << n);
    }
}

#[test]
fn total_area_is_constant_per_level() {
    // Pythagoras: the two child squares together have the parent's area.
    let tree = Branch::trunk(1.0, 0.2, Color::WHITE, Color::BLACK).build_tree(6);
    for (_, level) in tree.levels() {
        let area: f64 = level.iter().map(|b| b.side() * b.side()).sum();
        assert!((area - 1.0).abs() < 1e-9, "square area per level should stay 1, got {}", area);
    }
}

#[test]
fn degenerate_projections_still_build() {
    for p in [0.0, 1.0] {
        let tree = Branch::trunk(1.0, p, Color::WHITE, Color::BLACK).build_tree(4);
        assert_eq!(tree.branch_count(), 15);
        let t = tree.level(0).unwrap()[0].triangle();
        assert!((t.alpha() + t.beta() - FRAC_PI_2).abs() < EPS);
    }
}

#[test]
fn rendered_document_parses() {
    let style = SvgStyle { background: Some(Color::WHITE), ..SvgStyle::default() };
    let drawing = blue_black()
        .draw_tree(6, "viridis", &SvgAdapter::new(style))
        .unwrap();
    let svg = drawing.collection.to_svg().unwrap();
    assert_eq!(svg.matches("<polygon").count(), 63);

    let parsed = usvg::Tree::from_str(&svg, &usvg::Options::default()).unwrap();
    assert!(parsed.size().width() > 0.0);
}
