//! # pytree
//!
//! Pythagoras trees built from square/right-triangle branches.
//!
//! A [`Branch`] is a square with a right triangle on top. Its growth rule
//! puts a scaled, rotated copy of itself on each leg of the triangle, and
//! repeating that from a [`trunk`] gives a self-similar tree. The crate
//! computes the vertices of every branch, level by level, and hands them to
//! a [`RenderAdapter`] to be colored and drawn.
//!
//! ```
//! use pytree::{Color, SvgAdapter, trunk};
//!
//! let root = trunk(1.0, 0.5, Color::rgb(0, 0, 255), Color::BLACK);
//! let tree = root.build_tree(3);
//! assert_eq!(tree.level(2).map(|l| l.len()), Some(4));
//!
//! let svg = root
//!     .tree_as_collection(3, "viridis", &SvgAdapter::default())
//!     .and_then(|c| c.to_svg())
//!     .unwrap();
//! assert!(svg.contains("<polygon"));
//! ```
//!
//! ## Rust Lesson #7: Modules
//!
//! Each file below is one module. `pub use` lifts the types people actually
//! need up to the crate root, so callers write `pytree::Branch` rather than
//! `pytree::branch::Branch`.

pub mod branch;
pub mod cache;
pub mod color;
pub mod colormap;
pub mod error;
pub mod geometry;
pub mod render;
pub mod shapes;
pub mod tree;

// Re-export common types at crate root for convenience.
pub use branch::{Branch, BranchColors, trunk};
pub use cache::{BranchKey, GenerationCache};
pub use color::Color;
pub use colormap::ColorScale;
pub use error::{GeometryError, RenderError};
pub use geometry::{Point, Polygon};
pub use render::{Drawing, RenderAdapter, SvgAdapter, SvgCollection, SvgPolygon, SvgStyle, tree_collection};
pub use shapes::{Square, Triangle};
pub use tree::{BinaryGrowth, ColoredGrowth, Expansion, Growth, Tree};
