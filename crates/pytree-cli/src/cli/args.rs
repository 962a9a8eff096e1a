//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

/// Draw Pythagoras trees as SVG or PNG.
#[derive(Parser, Debug)]
#[command(name = "pytree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a tree to SVG (and optionally PNG)
    Draw(DrawArgs),

    /// Dump every branch of a tree as JSON
    Tree(DumpArgs),

    /// List available color scales
    Colormaps,
}

/// Tree parameters shared by every command that grows a tree.
///
/// Anything left out falls back to the config file, then to built-in
/// defaults.
#[derive(Args, Debug, Clone, Default)]
pub struct TreeArgs {
    /// YAML file with tree and canvas settings
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Number of levels, trunk included
    #[arg(short = 'n', long)]
    pub depth: Option<usize>,

    /// Side of the trunk square
    #[arg(short, long, allow_hyphen_values = true)]
    pub side: Option<f64>,

    /// Where the triangle's right angle projects onto its hypotenuse, in [0, 1]
    #[arg(short = 'p', long, allow_hyphen_values = true)]
    pub ratio: Option<f64>,

    /// Fill color for branches drawn with their own colors
    #[arg(long)]
    pub face: Option<String>,

    /// Line color for branches drawn with their own colors
    #[arg(long)]
    pub line: Option<String>,

    /// Color scale used to color levels (see `pytree colormaps`)
    #[arg(short = 'm', long)]
    pub colormap: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Output SVG file (default: stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Also rasterize to this PNG file
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub png: Option<PathBuf>,

    /// PNG scale factor relative to the SVG size
    #[arg(long, default_value_t = 1.0)]
    pub png_scale: f64,

    /// Draw squares and triangles separately in their own colors instead of
    /// one outline per branch colored by level
    #[arg(long)]
    pub parts: bool,

    /// Stroke width as a fraction of the drawing size
    #[arg(long, allow_hyphen_values = true)]
    pub stroke_width: Option<f64>,

    /// Page color (default: transparent)
    #[arg(long)]
    pub background: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct DumpArgs {
    #[command(flatten)]
    pub tree: TreeArgs,

    /// Output JSON file (default: stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Indent the JSON
    #[arg(long)]
    pub pretty: bool,
}
