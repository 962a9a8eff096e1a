//! Draw command implementation.

use std::time::Instant;

use pytree::{SvgAdapter, SvgCollection};
use tracing::debug;

use super::args::DrawArgs;
use super::common::{render_png, write_output};
use super::config::TreeConfig;
use super::error::CliError;

/// Execute the draw command.
pub fn cmd_draw(args: &DrawArgs) -> Result<(), CliError> {
    let mut config = TreeConfig::resolve(&args.tree)?;
    if let Some(width) = args.stroke_width {
        config.canvas.stroke_width = width;
    }
    if let Some(background) = &args.background {
        config.canvas.background = Some(background.clone());
    }

    let root = config.trunk()?;
    let style = config.svg_style()?;
    debug!(?config, "drawing tree");

    let start = Instant::now();
    let collection = if args.parts {
        let tree = root.build_tree(config.depth);
        SvgCollection::from_polygons(tree.polygon_parts(true, true), style)
    } else {
        root.draw_tree(config.depth, &config.colormap, &SvgAdapter::new(style))?
            .collection
    };
    let svg = collection.to_svg()?;

    eprintln!(
        "Drew {} shapes over {} levels in {:.1}ms",
        collection.len(),
        config.depth,
        start.elapsed().as_secs_f64() * 1000.0
    );

    write_output(args.output.as_deref(), &svg)?;

    if let Some(png_path) = &args.png {
        render_png(&svg, png_path, args.png_scale)?;
    }
    Ok(())
}
