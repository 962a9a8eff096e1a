//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use resvg::usvg;
use tiny_skia::Pixmap;
use tracing::info;

use super::error::CliError;

/// Write `content` to `path`, or to stdout when there is no path.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            fs::write(path, content).map_err(|source| CliError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = content.len(), "wrote output");
            eprintln!("Wrote: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(content.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|source| CliError::Write {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}

/// Rasterize an SVG document to a PNG file.
///
/// `scale` multiplies the document's own pixel size. Transparent areas stay
/// transparent unless the document paints a background.
pub fn render_png(svg_content: &str, png_path: &Path, scale: f64) -> Result<(u32, u32), CliError> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(CliError::NonPositive { what: "PNG scale", value: scale });
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_content, &options)
        .map_err(|e| CliError::Png(e.to_string()))?;

    let size = tree.size();
    let width = ((size.width() as f64) * scale).round().max(1.0) as u32;
    let height = ((size.height() as f64) * scale).round().max(1.0) as u32;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| CliError::Png(format!("could not allocate {}x{} pixmap", width, height)))?;

    let transform = tiny_skia::Transform::from_scale(scale as f32, scale as f32);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap
        .save_png(png_path)
        .map_err(|e| CliError::Png(e.to_string()))?;
    info!(path = %png_path.display(), width, height, "wrote PNG");
    eprintln!("Wrote: {} ({}x{})", png_path.display(), width, height);
    Ok((width, height))
}
