//! List the built-in color scales.

use pytree::ColorScale;

use super::error::CliError;

/// Execute the colormaps command.
pub fn cmd_colormaps() -> Result<(), CliError> {
    println!("Available color scales (append _r to reverse):");
    for name in ColorScale::names() {
        let scale = ColorScale::by_name(name)?;
        println!(
            "  {:<10} {} -> {} -> {}",
            name,
            scale.sample(0.0),
            scale.sample(0.5),
            scale.sample(1.0)
        );
    }
    Ok(())
}
