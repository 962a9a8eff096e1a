//! CLI command implementations.
//!
//! This module contains the implementations for the CLI subcommands:
//! - `draw` - Render a tree to SVG/PNG
//! - `tree` - Dump the branches of a tree as JSON
//! - `colormaps` - List available color scales

pub mod args;
pub mod colormaps;
pub mod common;
pub mod config;
pub mod draw;
pub mod dump;
pub mod error;

pub use args::{Cli, Commands};
pub use colormaps::cmd_colormaps;
pub use draw::cmd_draw;
pub use dump::cmd_tree;
pub use error::CliError;

/// Dispatch a parsed command line.
pub fn execute_command(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Draw(args) => cmd_draw(args),
        Commands::Tree(args) => cmd_tree(args),
        Commands::Colormaps => cmd_colormaps(),
    }
}
