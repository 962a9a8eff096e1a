//! pytree - draw Pythagoras trees
//!
//! Usage:
//!   pytree draw -n 10 -p 0.4 -o tree.svg --png tree.png
//!   pytree tree -n 4 --pretty
//!   pytree colormaps

mod cli;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, execute_command};

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    if let Err(e) = execute_command(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-d` count when set.
fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
