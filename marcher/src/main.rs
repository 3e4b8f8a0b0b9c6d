//! # Marcher Runtime
//!
//! Entry point for the `marcher` binary. Parses the command line, installs
//! the tracing subscriber and hands over to [`app::run`].

mod app;
mod cli;
mod watcher;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_tracing();
    app::run(cli::Cli::parse())
}

/// Logs to stderr, filtered by `RUST_LOG` and `info` when it is unset.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
