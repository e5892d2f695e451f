//! Socnet CLI binary.

use anyhow::Result;
use socnet::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Main entry point for the socnet CLI.
///
/// Runs synchronously on the main thread; every query completes before the
/// next one is read.
fn main() -> Result<()> {
    // Initialize tracing subscriber
    // Can be controlled via RUST_LOG environment variable
    // Example: RUST_LOG=socnet=debug cargo run -- stats
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("socnet=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("Starting socnet CLI");

    let cli = Cli::parse_args();
    cli.execute()?;

    tracing::debug!("Socnet CLI completed successfully");
    Ok(())
}
