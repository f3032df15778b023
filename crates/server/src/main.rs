//! Pokedex server binary.
//!
//! Loads `pokedex.toml` (or the file given with `--config`), applies flag
//! overrides, loads the seed file and serves the catalog over HTTP.
//! Log filtering follows `RUST_LOG` (default: `info`).

mod cli;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let matches = cli::build_cli().get_matches();
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let config = cli::resolve_config(&matches, &cwd)?;

    tracing::info!(
        target: "pokedex::server",
        data_file = ?config.data_file,
        addr = %config.addr(),
        "Starting pokedex server"
    );

    pokedex_server::run(config).await?;
    Ok(())
}
