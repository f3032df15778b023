//! # pokedex-server
//!
//! HTTP front end for the Pokedex catalog.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pokedex_server::{run, ServerConfig};
//!
//! let config = ServerConfig::from_file(Path::new("pokedex.toml"))?;
//! run(config).await?;
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Command |
//! |--------|------|---------|
//! | GET | `/` | `Ping` |
//! | GET | `/total_pokemons` | `Count` |
//! | GET | `/pokemons` | `ListAll` |
//! | GET | `/pokemon/:id` | `Get` |
//! | POST | `/pokemon/` | `Create` |
//! | PUT | `/pokemon/:id` | `Replace` |
//! | DELETE | `/pokemon/:id` | `Delete` |
//! | GET | `/types` | `ListTypes` |
//! | GET | `/pokemons/search/` | `Search` |
//! | GET | `/pokemons2/` | `ListPage` |

pub mod config;
pub mod error;
mod handlers;
mod router;
mod state;

pub use config::{ServerConfig, CONFIG_FILE_NAME};
pub use error::{ApiError, ApiResult};
pub use router::create_router;
pub use state::AppState;

use pokedex_core::Result;

/// Load the catalog and serve HTTP until Ctrl-C
pub async fn run(config: ServerConfig) -> Result<()> {
    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(target: "pokedex::server", "Pokedex server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!(target: "pokedex::server", "Pokedex server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(target: "pokedex::server", error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
