//! Shared state handed to every request handler

use std::sync::Arc;

use pokedex_catalog::Catalog;
use pokedex_core::Result;
use pokedex_executor::Executor;

use crate::ServerConfig;

/// Shared application state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    executor: Arc<Executor>,
}

impl AppState {
    /// Wrap an existing executor
    pub fn new(executor: Executor) -> Self {
        Self {
            executor: Arc::new(executor),
        }
    }

    /// Load the seed file named by `config` and build the state around it
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        let catalog = Arc::new(Catalog::open(&config.data_file)?);
        Ok(Self::new(Executor::with_greeting(
            catalog,
            config.greeting.clone(),
        )))
    }

    /// The executor every handler dispatches through
    pub fn executor(&self) -> &Executor {
        &self.executor
    }
}
