//! The Executor - single entry point to the catalog.
//!
//! The Executor is a stateless dispatcher that routes commands to catalog
//! operations and wraps results in outputs.

use std::sync::Arc;

use pokedex_catalog::Catalog;
use pokedex_core::PageRequest;

use crate::{Command, Output, Result};

/// Greeting returned by [`Command::Ping`] unless configured otherwise.
pub const DEFAULT_GREETING: &str = "Hello Les gars !";

/// The command executor - single entry point to the catalog.
///
/// The Executor is **stateless**: it holds a reference to the catalog but
/// maintains no state of its own.
///
/// # Thread Safety
///
/// Executor is `Send + Sync` and can be shared across tasks.
///
/// # Example
///
/// ```ignore
/// use pokedex_executor::{Command, Executor};
///
/// let executor = Executor::new(Arc::new(catalog));
///
/// // Single command execution
/// let total = executor.execute(Command::Count)?;
///
/// // Batch execution
/// let results = executor.execute_many(vec![Command::Count, Command::ListTypes]);
/// ```
#[derive(Debug, Clone)]
pub struct Executor {
    catalog: Arc<Catalog>,
    greeting: String,
}

impl Executor {
    /// Create a new executor over a catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_greeting(catalog, DEFAULT_GREETING)
    }

    /// Create an executor that answers `Ping` with `greeting`.
    pub fn with_greeting(catalog: Arc<Catalog>, greeting: impl Into<String>) -> Self {
        Self {
            catalog,
            greeting: greeting.into(),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Ping => Ok(Output::Message {
                message: self.greeting.clone(),
            }),

            // Live reads
            Command::Count => Ok(Output::Total {
                total: self.catalog.count() as u64,
            }),
            Command::ListAll => Ok(Output::Pokemons(self.catalog.list_all())),
            Command::Get { id } => self.catalog.get(id).map(Output::Pokemon),
            Command::ListPage { page, items } => {
                let request = PageRequest::new(page, items)?;
                Ok(Output::Pokemons(self.catalog.list_page(&request)))
            }

            // Writes
            Command::Create { record } => self.catalog.create(record).map(Output::Pokemon),
            Command::Replace { id, record } => {
                self.catalog.replace(id, record).map(Output::Pokemon)
            }
            Command::Delete { id } => self.catalog.delete(id).map(Output::Pokemon),

            // Snapshot reads
            Command::ListTypes => Ok(Output::Types(self.catalog.list_types())),
            Command::Search { query } => self.catalog.search(&query).map(Output::Pokemons),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns one result per command, in order. A failing command does not
    /// stop the batch.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let results = executor.execute_many(vec![cmd1, cmd2, cmd3]);
    /// // results[0] corresponds to cmd1, etc.
    /// ```
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The catalog this executor dispatches to.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The `Ping` greeting.
    pub fn greeting(&self) -> &str {
        &self.greeting
    }
}
