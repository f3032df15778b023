//! # Pokedex Executor
//!
//! The public API for the Pokedex catalog.
//!
//! This crate provides:
//! - [`Executor`] - The dispatcher over a [`Catalog`]
//! - [`Command`]/[`Output`] - The command interface used by the HTTP layer
//!
//! ## Quick Start
//!
//! ```text
//! use pokedex_executor::{Catalog, Command, Executor, Output};
//!
//! let catalog = Catalog::open(Path::new("pokemon.json"))?;
//! let executor = Executor::new(Arc::new(catalog));
//!
//! let output = executor.execute(Command::Count)?;
//! ```

#![warn(missing_docs)]

mod command;
mod executor;
mod output;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use executor::{Executor, DEFAULT_GREETING};
pub use output::Output;

// Re-export the catalog and core types so users don't need to import them
pub use pokedex_catalog::Catalog;
pub use pokedex_core::{
    Error, EvolutionFilter, FieldState, PageQuery, PageRequest, Pokemon, PokemonId, SearchQuery,
    SeedEntry, SortKey, SortOrder, MAX_PAGE_ITEMS,
};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
