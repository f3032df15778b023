//! Pokedex - In-memory Pokemon catalog
//!
//! The catalog is seeded once from a JSON file. Records can then be read,
//! created, replaced and deleted, while type listing and search keep reading
//! the load-time snapshot.
//!
//! # Quick Start
//!
//! ```ignore
//! use pokedex::{Catalog, Command, Executor, Output};
//!
//! let catalog = Catalog::open(Path::new("pokemon.json"))?;
//! let executor = Executor::new(Arc::new(catalog));
//!
//! let first = executor.execute(Command::Get { id: PokemonId::new(1).unwrap() })?;
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches a [`Command`]
//! to the [`Catalog`] and returns an [`Output`]. The HTTP server in
//! `pokedex-server` is a thin layer over the same commands.

// Re-export the public API from pokedex-executor
pub use pokedex_executor::*;
