//! Core types for the Pokedex catalog
//!
//! This crate defines the foundational types used throughout the system:
//! - PokemonId: Positive integer key of a catalog record
//! - Pokemon: One catalog record (identity + stat block)
//! - SeedEntry: A record as it appears in the seed file (no id)
//! - FieldState: Tri-state optional field (absent / null / value)
//! - SearchQuery: Filter, sort and order criteria for catalog search
//! - PageRequest: Validated pagination window
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod field;
pub mod limits;
pub mod query;
pub mod types;

pub use error::{Error, Result};
pub use field::FieldState;
pub use limits::{PageQuery, PageRequest, DEFAULT_PAGE, DEFAULT_PAGE_ITEMS, MAX_PAGE_ITEMS};
pub use query::{EvolutionFilter, SearchQuery, SortKey, SortOrder};
pub use types::{Pokemon, PokemonId, SeedEntry};
