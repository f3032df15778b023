//! Live store: id → record mapping
//!
//! ## Iteration Order
//!
//! Listing and pagination follow insertion order: seeded ids in load order,
//! then created ids appended at the end. Replace keeps an entry in place and
//! delete keeps the relative order of the remaining entries.
//!
//! ## Thread Safety
//!
//! `CatalogStore` is a plain value with no interior locking. Share it through
//! [`Catalog`](crate::Catalog), which serializes writers.

use indexmap::IndexMap;
use pokedex_core::{Error, PageRequest, Pokemon, PokemonId, Result};

/// Mutable mapping from id to record
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    records: IndexMap<PokemonId, Pokemon>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store keyed by each record's own id
    ///
    /// If two records share an id, the later one wins and keeps the first
    /// one's position.
    pub fn from_records(records: impl IntoIterator<Item = Pokemon>) -> Self {
        Self {
            records: records.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Number of records held
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// True if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if a record is stored under `id`
    pub fn contains(&self, id: PokemonId) -> bool {
        self.records.contains_key(&id)
    }

    /// Stored ids, in iteration order
    pub fn ids(&self) -> impl Iterator<Item = PokemonId> + '_ {
        self.records.keys().copied()
    }

    /// Every record, in iteration order
    pub fn list_all(&self) -> Vec<Pokemon> {
        self.records.values().cloned().collect()
    }

    /// Record stored under `id`
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn get(&self, id: PokemonId) -> Result<&Pokemon> {
        self.records.get(&id).ok_or(Error::NotFound { id })
    }

    /// Store `record` under its own id
    ///
    /// # Errors
    /// Returns `Conflict` if the id is already stored; the store is unchanged.
    pub fn create(&mut self, record: Pokemon) -> Result<Pokemon> {
        let id = record.id;
        if self.records.contains_key(&id) {
            return Err(Error::Conflict { id });
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    /// Overwrite the record stored under `id`
    ///
    /// `record` is stored verbatim: its own `id` field is not reconciled with
    /// `id`, so the stored value may carry a different id than its key.
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn replace(&mut self, id: PokemonId, record: Pokemon) -> Result<Pokemon> {
        let slot = self.records.get_mut(&id).ok_or(Error::NotFound { id })?;
        *slot = record.clone();
        Ok(record)
    }

    /// Remove and return the record stored under `id`
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn delete(&mut self, id: PokemonId) -> Result<Pokemon> {
        self.records.shift_remove(&id).ok_or(Error::NotFound { id })
    }

    /// One page of records, in iteration order
    ///
    /// Never fails: a page past the end yields the last page and an empty
    /// store yields an empty list.
    pub fn list_page(&self, page: &PageRequest) -> Vec<Pokemon> {
        let range = page.bounds(self.records.len());
        self.records.values().skip(range.start).take(range.len()).cloned().collect()
    }
}
