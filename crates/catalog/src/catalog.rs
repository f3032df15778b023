//! Catalog: thread-safe handle over the snapshot and the live store
//!
//! ## Design
//!
//! The live store sits behind a single `parking_lot::RwLock`. Reads share the
//! lock; create, replace and delete take it exclusively, so writers are
//! serialized. The snapshot is immutable and shared through an `Arc`, so
//! type enumeration and search never take the lock.
//!
//! ## Thread Safety
//!
//! `Catalog` is `Send + Sync`. Wrap it in an `Arc` to share it across tasks.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use pokedex_core::{PageRequest, Pokemon, PokemonId, Result, SearchQuery, SeedEntry};
use tracing::{debug, info};

use crate::seed::load_seed;
use crate::snapshot::Snapshot;
use crate::store::CatalogStore;

/// The catalog shared by every request handler
///
/// # Example
///
/// ```ignore
/// use pokedex_catalog::Catalog;
///
/// let catalog = Arc::new(Catalog::open(Path::new("pokemon.json"))?);
/// let total = catalog.count();
/// let fire = catalog.search(&SearchQuery {
///     types: Some("Fire".into()),
///     ..Default::default()
/// })?;
/// ```
#[derive(Debug)]
pub struct Catalog {
    live: RwLock<CatalogStore>,
    snapshot: Arc<Snapshot>,
}

impl Catalog {
    /// Load a seed file and build the catalog from it
    ///
    /// # Errors
    /// Returns `Io` or `Serialization` if the seed file cannot be loaded.
    pub fn open(path: &Path) -> Result<Self> {
        let entries = load_seed(path)?;
        let catalog = Self::from_seed(entries)?;
        info!(
            target: "pokedex::catalog",
            path = ?path,
            records = catalog.snapshot.len(),
            "Loaded seed file"
        );
        Ok(catalog)
    }

    /// Build the catalog from seed entries, assigning ids 1, 2, 3, ...
    pub fn from_seed(entries: Vec<SeedEntry>) -> Result<Self> {
        Ok(Self::from_records(SeedEntry::number_all(entries)?))
    }

    /// Build the catalog from records that already carry ids
    ///
    /// The same list seeds both the snapshot and the live store.
    pub fn from_records(records: Vec<Pokemon>) -> Self {
        let live = CatalogStore::from_records(records.iter().cloned());
        Self {
            live: RwLock::new(live),
            snapshot: Arc::new(Snapshot::new(records)),
        }
    }

    // ========== Live Store Reads ==========

    /// Number of records currently held
    pub fn count(&self) -> usize {
        self.live.read().count()
    }

    /// Every record, in live iteration order
    pub fn list_all(&self) -> Vec<Pokemon> {
        self.live.read().list_all()
    }

    /// Record stored under `id`
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn get(&self, id: PokemonId) -> Result<Pokemon> {
        self.live.read().get(id).cloned()
    }

    /// One page of the live store
    pub fn list_page(&self, page: &PageRequest) -> Vec<Pokemon> {
        self.live.read().list_page(page)
    }

    // ========== Live Store Writes ==========

    /// Store a new record under its own id
    ///
    /// # Errors
    /// Returns `Conflict` if the id is already stored.
    pub fn create(&self, record: Pokemon) -> Result<Pokemon> {
        let id = record.id;
        let result = self.live.write().create(record);
        match &result {
            Ok(_) => debug!(target: "pokedex::catalog", id = %id, "Created pokemon"),
            Err(e) => debug!(target: "pokedex::catalog", id = %id, error = %e, "Create rejected"),
        }
        result
    }

    /// Overwrite the record stored under `id` with `record`, verbatim
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn replace(&self, id: PokemonId, record: Pokemon) -> Result<Pokemon> {
        let body_id = record.id;
        let result = self.live.write().replace(id, record);
        match &result {
            Ok(_) => debug!(
                target: "pokedex::catalog",
                id = %id,
                body_id = %body_id,
                "Replaced pokemon"
            ),
            Err(e) => debug!(target: "pokedex::catalog", id = %id, error = %e, "Replace rejected"),
        }
        result
    }

    /// Remove and return the record stored under `id`
    ///
    /// # Errors
    /// Returns `NotFound` if no record is stored under `id`.
    pub fn delete(&self, id: PokemonId) -> Result<Pokemon> {
        let result = self.live.write().delete(id);
        match &result {
            Ok(_) => debug!(target: "pokedex::catalog", id = %id, "Deleted pokemon"),
            Err(e) => debug!(target: "pokedex::catalog", id = %id, error = %e, "Delete rejected"),
        }
        result
    }

    // ========== Snapshot Reads ==========

    /// Distinct type tags of the load-time snapshot, sorted
    pub fn list_types(&self) -> Vec<String> {
        self.snapshot.list_types()
    }

    /// Search the load-time snapshot
    ///
    /// # Errors
    /// Returns `NoMatch` if nothing matches.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Pokemon>> {
        self.snapshot.search(query)
    }
}
