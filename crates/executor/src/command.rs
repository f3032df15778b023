//! Command enum defining all catalog operations.
//!
//! Commands are the "instruction set" of the catalog. Every operation that can
//! be performed is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON
//! - **Pure data**: No closures or executable code

use pokedex_core::{Pokemon, PokemonId, SearchQuery};
use serde::{Deserialize, Serialize};

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Commands | Reads from |
/// |----------|----------|------------|
/// | Service | `Ping` | - |
/// | Live reads | `Count`, `ListAll`, `Get`, `ListPage` | live store |
/// | Writes | `Create`, `Replace`, `Delete` | live store |
/// | Snapshot reads | `ListTypes`, `Search` | load-time snapshot |
///
/// # Example
///
/// ```ignore
/// use pokedex_executor::{Command, PokemonId};
///
/// let cmd = Command::Get {
///     id: PokemonId::new(25).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Service ====================
    /// Liveness check.
    /// Returns: `Output::Message`
    Ping,

    // ==================== Live Reads ====================
    /// Number of records currently held.
    /// Returns: `Output::Total`
    Count,

    /// Every record, in live iteration order.
    /// Returns: `Output::Pokemons`
    ListAll,

    /// One record by id.
    /// Returns: `Output::Pokemon`
    Get {
        /// Record key
        id: PokemonId,
    },

    /// One page of the live store.
    /// Returns: `Output::Pokemons`
    ListPage {
        /// 1-based page number; clamped to the last page
        page: u32,
        /// Page size; capped at 20
        items: u32,
    },

    // ==================== Writes ====================
    /// Store a new record under its own id.
    /// Returns: `Output::Pokemon`
    Create {
        /// Record to store
        record: Pokemon,
    },

    /// Overwrite the record at `id` with `record`, verbatim.
    /// Returns: `Output::Pokemon`
    Replace {
        /// Key to overwrite
        id: PokemonId,
        /// New value; its own id is not reconciled with `id`
        record: Pokemon,
    },

    /// Remove a record.
    /// Returns: `Output::Pokemon` (the removed record)
    Delete {
        /// Key to remove
        id: PokemonId,
    },

    // ==================== Snapshot Reads ====================
    /// Distinct type tags of the load-time snapshot, sorted.
    /// Returns: `Output::Types`
    ListTypes,

    /// Filtered and sorted search over the load-time snapshot.
    /// Returns: `Output::Pokemons`
    Search {
        /// Criteria
        #[serde(default)]
        query: SearchQuery,
    },
}

impl Command {
    /// True for commands that mutate the live store
    pub fn is_write(&self) -> bool {
        matches!(
            self,
            Command::Create { .. } | Command::Replace { .. } | Command::Delete { .. }
        )
    }

    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Ping => "Ping",
            Command::Count => "Count",
            Command::ListAll => "ListAll",
            Command::Get { .. } => "Get",
            Command::ListPage { .. } => "ListPage",
            Command::Create { .. } => "Create",
            Command::Replace { .. } => "Replace",
            Command::Delete { .. } => "Delete",
            Command::ListTypes => "ListTypes",
            Command::Search { .. } => "Search",
        }
    }
}
