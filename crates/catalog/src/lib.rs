//! In-memory Pokemon catalog
//!
//! The catalog keeps two data sources side by side:
//!
//! - **Snapshot** ([`Snapshot`]): the records exactly as loaded at startup.
//!   Immutable. Type enumeration and search read from it.
//! - **Live store** ([`CatalogStore`]): id → record mapping seeded from the same
//!   list and mutated by create/replace/delete. Every other read uses it.
//!
//! Writes never touch the snapshot, so `list_types` and `search` do not see
//! records created, replaced or deleted at runtime.
//!
//! [`Catalog`] wraps both behind a single lock and is the handle shared with
//! request handlers.

#![warn(missing_docs)]

pub mod catalog;
pub mod seed;
pub mod snapshot;
pub mod store;

pub use catalog::Catalog;
pub use seed::{load_seed, parse_seed};
pub use snapshot::Snapshot;
pub use store::CatalogStore;
