//! Catalog Comprehensive Test Suite
//!
//! Drives the public `pokedex` facade end to end: seed file on disk,
//! `Catalog::open`, and every command through the `Executor`.
//!
//! ## Test Tiers
//!
//! - **Tier 1**: Seed loading and id assignment
//! - **Tier 2**: Live store reads and writes
//! - **Tier 3**: Snapshot reads (types and search)
//! - **Tier 4**: Pagination
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test catalog_comprehensive
//! ```

mod test_utils;

mod tier1_seed_loading;
mod tier2_store_contract;
mod tier3_snapshot_reads;
