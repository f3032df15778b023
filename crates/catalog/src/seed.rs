//! Seed loading
//!
//! The seed is a JSON array of [`SeedEntry`] objects. Entries carry no id;
//! ids are assigned from array position when the catalog is built.

use std::path::Path;

use pokedex_core::{Error, Result, SeedEntry};

/// Read and parse a seed file.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Serialization` if it is not
/// a JSON array of seed entries.
pub fn load_seed(path: &Path) -> Result<Vec<SeedEntry>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        reason: format!("failed to read seed file '{}': {}", path.display(), e),
    })?;
    parse_seed(&content).map_err(|e| match e {
        Error::Serialization { reason } => Error::Serialization {
            reason: format!("failed to parse seed file '{}': {}", path.display(), reason),
        },
        other => other,
    })
}

/// Parse seed entries from a JSON string.
pub fn parse_seed(json: &str) -> Result<Vec<SeedEntry>> {
    Ok(serde_json::from_str(json)?)
}
