//! Load-time snapshot
//!
//! The snapshot is the seed list with positional ids, frozen at startup.
//! Type enumeration and search read from it rather than from the live store.
//!
//! ## Search narrowing
//!
//! Criteria are applied as successive stages in a fixed order: `types`,
//! `evo`, `totalgt`, `totallt`, then sorting. The `types` stage scans the whole
//! snapshot. Each later stage narrows the previous stage's output, except that
//! an empty intermediate result counts as "nothing filtered yet" and the stage
//! rescans the whole snapshot instead. Callers relying on strict AND semantics
//! across an empty intermediate stage will see extra records.

use std::collections::BTreeSet;

use pokedex_core::{Error, Pokemon, Result, SearchQuery};

/// The records as loaded at startup
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    records: Vec<Pokemon>,
}

impl Snapshot {
    /// Freeze a list of records
    pub fn new(records: Vec<Pokemon>) -> Self {
        Self { records }
    }

    /// Number of records loaded
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every distinct type tag, sorted by exact byte order
    pub fn list_types(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|p| p.types.iter())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Records matching every criterion of `query`
    ///
    /// # Errors
    ///
    /// Returns `NoMatch` when the final list is empty. This includes a query
    /// with no criteria at all.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<Pokemon>> {
        let mut working: Vec<&Pokemon> = Vec::new();

        if let Some(tags) = query.type_tags() {
            working = self
                .records
                .iter()
                .filter(|p| p.has_all_types(tags.as_slice()))
                .collect();
        }

        if let Some(evo) = query.evolution_filter() {
            working = self.narrow(&working, |p| evo.matches(p));
        }

        if let Some(gt) = query.totalgt {
            working = self.narrow(&working, |p| p.total > gt);
        }

        if let Some(lt) = query.totallt {
            working = self.narrow(&working, |p| p.total < lt);
        }

        if let Some((key, order)) = query.sort() {
            if working.is_empty() {
                working = self.records.iter().collect();
            }
            // Stable in both directions: ties keep their prior order.
            working.sort_by(|a, b| order.apply(key.compare(a, b)));
        }

        if working.is_empty() {
            return Err(Error::NoMatch);
        }
        Ok(working.into_iter().cloned().collect())
    }

    /// One filter stage: narrow `working`, or the whole snapshot if it is empty
    fn narrow<'a>(
        &'a self,
        working: &[&'a Pokemon],
        keep: impl Fn(&Pokemon) -> bool,
    ) -> Vec<&'a Pokemon> {
        if working.is_empty() {
            self.records.iter().filter(|p| keep(p)).collect()
        } else {
            working.iter().copied().filter(|p| keep(p)).collect()
        }
    }
}
