//! Search criteria
//!
//! [`SearchQuery`] holds the raw criteria exactly as they arrive in a query
//! string. Interpretation (tag splitting, evolution filter, sort key allow-list)
//! lives in the accessor methods so that unrecognized values can be ignored
//! the same way everywhere.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::types::Pokemon;

/// Filter and sort criteria for a catalog search
///
/// All criteria are optional and combine with AND semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Comma-separated tags; a record must carry all of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// `"true"` or `"false"`: presence of an evolution
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evo: Option<String>,
    /// Keep records with `total` strictly greater than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalgt: Option<i64>,
    /// Keep records with `total` strictly less than this
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totallt: Option<i64>,
    /// Sort key; see [`SortKey`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortby: Option<String>,
    /// `"asc"` or `"desc"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl SearchQuery {
    /// Tags of the `types` criterion, split on `,` without trimming
    pub fn type_tags(&self) -> Option<Vec<&str>> {
        self.types.as_deref().map(|t| t.split(',').collect())
    }

    /// Parsed `evo` criterion
    pub fn evolution_filter(&self) -> Option<EvolutionFilter> {
        self.evo.as_deref().map(EvolutionFilter::parse)
    }

    /// Sort key and direction, if `sortby` names an allowed key
    pub fn sort(&self) -> Option<(SortKey, SortOrder)> {
        let key = SortKey::parse(self.sortby.as_deref()?)?;
        Some((key, SortOrder::parse(self.order.as_deref())))
    }
}

/// The `evo` criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvolutionFilter {
    /// `evo=true`: `evolution_id` holds a value
    HasEvolution,
    /// `evo=false`: the `evolution_id` key is missing entirely
    NoEvolution,
    /// Any other value: matches nothing
    Unrecognized,
}

impl EvolutionFilter {
    /// Parse the raw criterion; the match is exact and case-sensitive
    pub fn parse(raw: &str) -> Self {
        match raw {
            "true" => EvolutionFilter::HasEvolution,
            "false" => EvolutionFilter::NoEvolution,
            _ => EvolutionFilter::Unrecognized,
        }
    }

    /// Whether `pokemon` passes this filter
    ///
    /// An explicit `null` passes neither `HasEvolution` nor `NoEvolution`.
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        match self {
            EvolutionFilter::HasEvolution => pokemon.evolution_id.has_value(),
            EvolutionFilter::NoEvolution => pokemon.evolution_id.is_absent(),
            EvolutionFilter::Unrecognized => false,
        }
    }
}

/// Allowed sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Record id
    Id,
    /// Name, exact byte order
    Name,
    /// Stat total
    Total,
}

impl SortKey {
    /// All allowed keys, by wire name
    pub const ALL: [(&'static str, SortKey); 3] = [
        ("id", SortKey::Id),
        ("name", SortKey::Name),
        ("total", SortKey::Total),
    ];

    /// Parse a wire name; unknown names yield `None`
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|(name, _)| *name == raw)
            .map(|(_, key)| *key)
    }

    /// Wire name of this key
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::Name => "name",
            SortKey::Total => "total",
        }
    }

    /// Ascending comparison of two records by this key
    pub fn compare(&self, a: &Pokemon, b: &Pokemon) -> Ordering {
        match self {
            SortKey::Id => a.id.cmp(&b.id),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Total => a.total.cmp(&b.total),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Ascending (default)
    #[default]
    Asc,
    /// Descending
    Desc,
}

impl SortOrder {
    /// `"desc"` is descending; anything else, including nothing, is ascending
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    /// Apply this direction to an ascending ordering
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}
