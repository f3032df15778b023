//! Core types for the Pokedex catalog
//!
//! This module defines the record types:
//! - PokemonId: Positive integer key
//! - Pokemon: A stored record
//! - SeedEntry: A record as loaded from the seed file, before an id is assigned

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::field::FieldState;

/// Unique key of a catalog record
///
/// Ids are positive integers. Zero and negative values are rejected at
/// construction, so a `PokemonId` held anywhere in the system is always >= 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PokemonId(u32);

impl PokemonId {
    /// Create an id, returning `None` for zero
    pub fn new(raw: u32) -> Option<Self> {
        (raw >= 1).then_some(Self(raw))
    }

    /// The raw integer value
    pub fn as_u32(self) -> u32 {
        self.0
    }

    /// Id of the entry at `index` in the seed list (ids start at 1)
    pub(crate) fn from_position(index: usize) -> Option<Self> {
        u32::try_from(index)
            .ok()
            .and_then(|i| i.checked_add(1))
            .map(Self)
    }
}

impl TryFrom<i64> for PokemonId {
    type Error = Error;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw < 1 {
            return Err(Error::invalid_input(format!(
                "id must be greater than or equal to 1, got {}",
                raw
            )));
        }
        u32::try_from(raw)
            .map(Self)
            .map_err(|_| Error::invalid_input(format!("id {} is out of range", raw)))
    }
}

impl From<PokemonId> for u32 {
    fn from(id: PokemonId) -> Self {
        id.0
    }
}

impl FromStr for PokemonId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::invalid_input(format!("id must be an integer, got '{}'", s)))?;
        Self::try_from(raw)
    }
}

impl fmt::Display for PokemonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog record
///
/// Field names are the wire names. `evolution_id` keeps the difference
/// between a missing key and an explicit `null`; the search `evo` filter
/// depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    /// Record key
    pub id: PokemonId,
    /// Display name
    pub name: String,
    /// Type tags, in the order received
    pub types: Vec<String>,
    /// Sum of the stat block
    pub total: i64,
    /// Hit points
    pub hp: i64,
    /// Attack
    pub attack: i64,
    /// Defense
    pub defense: i64,
    /// Special attack
    pub attack_special: i64,
    /// Special defense
    pub defense_special: i64,
    /// Speed
    pub speed: i64,
    /// Id of the evolved form; never checked against the store
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub evolution_id: FieldState<i64>,
}

impl Pokemon {
    /// True if every tag in `tags` appears in this record's types
    pub fn has_all_types<S: AsRef<str>>(&self, tags: &[S]) -> bool {
        tags.iter()
            .all(|tag| self.types.iter().any(|t| t == tag.as_ref()))
    }
}

/// A record as it appears in the seed file
///
/// Seed entries carry no id: the store assigns ids from the entry's position.
/// Any `id` key present in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedEntry {
    /// Display name
    pub name: String,
    /// Type tags, in file order
    pub types: Vec<String>,
    /// Sum of the stat block
    pub total: i64,
    /// Hit points
    pub hp: i64,
    /// Attack
    pub attack: i64,
    /// Defense
    pub defense: i64,
    /// Special attack
    pub attack_special: i64,
    /// Special defense
    pub defense_special: i64,
    /// Speed
    pub speed: i64,
    /// Id of the evolved form
    #[serde(default, skip_serializing_if = "FieldState::is_absent")]
    pub evolution_id: FieldState<i64>,
}

impl SeedEntry {
    /// Attach an id, producing a record
    pub fn into_pokemon(self, id: PokemonId) -> Pokemon {
        Pokemon {
            id,
            name: self.name,
            types: self.types,
            total: self.total,
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            attack_special: self.attack_special,
            defense_special: self.defense_special,
            speed: self.speed,
            evolution_id: self.evolution_id,
        }
    }

    /// Assign positional ids (1, 2, 3, ...) to a seed list
    ///
    /// # Errors
    /// Returns `InvalidInput` if the list is longer than the id space.
    pub fn number_all(entries: Vec<SeedEntry>) -> Result<Vec<Pokemon>, Error> {
        entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                PokemonId::from_position(index)
                    .map(|id| entry.into_pokemon(id))
                    .ok_or_else(|| Error::invalid_input("seed list exceeds the id space"))
            })
            .collect()
    }
}
