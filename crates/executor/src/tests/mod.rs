//! Test modules for the executor crate.


use std::sync::Arc;

use crate::{Catalog, Executor, FieldState, Pokemon, PokemonId, SeedEntry};

/// Build an executor over a small three-entry catalog.
pub(crate) fn create_test_executor() -> Executor {
    let seed = vec![
        seed_entry("Bulbasaur", &["Grass", "Poison"], 318, FieldState::Value(2)),
        seed_entry("Ivysaur", &["Grass", "Poison"], 405, FieldState::Value(3)),
        seed_entry("Venusaur", &["Grass", "Poison"], 525, FieldState::Absent),
    ];
    Executor::new(Arc::new(Catalog::from_seed(seed).unwrap()))
}

pub(crate) fn seed_entry(
    name: &str,
    types: &[&str],
    total: i64,
    evolution_id: FieldState<i64>,
) -> SeedEntry {
    SeedEntry {
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        total,
        hp: 60,
        attack: 60,
        defense: 60,
        attack_special: 60,
        defense_special: 60,
        speed: 60,
        evolution_id,
    }
}

pub(crate) fn pokemon(id: u32, name: &str) -> Pokemon {
    seed_entry(name, &["Psychic"], 600, FieldState::Null).into_pokemon(pid(id))
}

pub(crate) fn pid(raw: u32) -> PokemonId {
    PokemonId::new(raw).unwrap()
}
