//! Shared fixtures for the comprehensive suite.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use pokedex::{Catalog, Command, Executor, Output, Pokemon, PokemonId};
use serde_json::{json, Value};
use tempfile::NamedTempFile;

/// The first generation's starters and their evolutions, plus a few extras.
///
/// Ids are assigned by position, so Bulbasaur is 1 and Mewtwo is 12.
pub fn kanto_seed() -> Value {
    json!([
        entry("Bulbasaur", &["Grass", "Poison"], 318, json!(2)),
        entry("Ivysaur", &["Grass", "Poison"], 405, json!(3)),
        entry("Venusaur", &["Grass", "Poison"], 525, Value::Null),
        entry("Charmander", &["Fire"], 309, json!(5)),
        entry("Charmeleon", &["Fire"], 405, json!(6)),
        entry("Charizard", &["Fire", "Flying"], 534, Value::Null),
        entry("Squirtle", &["Water"], 314, json!(8)),
        entry("Wartortle", &["Water"], 405, json!(9)),
        entry("Blastoise", &["Water"], 530, Value::Null),
        entry("Pidgey", &["Normal", "Flying"], 251, json!(11)),
        entry("Pidgeotto", &["Normal", "Flying"], 349, json!(18)),
        without_evolution("Mewtwo", &["Psychic"], 680),
    ])
}

fn entry(name: &str, types: &[&str], total: i64, evolution_id: Value) -> Value {
    let mut value = without_evolution(name, types, total);
    value["evolution_id"] = evolution_id;
    value
}

fn without_evolution(name: &str, types: &[&str], total: i64) -> Value {
    json!({
        "name": name,
        "types": types,
        "total": total,
        "hp": 45,
        "attack": 49,
        "defense": 49,
        "attack_special": 65,
        "defense_special": 65,
        "speed": 45
    })
}

/// Write `seed` to a temp file that lives as long as the returned handle
pub fn write_seed(seed: &Value) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(seed.to_string().as_bytes()).unwrap();
    file
}

/// Executor over the Kanto seed, loaded from disk
pub fn kanto_executor() -> Executor {
    let file = write_seed(&kanto_seed());
    let catalog = Catalog::open(file.path()).unwrap();
    Executor::new(Arc::new(catalog))
}

pub fn pid(raw: u32) -> PokemonId {
    PokemonId::new(raw).unwrap()
}

/// Execute a command expected to return a record list
pub fn pokemons(executor: &Executor, cmd: Command) -> Vec<Pokemon> {
    executor.execute(cmd).unwrap().into_pokemons().unwrap()
}

/// Execute a command expected to return a single record
pub fn pokemon(executor: &Executor, cmd: Command) -> Pokemon {
    executor.execute(cmd).unwrap().into_pokemon().unwrap()
}

pub fn names(records: &[Pokemon]) -> Vec<&str> {
    records.iter().map(|p| p.name.as_str()).collect()
}

pub fn total(executor: &Executor) -> u64 {
    match executor.execute(Command::Count).unwrap() {
        Output::Total { total } => total,
        other => panic!("unexpected output {:?}", other),
    }
}
