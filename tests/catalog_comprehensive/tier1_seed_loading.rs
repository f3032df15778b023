//! Tier 1: Seed loading and id assignment

use crate::test_utils::*;
use pokedex::{Catalog, Command, Error, FieldState};
use serde_json::json;

#[test]
fn ids_follow_file_position() {
    let executor = kanto_executor();
    let all = pokemons(&executor, Command::ListAll);
    assert_eq!(all.len(), 12);
    for (index, record) in all.iter().enumerate() {
        assert_eq!(record.id.as_u32() as usize, index + 1);
    }
    assert_eq!(pokemon(&executor, Command::Get { id: pid(12) }).name, "Mewtwo");
}

#[test]
fn seed_ids_are_ignored() {
    let mut seed = kanto_seed();
    seed[0]["id"] = json!(500);
    let file = write_seed(&seed);
    let catalog = Catalog::open(file.path()).unwrap();
    assert_eq!(catalog.get(pid(1)).unwrap().name, "Bulbasaur");
    assert!(catalog.get(pid(500)).is_err());
}

#[test]
fn evolution_states_survive_loading() {
    let executor = kanto_executor();
    let bulbasaur = pokemon(&executor, Command::Get { id: pid(1) });
    let venusaur = pokemon(&executor, Command::Get { id: pid(3) });
    let mewtwo = pokemon(&executor, Command::Get { id: pid(12) });
    assert_eq!(bulbasaur.evolution_id, FieldState::Value(2));
    assert_eq!(venusaur.evolution_id, FieldState::Null);
    assert_eq!(mewtwo.evolution_id, FieldState::Absent);

    let body = serde_json::to_value(&mewtwo).unwrap();
    assert!(body.get("evolution_id").is_none());
    let body = serde_json::to_value(&venusaur).unwrap();
    assert!(body["evolution_id"].is_null());
}

#[test]
fn empty_seed_gives_empty_catalog() {
    let file = write_seed(&json!([]));
    let catalog = Catalog::open(file.path()).unwrap();
    assert_eq!(catalog.count(), 0);
    assert!(catalog.list_types().is_empty());
}

#[test]
fn missing_seed_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Catalog::open(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io { .. }));
}

#[test]
fn malformed_seed_is_serialization_error() {
    let file = write_seed(&json!({"name": "not a list"}));
    let err = Catalog::open(file.path()).unwrap_err();
    assert!(matches!(err, Error::Serialization { .. }));
}
