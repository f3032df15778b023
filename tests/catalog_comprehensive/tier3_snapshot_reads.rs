//! Tier 3: Snapshot reads (types and search)

use crate::test_utils::*;
use pokedex::{Command, Error, Output, SearchQuery};

fn search(executor: &pokedex::Executor, query: SearchQuery) -> Result<Vec<String>, Error> {
    executor.execute(Command::Search { query }).map(|output| {
        output
            .into_pokemons()
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect()
    })
}

#[test]
fn types_are_sorted_and_distinct() {
    let executor = kanto_executor();
    let expected: Vec<String> = ["Fire", "Flying", "Grass", "Normal", "Poison", "Psychic", "Water"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(executor.execute(Command::ListTypes).unwrap(), Output::Types(expected));
}

#[test]
fn types_ignore_live_writes() {
    let executor = kanto_executor();
    executor.execute(Command::Delete { id: pid(12) }).unwrap();
    let types = match executor.execute(Command::ListTypes).unwrap() {
        Output::Types(types) => types,
        other => panic!("unexpected output {:?}", other),
    };
    assert!(types.contains(&"Psychic".to_string()));
}

#[test]
fn search_by_types_requires_all_tags() {
    let executor = kanto_executor();
    let query = SearchQuery {
        types: Some("Normal,Flying".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(search(&executor, query).unwrap(), vec!["Pidgey", "Pidgeotto"]);
}

#[test]
fn search_by_evolution() {
    let executor = kanto_executor();
    let no_evolution = SearchQuery {
        evo: Some("false".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(search(&executor, no_evolution).unwrap(), vec!["Mewtwo"]);

    let has_evolution = SearchQuery {
        types: Some("Fire".to_string()),
        evo: Some("true".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(
        search(&executor, has_evolution).unwrap(),
        vec!["Charmander", "Charmeleon"]
    );
}

#[test]
fn search_total_bounds_are_strict() {
    let executor = kanto_executor();
    let query = SearchQuery {
        totalgt: Some(405),
        totallt: Some(534),
        ..SearchQuery::default()
    };
    assert_eq!(
        search(&executor, query).unwrap(),
        vec!["Venusaur", "Blastoise"]
    );
}

#[test]
fn search_sort_desc_is_stable() {
    let executor = kanto_executor();
    let query = SearchQuery {
        totalgt: Some(400),
        totallt: Some(410),
        sortby: Some("total".to_string()),
        order: Some("desc".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(
        search(&executor, query).unwrap(),
        vec!["Ivysaur", "Charmeleon", "Wartortle"]
    );
}

#[test]
fn search_sort_by_name() {
    let executor = kanto_executor();
    let query = SearchQuery {
        types: Some("Water".to_string()),
        sortby: Some("name".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(
        search(&executor, query).unwrap(),
        vec!["Blastoise", "Squirtle", "Wartortle"]
    );
}

#[test]
fn search_empty_stage_falls_back_to_snapshot() {
    let executor = kanto_executor();
    let query = SearchQuery {
        types: Some("Dragon".to_string()),
        totalgt: Some(600),
        ..SearchQuery::default()
    };
    assert_eq!(search(&executor, query).unwrap(), vec!["Mewtwo"]);
}

#[test]
fn search_without_criteria_or_results_is_no_match() {
    let executor = kanto_executor();
    assert_eq!(search(&executor, SearchQuery::default()), Err(Error::NoMatch));

    let query = SearchQuery {
        totalgt: Some(1000),
        ..SearchQuery::default()
    };
    assert_eq!(search(&executor, query), Err(Error::NoMatch));
}

#[test]
fn search_ignores_live_writes() {
    let executor = kanto_executor();
    executor.execute(Command::Delete { id: pid(12) }).unwrap();
    let query = SearchQuery {
        types: Some("Psychic".to_string()),
        ..SearchQuery::default()
    };
    assert_eq!(search(&executor, query).unwrap(), vec!["Mewtwo"]);
}
