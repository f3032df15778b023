//! Tier 2: Live store reads and writes

use crate::test_utils::*;
use pokedex::{Command, Error, Output, Pokemon};

fn mew(id: u32) -> Pokemon {
    let mut record = pokemon(&kanto_executor(), Command::Get { id: pid(12) });
    record.id = pid(id);
    record.name = "Mew".to_string();
    record.total = 600;
    record
}

#[test]
fn ping_returns_greeting() {
    let executor = kanto_executor();
    assert_eq!(
        executor.execute(Command::Ping).unwrap(),
        Output::Message {
            message: "Hello Les gars !".to_string()
        }
    );
}

#[test]
fn create_then_get_and_count() {
    let executor = kanto_executor();
    let created = pokemon(&executor, Command::Create { record: mew(151) });
    assert_eq!(created, mew(151));
    assert_eq!(pokemon(&executor, Command::Get { id: pid(151) }), mew(151));
    assert_eq!(total(&executor), 13);

    let all = pokemons(&executor, Command::ListAll);
    assert_eq!(all.last().unwrap().name, "Mew");
}

#[test]
fn create_duplicate_is_conflict_and_keeps_original() {
    let executor = kanto_executor();
    let err = executor
        .execute(Command::Create { record: mew(4) })
        .unwrap_err();
    assert_eq!(err, Error::Conflict { id: pid(4) });
    assert_eq!(
        pokemon(&executor, Command::Get { id: pid(4) }).name,
        "Charmander"
    );
    assert_eq!(total(&executor), 12);
}

#[test]
fn replace_stores_body_under_path_id() {
    let executor = kanto_executor();
    let replaced = pokemon(
        &executor,
        Command::Replace {
            id: pid(7),
            record: mew(151),
        },
    );
    assert_eq!(replaced.id, pid(151));

    let stored = pokemon(&executor, Command::Get { id: pid(7) });
    assert_eq!(stored, mew(151));
    assert!(executor.execute(Command::Get { id: pid(151) }).is_err());
    assert_eq!(total(&executor), 12);
}

#[test]
fn replace_missing_is_not_found() {
    let executor = kanto_executor();
    let err = executor
        .execute(Command::Replace {
            id: pid(99),
            record: mew(99),
        })
        .unwrap_err();
    assert_eq!(err, Error::NotFound { id: pid(99) });
}

#[test]
fn delete_removes_and_preserves_order() {
    let executor = kanto_executor();
    let removed = pokemon(&executor, Command::Delete { id: pid(2) });
    assert_eq!(removed.name, "Ivysaur");
    assert_eq!(total(&executor), 11);

    let all = pokemons(&executor, Command::ListAll);
    assert_eq!(&names(&all)[..3], &["Bulbasaur", "Venusaur", "Charmander"]);

    let err = executor.execute(Command::Delete { id: pid(2) }).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn batch_reports_each_result() {
    let executor = kanto_executor();
    let results = executor.execute_many(vec![
        Command::Delete { id: pid(1) },
        Command::Delete { id: pid(1) },
        Command::Count,
    ]);
    assert!(results[0].is_ok());
    assert!(results[1].is_err());
    assert_eq!(results[2], Ok(Output::Total { total: 11 }));
}
