//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is deterministic:
//! the same command always produces the same output variant (though the values
//! may differ based on catalog state).
//!
//! `Output` serializes untagged, so its JSON form is exactly the response body
//! the HTTP layer sends.

use pokedex_core::Pokemon;
use serde::Serialize;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```text
/// use pokedex_executor::{Command, Output};
///
/// match executor.execute(Command::Count)? {
///     Output::Total { total } => println!("{} pokemon", total),
///     _ => unreachable!("Count always returns Total"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Output {
    /// Greeting (`{"message": ...}`)
    Message {
        /// Greeting text
        message: String,
    },

    /// Record count (`{"total": n}`)
    Total {
        /// Number of records
        total: u64,
    },

    /// A single record
    Pokemon(Pokemon),

    /// A list of records
    Pokemons(Vec<Pokemon>),

    /// Sorted type tags
    Types(Vec<String>),
}

impl Output {
    /// The single record, if this output carries one
    pub fn into_pokemon(self) -> Option<Pokemon> {
        match self {
            Output::Pokemon(p) => Some(p),
            _ => None,
        }
    }

    /// The record list, if this output carries one
    pub fn into_pokemons(self) -> Option<Vec<Pokemon>> {
        match self {
            Output::Pokemons(list) => Some(list),
            _ => None,
        }
    }
}
