//! Request handlers, one catalog command each

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::Json;

use pokedex_core::{PageQuery, Pokemon, PokemonId, SearchQuery};
use pokedex_executor::{Command, Output};

use crate::error::ApiResult;
use crate::state::AppState;

fn execute(state: &AppState, cmd: Command) -> ApiResult<Json<Output>> {
    tracing::debug!(target: "pokedex::server", command = cmd.name(), "Executing");
    Ok(Json(state.executor().execute(cmd)?))
}

/// GET / - Greeting
pub async fn root(State(state): State<AppState>) -> ApiResult<Json<Output>> {
    execute(&state, Command::Ping)
}

/// GET /total_pokemons - Record count
pub async fn total_pokemons(State(state): State<AppState>) -> ApiResult<Json<Output>> {
    execute(&state, Command::Count)
}

/// GET /pokemons - Every record
pub async fn list_pokemons(State(state): State<AppState>) -> ApiResult<Json<Output>> {
    execute(&state, Command::ListAll)
}

/// GET /pokemon/:id - One record
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Output>> {
    let id: PokemonId = raw_id.parse()?;
    execute(&state, Command::Get { id })
}

/// POST /pokemon/ - Create a record under its own id
pub async fn create_pokemon(
    State(state): State<AppState>,
    body: Result<Json<Pokemon>, JsonRejection>,
) -> ApiResult<Json<Output>> {
    let Json(record) = body?;
    execute(&state, Command::Create { record })
}

/// PUT /pokemon/:id - Replace a record verbatim
pub async fn replace_pokemon(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<Json<Pokemon>, JsonRejection>,
) -> ApiResult<Json<Output>> {
    let id: PokemonId = raw_id.parse()?;
    let Json(record) = body?;
    execute(&state, Command::Replace { id, record })
}

/// DELETE /pokemon/:id - Remove a record
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<Output>> {
    let id: PokemonId = raw_id.parse()?;
    execute(&state, Command::Delete { id })
}

/// GET /types - Distinct type tags of the load-time snapshot
pub async fn list_types(State(state): State<AppState>) -> ApiResult<Json<Output>> {
    execute(&state, Command::ListTypes)
}

/// GET /pokemons/search/ - Filtered, sorted search
pub async fn search_pokemons(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<Json<Output>> {
    let Query(query) = query?;
    execute(&state, Command::Search { query })
}

/// GET /pokemons2/ - Paginated listing
pub async fn list_page(
    State(state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> ApiResult<Json<Output>> {
    let Query(page) = query?;
    let request = page.into_request()?;
    execute(
        &state,
        Command::ListPage {
            page: request.page(),
            items: request.items(),
        },
    )
}
