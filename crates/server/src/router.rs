//! Route table for the HTTP API

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::state::AppState;

/// Create the API router with all endpoints
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Greeting and counts
        .route("/", get(handlers::root))
        .route("/total_pokemons", get(handlers::total_pokemons))
        .route("/types", get(handlers::list_types))
        // Listing
        .route("/pokemons", get(handlers::list_pokemons))
        .route("/pokemons2", get(handlers::list_page))
        .route("/pokemons2/", get(handlers::list_page))
        .route("/pokemons/search", get(handlers::search_pokemons))
        .route("/pokemons/search/", get(handlers::search_pokemons))
        // Single-record operations
        .route("/pokemon", post(handlers::create_pokemon))
        .route("/pokemon/", post(handlers::create_pokemon))
        .route(
            "/pokemon/:id",
            get(handlers::get_pokemon)
                .put(handlers::replace_pokemon)
                .delete(handlers::delete_pokemon),
        )
        // State and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
