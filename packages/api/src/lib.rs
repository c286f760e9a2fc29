// ABOUTME: HTTP API layer for the todos service providing REST endpoints and routing
// ABOUTME: Wires CRUD handlers and the list query onto the record store

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use todos::DbState;

pub mod error;
pub mod health;
pub mod todos_handlers;

pub use error::ApiError;

/// Creates the todos CRUD router
pub fn create_todos_router() -> Router<DbState> {
    Router::new()
        .route("/", get(todos_handlers::list_todos))
        .route("/", post(todos_handlers::create_todo))
        .route("/{id}", get(todos_handlers::get_todo))
        .route("/{id}", put(todos_handlers::update_todo))
        .route("/{id}", delete(todos_handlers::delete_todo))
}

/// Creates the full application router with the store injected as state
pub fn create_router(db: DbState) -> Router {
    Router::new()
        .route("/", get(health::service_status))
        .nest("/todos", create_todos_router())
        .fallback(todos_handlers::route_not_found)
        .with_state(db)
}
