// Library crate for the Krok user service
// Exports modules for use by the server binary and tests

pub mod bootstrap;
pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::handlers::{delete_user, health, list_users, register_user, root, update_user};
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Register and add are the same operation
        .route("/users/register", post(register_user))
        .route("/users/add", post(register_user))
        .route("/users", get(list_users))
        .route("/users/", get(list_users))
        .route("/users/{id}", put(update_user))
        .route("/users/{id}", delete(delete_user))
        .with_state(state)
}
