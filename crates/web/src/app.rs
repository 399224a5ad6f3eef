//! HTTP application wiring (Axum router + repository wiring).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: the form DTO and binder-level coercion
//! - `errors.rs`: consistent error responses
//! - `views.rs`: HTML rendering

use std::sync::Arc;

use axum::{Extension, Router, http::StatusCode, routing::get};
use tower::ServiceBuilder;

use itemservice_store::{InMemoryItemRepository, ItemRepository};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod views;

/// Repository handle shared across handlers.
pub type Repo = Arc<dyn ItemRepository>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(Arc::new(InMemoryItemRepository::new()))
}

/// Build the router against an explicit repository (tests inject their own).
pub fn build_app_with(repo: Repo) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes::router())
        .layer(Extension(repo))
        .layer(ServiceBuilder::new())
}

async fn health() -> StatusCode {
    StatusCode::OK
}
