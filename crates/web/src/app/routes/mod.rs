use axum::Router;

pub mod items;

/// Router for all item endpoints.
pub fn router() -> Router {
    Router::new().nest("/items", items::router())
}
