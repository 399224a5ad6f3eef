//! Consistent error responses.
//!
//! Binding and validation findings re-render the form and are handled in the
//! route handlers; the only failure left over is "there is nothing at that
//! address", which gets a user-visible 404 page rather than a bare status.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use itemservice_core::DomainError;

use crate::app::views;

/// User-visible web failure.
#[derive(Debug)]
pub enum WebError {
    /// Unknown item id (or an id that does not even parse).
    NotFound,
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound => (
                StatusCode::NOT_FOUND,
                Html(views::not_found_page().into_string()),
            )
                .into_response(),
        }
    }
}

impl From<DomainError> for WebError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound | DomainError::InvalidId(_) => WebError::NotFound,
        }
    }
}
