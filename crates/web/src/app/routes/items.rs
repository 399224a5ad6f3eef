//! Item CRUD routes: list, detail, add, edit.
//!
//! Both POST handlers run the same submission flow: bind the raw form, then
//! validate the draft, and either re-render the form with the findings (422)
//! or persist and redirect to the detail view with a transient success flag.

use axum::{
    Extension, Form, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use maud::Markup;
use serde::Deserialize;

use itemservice_core::ItemId;
use itemservice_items::{Finding, ItemDraft, Validate};
use itemservice_store::ItemRepository;

use crate::app::Repo;
use crate::app::dto::ItemForm;
use crate::app::errors::WebError;
use crate::app::views;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_items))
        .route("/add", get(add_form).post(add_item))
        .route("/:id", get(get_item))
        .route("/:id/edit", get(edit_form).post(edit_item))
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    /// Transient success flag set by the post-submit redirect.
    #[serde(default)]
    status: bool,
}

/// Outcome of binding + validating one submission.
enum Submission {
    Invalid { form: ItemForm, findings: Vec<Finding> },
    Valid(ItemDraft),
}

fn process(form: ItemForm) -> Submission {
    // Binder-level coercion first; a binding failure bypasses the validator.
    let draft = match form.bind() {
        Ok(draft) => draft,
        Err(findings) => {
            log_findings(&findings);
            return Submission::Invalid { form, findings };
        }
    };

    let findings = draft.validate();
    if findings.is_empty() {
        Submission::Valid(draft)
    } else {
        log_findings(&findings);
        Submission::Invalid { form, findings }
    }
}

fn log_findings(findings: &[Finding]) {
    tracing::info!(
        errors = %serde_json::to_string(findings).unwrap_or_default(),
        "item submission rejected"
    );
}

fn page(markup: Markup) -> Response {
    Html(markup.into_string()).into_response()
}

fn invalid_page(markup: Markup) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Html(markup.into_string())).into_response()
}

fn detail_redirect(id: ItemId) -> Response {
    Redirect::to(&format!("/items/{id}?status=true")).into_response()
}

async fn list_items(Extension(repo): Extension<Repo>) -> Response {
    let items = repo.find_all();
    page(views::items_page(&items))
}

async fn get_item(
    Extension(repo): Extension<Repo>,
    Path(id): Path<String>,
    Query(query): Query<DetailQuery>,
) -> Result<Response, WebError> {
    let id: ItemId = id.parse().map_err(WebError::from)?;
    let item = repo.find_by_id(id).ok_or(WebError::NotFound)?;
    Ok(page(views::item_page(&item, query.status)))
}

async fn add_form() -> Response {
    page(views::item_form_page(
        "Add item",
        "/items/add",
        &ItemForm::default(),
        &[],
    ))
}

async fn add_item(
    Extension(repo): Extension<Repo>,
    Form(form): Form<ItemForm>,
) -> Response {
    match process(form) {
        Submission::Invalid { form, findings } => invalid_page(views::item_form_page(
            "Add item",
            "/items/add",
            &form,
            &findings,
        )),
        Submission::Valid(draft) => {
            let saved = repo.save(draft);
            detail_redirect(saved.id)
        }
    }
}

async fn edit_form(
    Extension(repo): Extension<Repo>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let id: ItemId = id.parse().map_err(WebError::from)?;
    let item = repo.find_by_id(id).ok_or(WebError::NotFound)?;
    Ok(page(views::item_form_page(
        "Edit item",
        &format!("/items/{id}/edit"),
        &ItemForm::from_item(&item),
        &[],
    )))
}

async fn edit_item(
    Extension(repo): Extension<Repo>,
    Path(id): Path<String>,
    Form(form): Form<ItemForm>,
) -> Result<Response, WebError> {
    let id: ItemId = id.parse().map_err(WebError::from)?;

    match process(form) {
        Submission::Invalid { form, findings } => Ok(invalid_page(views::item_form_page(
            "Edit item",
            &format!("/items/{id}/edit"),
            &form,
            &findings,
        ))),
        Submission::Valid(draft) => {
            repo.update(id, draft)?;
            Ok(detail_redirect(id))
        }
    }
}
