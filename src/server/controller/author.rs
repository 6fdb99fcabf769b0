use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};

use crate::server::{
    error::AppError,
    model::author::{AuthorDeleteInput, AuthorInput},
    service::author::AuthorService,
    state::AppState,
};

/// List all authors.
///
/// # Returns
/// - `200 OK` - Author list sorted by family name
/// - `500 Internal Server Error` - Database or template error
pub async fn author_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).list().await?;

    state.views.respond(outcome)
}

/// Show one author with their books.
///
/// # Returns
/// - `200 OK` - Author detail page
/// - `404 Not Found` - No author with this id
pub async fn author_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).detail(id).await?;

    state.views.respond(outcome)
}

pub async fn author_create_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).create_form();

    state.views.respond(outcome)
}

/// Create an author from the submitted form.
///
/// # Returns
/// - `303 See Other` - Created; redirects to the author's page
/// - `200 OK` - Form re-rendered with validation messages
pub async fn author_create_post(
    State(state): State<AppState>,
    Form(input): Form<AuthorInput>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).create(input).await?;

    state.views.respond(outcome)
}

pub async fn author_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).delete_form(id).await?;

    state.views.respond(outcome)
}

/// Delete an author that has no books.
///
/// # Returns
/// - `303 See Other` - Deleted, or already gone; redirects to the author list
/// - `200 OK` - Confirmation page listing the books that block deletion
/// - `400 Bad Request` - The confirmation names a different author
pub async fn author_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<AuthorDeleteInput>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway)
        .delete(id, input)
        .await?;

    state.views.respond(outcome)
}

pub async fn author_update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway).update_form(id).await?;

    state.views.respond(outcome)
}

pub async fn author_update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<AuthorInput>,
) -> Result<Response, AppError> {
    let outcome = AuthorService::new(&state.gateway)
        .update(id, input)
        .await?;

    state.views.respond(outcome)
}
