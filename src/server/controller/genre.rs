use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};

use crate::server::{
    error::AppError,
    model::genre::{GenreDeleteInput, GenreInput},
    service::genre::GenreService,
    state::AppState,
};

pub async fn genre_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).list().await?;

    state.views.respond(outcome)
}

pub async fn genre_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).detail(id).await?;

    state.views.respond(outcome)
}

pub async fn genre_create_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).create_form();

    state.views.respond(outcome)
}

/// Create a genre from the submitted form.
///
/// A genre with the same name is never duplicated; the request is sent to the existing one.
///
/// # Returns
/// - `303 See Other` - Redirect to the new or existing genre
/// - `200 OK` - Form re-rendered with validation messages
pub async fn genre_create_post(
    State(state): State<AppState>,
    Form(input): Form<GenreInput>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).create(input).await?;

    state.views.respond(outcome)
}

pub async fn genre_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).delete_form(id).await?;

    state.views.respond(outcome)
}

pub async fn genre_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<GenreDeleteInput>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).delete(id, input).await?;

    state.views.respond(outcome)
}

pub async fn genre_update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).update_form(id).await?;

    state.views.respond(outcome)
}

pub async fn genre_update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<GenreInput>,
) -> Result<Response, AppError> {
    let outcome = GenreService::new(&state.gateway).update(id, input).await?;

    state.views.respond(outcome)
}
