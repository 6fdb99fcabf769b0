use axum::{
    extract::{Path, State},
    response::Response,
    Form,
};

use crate::server::{
    error::AppError,
    model::book::{BookDeleteInput, BookInput},
    service::book::BookService,
    state::AppState,
};

pub async fn book_list(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).list().await?;

    state.views.respond(outcome)
}

/// Show one book with its author and genres.
///
/// # Returns
/// - `200 OK` - Book detail page
/// - `404 Not Found` - No book with this id
pub async fn book_detail(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).detail(id).await?;

    state.views.respond(outcome)
}

pub async fn book_create_get(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).create_form().await?;

    state.views.respond(outcome)
}

/// Create a book from the submitted form.
///
/// The body is decoded as key/value pairs because `genre` repeats once per checked box.
pub async fn book_create_post(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway)
        .create(BookInput::from_pairs(pairs))
        .await?;

    state.views.respond(outcome)
}

pub async fn book_delete_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).delete_form(id).await?;

    state.views.respond(outcome)
}

pub async fn book_delete_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(input): Form<BookDeleteInput>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).delete(id, input).await?;

    state.views.respond(outcome)
}

pub async fn book_update_get(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway).update_form(id).await?;

    state.views.respond(outcome)
}

pub async fn book_update_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let outcome = BookService::new(&state.gateway)
        .update(id, BookInput::from_pairs(pairs))
        .await?;

    state.views.respond(outcome)
}
