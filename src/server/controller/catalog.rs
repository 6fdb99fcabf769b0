use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
};

use crate::server::{error::AppError, service::catalog::CatalogService, state::AppState};

/// Sends the site root to the catalog home page.
pub async fn root() -> impl IntoResponse {
    Redirect::to("/catalog")
}

/// Catalog home page with record counts.
///
/// # Returns
/// - `200 OK` - Rendered home page
/// - `500 Internal Server Error` - Database or template error
pub async fn index(State(state): State<AppState>) -> Result<Response, AppError> {
    let outcome = CatalogService::new(&state.gateway).index().await?;

    state.views.respond(outcome)
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppError {
    AppError::NotFound("Page not found".to_string())
}
