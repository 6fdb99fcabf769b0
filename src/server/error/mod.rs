//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. `AppError` is the top-level error type and
//! implements `IntoResponse`; the response only carries the status and an [`ErrorPage`]
//! extension, which [`render_error_page`] turns into HTML with the application's templates.
//!
//! Validation failures are not errors: they are returned as data and re-rendered by the
//! originating form.

pub mod config;

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::server::{error::config::ConfigError, state::AppState};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Template registration or rendering error from Tera.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    TemplateErr(#[from] tera::Error),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),
}

/// Error details attached to an error response for the page renderer.
///
/// Inserted into the response extensions by `AppError::into_response` and consumed by
/// [`render_error_page`].
#[derive(Debug, Clone)]
pub struct ErrorPage {
    pub status: StatusCode,
    pub message: String,
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 500 Internal Server Error - For all other error types, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            err => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let mut response = (status, message.clone()).into_response();
        response
            .extensions_mut()
            .insert(ErrorPage { status, message });
        response
    }
}

/// Middleware rendering the error template for every response produced from an `AppError`.
///
/// Responses without an [`ErrorPage`] extension pass through untouched. If the error
/// template itself fails to render, the plain-text body set by `AppError::into_response`
/// is kept.
pub async fn render_error_page(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;

    let Some(page) = response.extensions().get::<ErrorPage>().cloned() else {
        return response;
    };

    match state.views.render_error(&page) {
        Ok(html) => (page.status, Html(html)).into_response(),
        Err(err) => {
            tracing::error!("Failed to render error page: {}", err);
            response
        }
    }
}
