use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::server::{
    controller::{
        author::{
            author_create_get, author_create_post, author_delete_get, author_delete_post,
            author_detail, author_list, author_update_get, author_update_post,
        },
        book::{
            book_create_get, book_create_post, book_delete_get, book_delete_post, book_detail,
            book_list, book_update_get, book_update_post,
        },
        catalog::{index, not_found, root},
        genre::{
            genre_create_get, genre_create_post, genre_delete_get, genre_delete_post,
            genre_detail, genre_list, genre_update_get, genre_update_post,
        },
    },
    error::render_error_page,
    state::AppState,
};

fn author_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/catalog/author/create",
            get(author_create_get).post(author_create_post),
        )
        .route("/catalog/author/{id}", get(author_detail))
        .route(
            "/catalog/author/{id}/delete",
            get(author_delete_get).post(author_delete_post),
        )
        .route(
            "/catalog/author/{id}/update",
            get(author_update_get).post(author_update_post),
        )
        .route("/catalog/authors", get(author_list))
}

fn genre_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/catalog/genre/create",
            get(genre_create_get).post(genre_create_post),
        )
        .route("/catalog/genre/{id}", get(genre_detail))
        .route(
            "/catalog/genre/{id}/delete",
            get(genre_delete_get).post(genre_delete_post),
        )
        .route(
            "/catalog/genre/{id}/update",
            get(genre_update_get).post(genre_update_post),
        )
        .route("/catalog/genres", get(genre_list))
}

fn book_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/catalog/book/create",
            get(book_create_get).post(book_create_post),
        )
        .route("/catalog/book/{id}", get(book_detail))
        .route(
            "/catalog/book/{id}/delete",
            get(book_delete_get).post(book_delete_post),
        )
        .route(
            "/catalog/book/{id}/update",
            get(book_update_get).post(book_update_post),
        )
        .route("/catalog/books", get(book_list))
}

/// Builds the application router.
///
/// Every error response, including unknown routes, passes through the error page renderer.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/catalog", get(index))
        .merge(author_routes())
        .merge(genre_routes())
        .merge(book_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            render_error_page,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
