//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::server::{data::Gateway, view::Views};

/// Shared resources cloned into every handler through Axum's state extraction.
///
/// Both fields are reference-counted, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway for authors, genres, and books.
    pub gateway: Gateway,

    /// Parsed page templates.
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(gateway: Gateway, views: Views) -> Self {
        Self {
            gateway,
            views: Arc::new(views),
        }
    }
}
