use serde_json::json;

use crate::server::{data::Gateway, error::AppError, view::Outcome};

pub struct CatalogService<'a> {
    gateway: &'a Gateway,
}

impl<'a> CatalogService<'a> {
    pub fn new(gateway: &'a Gateway) -> Self {
        Self { gateway }
    }

    /// Renders the catalog home page with the number of records of each kind
    pub async fn index(&self) -> Result<Outcome, AppError> {
        let (book_count, author_count, genre_count) = tokio::try_join!(
            self.gateway.books.count(),
            self.gateway.authors.count(),
            self.gateway.genres.count(),
        )?;

        Ok(Outcome::render(
            "index.html",
            json!({
                "title": "Local Library Home",
                "counts": {
                    "books": book_count,
                    "authors": author_count,
                    "genres": genre_count,
                },
            }),
        ))
    }
}
