//! Book factory for creating test book entities and their genre links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test books with customizable fields.
///
/// Genre ids passed through `genres()` are inserted into the `book_genre` join table after
/// the book row, so the referenced genres must already exist.
pub struct BookFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    author_id: Option<i32>,
    summary: String,
    isbn: String,
    genre_ids: Vec<i32>,
}

impl<'a> BookFactory<'a> {
    /// Creates a new BookFactory with default values and no author or genres.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Book {}", id),
            author_id: None,
            summary: format!("Summary of book {}", id),
            isbn: format!("978{:010}", id),
            genre_ids: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn author(mut self, author_id: i32) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn genres(mut self, genre_ids: Vec<i32>) -> Self {
        self.genre_ids = genre_ids;
        self
    }

    /// Builds and inserts the book entity and its genre links into the database.
    ///
    /// # Returns
    /// - `Ok(entity::book::Model)` - Created book entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::book::Model, DbErr> {
        let book = entity::book::ActiveModel {
            title: ActiveValue::Set(self.title),
            author_id: ActiveValue::Set(self.author_id),
            summary: ActiveValue::Set(self.summary),
            isbn: ActiveValue::Set(self.isbn),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for genre_id in self.genre_ids {
            entity::book_genre::ActiveModel {
                book_id: ActiveValue::Set(book.id),
                genre_id: ActiveValue::Set(genre_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(book)
    }
}

/// Creates a book with default values written by the provided author.
pub async fn create_book(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::book::Model, DbErr> {
    BookFactory::new(db).author(author_id).build().await
}
