//! Persistence gateway for the catalog entities.
//!
//! Each entity collection is exposed as an async trait so services can run against the
//! SeaORM repositories in production and against the in-memory store in tests. The
//! [`Gateway`] handle bundles one implementation of each trait and is passed to every
//! service explicitly.

pub mod author;
pub mod book;
pub mod genre;
#[cfg(test)]
pub mod memory;

#[cfg(test)]
mod test;

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

#[cfg(test)]
use crate::server::data::memory::MemoryCatalog;
use crate::server::{
    data::{author::AuthorRepository, book::BookRepository, genre::GenreRepository},
    model::{
        author::{Author, AuthorParam},
        book::{Book, BookParam},
        genre::{Genre, GenreParam},
    },
};

/// Operations on the author collection.
#[async_trait]
pub trait AuthorGateway: Send + Sync {
    /// All authors ordered by family name ascending.
    async fn find_all(&self) -> Result<Vec<Author>, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DbErr>;
    /// Inserts a new author with a generated id.
    async fn save(&self, param: AuthorParam) -> Result<Author, DbErr>;
    /// Replaces every field of the author, returning `None` when the id does not exist.
    async fn update_by_id(&self, id: i32, param: AuthorParam) -> Result<Option<Author>, DbErr>;
    /// Removes the author, returning whether a record existed.
    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr>;
    async fn count(&self) -> Result<u64, DbErr>;
}

/// Operations on the genre collection.
#[async_trait]
pub trait GenreGateway: Send + Sync {
    /// All genres ordered by name ascending.
    async fn find_all(&self) -> Result<Vec<Genre>, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr>;
    /// First genre whose name matches exactly, case-sensitive.
    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DbErr>;
    async fn save(&self, param: GenreParam) -> Result<Genre, DbErr>;
    async fn update_by_id(&self, id: i32, param: GenreParam) -> Result<Option<Genre>, DbErr>;
    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr>;
    async fn count(&self) -> Result<u64, DbErr>;
}

/// Operations on the book collection, including the dependent lookups used by the author
/// and genre flows.
#[async_trait]
pub trait BookGateway: Send + Sync {
    /// All books ordered by title ascending.
    async fn find_all(&self) -> Result<Vec<Book>, DbErr>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr>;
    /// Books referencing the author, ordered by title.
    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DbErr>;
    /// Books referencing the genre, ordered by title.
    async fn find_by_genre(&self, genre_id: i32) -> Result<Vec<Book>, DbErr>;
    async fn save(&self, param: BookParam) -> Result<Book, DbErr>;
    async fn update_by_id(&self, id: i32, param: BookParam) -> Result<Option<Book>, DbErr>;
    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr>;
    async fn count(&self) -> Result<u64, DbErr>;
}

/// Handle to one implementation of every collection gateway.
///
/// Cheap to clone: every field is reference-counted.
#[derive(Clone)]
pub struct Gateway {
    pub authors: Arc<dyn AuthorGateway>,
    pub genres: Arc<dyn GenreGateway>,
    pub books: Arc<dyn BookGateway>,
}

impl Gateway {
    /// Creates a gateway backed by the SeaORM repositories.
    ///
    /// # Arguments
    /// - `db` - Database connection pool; each repository holds a clone sharing the pool
    pub fn from_database(db: &DatabaseConnection) -> Self {
        Self {
            authors: Arc::new(AuthorRepository::new(db.clone())),
            genres: Arc::new(GenreRepository::new(db.clone())),
            books: Arc::new(BookRepository::new(db.clone())),
        }
    }

    /// Creates a gateway backed by a fresh, empty in-memory store.
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::from_memory(MemoryCatalog::new())
    }

    /// Creates a gateway sharing the provided in-memory store.
    #[cfg(test)]
    pub fn from_memory(store: MemoryCatalog) -> Self {
        Self {
            authors: Arc::new(store.clone()),
            genres: Arc::new(store.clone()),
            books: Arc::new(store),
        }
    }
}
