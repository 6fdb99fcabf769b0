//! In-memory implementation of the catalog gateways.
//!
//! One [`MemoryCatalog`] implements all three collection traits over a shared store so the
//! dependent lookups (books by author or genre) observe the same data as the author and
//! genre collections. Ordering matches the SeaORM repositories: byte-wise on the sort key,
//! then by id.

use std::{collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use sea_orm::DbErr;
use tokio::sync::RwLock;

use crate::server::{
    data::{AuthorGateway, BookGateway, GenreGateway},
    model::{
        author::{Author, AuthorParam},
        book::{Book, BookParam},
        genre::{Genre, GenreParam},
    },
};

#[derive(Debug, Default)]
struct Store {
    next_id: i32,
    authors: BTreeMap<i32, Author>,
    genres: BTreeMap<i32, Genre>,
    books: BTreeMap<i32, Book>,
}

impl Store {
    fn generate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory catalog store shared by every gateway created from it.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    store: Arc<RwLock<Store>>,
}

impl MemoryCatalog {
    /// Creates a new empty memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn sorted_by<T: Clone>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> (&str, i32)) -> Vec<T> {
    let mut items: Vec<T> = items.collect();
    items.sort_by(|a, b| key(a).cmp(&key(b)));
    items
}

fn sorted_books<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<Book> {
    sorted_by(books.cloned(), |book| (book.title.as_str(), book.id))
}

fn sorted_ids(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[async_trait]
impl AuthorGateway for MemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Author>, DbErr> {
        let store = self.store.read().await;
        Ok(sorted_by(store.authors.values().cloned(), |author| {
            (author.family_name.as_str(), author.id)
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        Ok(self.store.read().await.authors.get(&id).cloned())
    }

    async fn save(&self, param: AuthorParam) -> Result<Author, DbErr> {
        let mut store = self.store.write().await;
        let author = Author {
            id: store.generate_id(),
            first_name: param.first_name,
            family_name: param.family_name,
            date_of_birth: param.date_of_birth,
            date_of_death: param.date_of_death,
        };
        store.authors.insert(author.id, author.clone());
        Ok(author)
    }

    async fn update_by_id(&self, id: i32, param: AuthorParam) -> Result<Option<Author>, DbErr> {
        let mut store = self.store.write().await;
        let Some(author) = store.authors.get_mut(&id) else {
            return Ok(None);
        };

        *author = Author {
            id,
            first_name: param.first_name,
            family_name: param.family_name,
            date_of_birth: param.date_of_birth,
            date_of_death: param.date_of_death,
        };
        Ok(Some(author.clone()))
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.store.write().await.authors.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        Ok(self.store.read().await.authors.len() as u64)
    }
}

#[async_trait]
impl GenreGateway for MemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Genre>, DbErr> {
        let store = self.store.read().await;
        Ok(sorted_by(store.genres.values().cloned(), |genre| {
            (genre.name.as_str(), genre.id)
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        Ok(self.store.read().await.genres.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DbErr> {
        let store = self.store.read().await;
        Ok(store.genres.values().find(|genre| genre.name == name).cloned())
    }

    async fn save(&self, param: GenreParam) -> Result<Genre, DbErr> {
        let mut store = self.store.write().await;
        let genre = Genre {
            id: store.generate_id(),
            name: param.name,
        };
        store.genres.insert(genre.id, genre.clone());
        Ok(genre)
    }

    async fn update_by_id(&self, id: i32, param: GenreParam) -> Result<Option<Genre>, DbErr> {
        let mut store = self.store.write().await;
        let Some(genre) = store.genres.get_mut(&id) else {
            return Ok(None);
        };

        genre.name = param.name;
        Ok(Some(genre.clone()))
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.store.write().await.genres.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        Ok(self.store.read().await.genres.len() as u64)
    }
}

#[async_trait]
impl BookGateway for MemoryCatalog {
    async fn find_all(&self) -> Result<Vec<Book>, DbErr> {
        let store = self.store.read().await;
        Ok(sorted_books(store.books.values()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        Ok(self.store.read().await.books.get(&id).cloned())
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DbErr> {
        let store = self.store.read().await;
        Ok(sorted_books(
            store
                .books
                .values()
                .filter(|book| book.author_id == Some(author_id)),
        ))
    }

    async fn find_by_genre(&self, genre_id: i32) -> Result<Vec<Book>, DbErr> {
        let store = self.store.read().await;
        Ok(sorted_books(
            store
                .books
                .values()
                .filter(|book| book.genre_ids.contains(&genre_id)),
        ))
    }

    async fn save(&self, param: BookParam) -> Result<Book, DbErr> {
        let mut store = self.store.write().await;
        let book = Book {
            id: store.generate_id(),
            title: param.title,
            author_id: param.author_id,
            summary: param.summary,
            isbn: param.isbn,
            genre_ids: sorted_ids(param.genre_ids),
        };
        store.books.insert(book.id, book.clone());
        Ok(book)
    }

    async fn update_by_id(&self, id: i32, param: BookParam) -> Result<Option<Book>, DbErr> {
        let mut store = self.store.write().await;
        let Some(book) = store.books.get_mut(&id) else {
            return Ok(None);
        };

        *book = Book {
            id,
            title: param.title,
            author_id: param.author_id,
            summary: param.summary,
            isbn: param.isbn,
            genre_ids: sorted_ids(param.genre_ids),
        };
        Ok(Some(book.clone()))
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        Ok(self.store.write().await.books.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64, DbErr> {
        Ok(self.store.read().await.books.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_param(first_name: &str, family_name: &str) -> AuthorParam {
        AuthorParam {
            first_name: first_name.to_string(),
            family_name: family_name.to_string(),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    #[tokio::test]
    async fn generates_distinct_ids_across_collections() -> Result<(), DbErr> {
        let store = MemoryCatalog::new();

        let author = AuthorGateway::save(&store, author_param("Jane", "Doe")).await?;
        let genre = GenreGateway::save(
            &store,
            GenreParam {
                name: "Poetry".to_string(),
            },
        )
        .await?;

        assert_ne!(author.id, genre.id);
        Ok(())
    }

    #[tokio::test]
    async fn orders_authors_by_family_name() -> Result<(), DbErr> {
        let store = MemoryCatalog::new();
        AuthorGateway::save(&store, author_param("Leo", "Tolstoy")).await?;
        AuthorGateway::save(&store, author_param("Jane", "Austen")).await?;

        let names: Vec<_> = AuthorGateway::find_all(&store)
            .await?
            .into_iter()
            .map(|author| author.family_name)
            .collect();

        assert_eq!(names, vec!["Austen", "Tolstoy"]);
        Ok(())
    }

    #[tokio::test]
    async fn finds_books_by_genre() -> Result<(), DbErr> {
        let store = MemoryCatalog::new();
        let book = BookGateway::save(
            &store,
            BookParam {
                title: "Dune".to_string(),
                author_id: None,
                summary: "Spice".to_string(),
                isbn: "1".to_string(),
                genre_ids: vec![9, 3, 9],
            },
        )
        .await?;

        assert_eq!(book.genre_ids, vec![3, 9]);
        assert_eq!(BookGateway::find_by_genre(&store, 3).await?.len(), 1);
        assert!(BookGateway::find_by_genre(&store, 4).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn update_of_missing_record_returns_none() -> Result<(), DbErr> {
        let store = MemoryCatalog::new();

        let updated = GenreGateway::update_by_id(
            &store,
            42,
            GenreParam {
                name: "Drama".to_string(),
            },
        )
        .await?;

        assert!(updated.is_none());
        Ok(())
    }
}
