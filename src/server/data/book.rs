//! Book data repository for database operations.
//!
//! Books are stored in the `book` table with their genres in the `book_genre` join table.
//! Writes touching both tables run inside a transaction; reads attach the genre ids of
//! every returned book with one additional query.

use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::BookGateway,
    model::book::{Book, BookParam},
};

/// Repository providing database operations for books and their genre links.
pub struct BookRepository {
    db: DatabaseConnection,
}

impl BookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the genre ids of the provided books and converts them to domain models.
    ///
    /// Genre ids of each book are ordered ascending.
    async fn with_genres(&self, books: Vec<entity::book::Model>) -> Result<Vec<Book>, DbErr> {
        if books.is_empty() {
            return Ok(Vec::new());
        }

        let book_ids: Vec<i32> = books.iter().map(|book| book.id).collect();
        let links = entity::prelude::BookGenre::find()
            .filter(entity::book_genre::Column::BookId.is_in(book_ids))
            .order_by_asc(entity::book_genre::Column::GenreId)
            .all(&self.db)
            .await?;

        let mut genre_ids: HashMap<i32, Vec<i32>> = HashMap::new();
        for link in links {
            genre_ids.entry(link.book_id).or_default().push(link.genre_id);
        }

        Ok(books
            .into_iter()
            .map(|book| {
                let genres = genre_ids.remove(&book.id).unwrap_or_default();
                Book::from_entity(book, genres)
            })
            .collect())
    }
}

/// Inserts one `book_genre` row per genre id.
async fn insert_genre_links<C: ConnectionTrait>(
    db: &C,
    book_id: i32,
    genre_ids: &[i32],
) -> Result<(), DbErr> {
    for genre_id in genre_ids {
        entity::book_genre::ActiveModel {
            book_id: ActiveValue::Set(book_id),
            genre_id: ActiveValue::Set(*genre_id),
        }
        .insert(db)
        .await?;
    }

    Ok(())
}

fn sorted(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

#[async_trait]
impl BookGateway for BookRepository {
    async fn find_all(&self) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .order_by_asc(entity::book::Column::Title)
            .order_by_asc(entity::book::Column::Id)
            .all(&self.db)
            .await?;

        self.with_genres(entities).await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Book>, DbErr> {
        let Some(entity) = entity::prelude::Book::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        Ok(self.with_genres(vec![entity]).await?.pop())
    }

    async fn find_by_author(&self, author_id: i32) -> Result<Vec<Book>, DbErr> {
        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::AuthorId.eq(author_id))
            .order_by_asc(entity::book::Column::Title)
            .order_by_asc(entity::book::Column::Id)
            .all(&self.db)
            .await?;

        self.with_genres(entities).await
    }

    async fn find_by_genre(&self, genre_id: i32) -> Result<Vec<Book>, DbErr> {
        let book_ids: Vec<i32> = entity::prelude::BookGenre::find()
            .filter(entity::book_genre::Column::GenreId.eq(genre_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|link| link.book_id)
            .collect();

        if book_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Book::find()
            .filter(entity::book::Column::Id.is_in(book_ids))
            .order_by_asc(entity::book::Column::Title)
            .order_by_asc(entity::book::Column::Id)
            .all(&self.db)
            .await?;

        self.with_genres(entities).await
    }

    async fn save(&self, param: BookParam) -> Result<Book, DbErr> {
        let genre_ids = sorted(param.genre_ids);
        let txn = self.db.begin().await?;

        let entity = entity::book::ActiveModel {
            title: ActiveValue::Set(param.title),
            author_id: ActiveValue::Set(param.author_id),
            summary: ActiveValue::Set(param.summary),
            isbn: ActiveValue::Set(param.isbn),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_genre_links(&txn, entity.id, &genre_ids).await?;

        txn.commit().await?;

        Ok(Book::from_entity(entity, genre_ids))
    }

    async fn update_by_id(&self, id: i32, param: BookParam) -> Result<Option<Book>, DbErr> {
        let genre_ids = sorted(param.genre_ids);
        let txn = self.db.begin().await?;

        let result = entity::prelude::Book::update(entity::book::ActiveModel {
            id: ActiveValue::Unchanged(id),
            title: ActiveValue::Set(param.title),
            author_id: ActiveValue::Set(param.author_id),
            summary: ActiveValue::Set(param.summary),
            isbn: ActiveValue::Set(param.isbn),
        })
        .exec(&txn)
        .await;

        let entity = match result {
            Ok(entity) => entity,
            Err(DbErr::RecordNotUpdated) => return Ok(None),
            Err(err) => return Err(err),
        };

        entity::prelude::BookGenre::delete_many()
            .filter(entity::book_genre::Column::BookId.eq(id))
            .exec(&txn)
            .await?;
        insert_genre_links(&txn, id, &genre_ids).await?;

        txn.commit().await?;

        Ok(Some(Book::from_entity(entity, genre_ids)))
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::BookGenre::delete_many()
            .filter(entity::book_genre::Column::BookId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Book::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Book::find().count(&self.db).await
    }
}
