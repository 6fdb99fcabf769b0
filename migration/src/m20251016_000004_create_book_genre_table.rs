use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20251016_000002_create_genre_table::Genre, m20251016_000003_create_book_table::Book,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookGenre::Table)
                    .if_not_exists()
                    .col(integer(BookGenre::BookId))
                    .col(integer(BookGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(BookGenre::BookId)
                            .col(BookGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_genre_book_id")
                            .from(BookGenre::Table, BookGenre::BookId)
                            .to(Book::Table, Book::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_book_genre_genre_id")
                            .from(BookGenre::Table, BookGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookGenre {
    Table,
    BookId,
    GenreId,
}
