use crate::server::{
    data::{
        author::AuthorRepository, book::BookRepository, genre::GenreRepository, AuthorGateway,
        BookGateway, GenreGateway,
    },
    model::{author::AuthorParam, book::BookParam, genre::GenreParam},
};
use chrono::NaiveDate;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
