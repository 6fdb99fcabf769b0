//! SeaORM entity models for the catalog database.

pub mod prelude;

pub mod author;
pub mod book;
pub mod book_genre;
pub mod genre;
