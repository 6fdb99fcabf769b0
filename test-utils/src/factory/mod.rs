//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories insert directly
//! through SeaORM active models and bypass form validation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let author = factory::create_author(&db).await?;
//! let genre = factory::genre::GenreFactory::new(&db).name("Fantasy").build().await?;
//! let book = factory::book::BookFactory::new(&db)
//!     .author(author.id)
//!     .genres(vec![genre.id])
//!     .build()
//!     .await?;
//! ```

pub mod author;
pub mod book;
pub mod genre;
pub mod helpers;

pub use author::create_author;
pub use book::create_book;
pub use genre::create_genre;
