//! Catalog Test Utils
//!
//! Provides shared testing utilities for building repository and integration tests for the
//! catalog application. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for inserting authors, genres, and books.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_author_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let author = factory::create_author(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
