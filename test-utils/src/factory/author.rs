//! Author factory for creating test author entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test authors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::author::AuthorFactory;
///
/// let author = AuthorFactory::new(&db)
///     .first_name("Jane")
///     .family_name("Austen")
///     .build()
///     .await?;
/// ```
pub struct AuthorFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    family_name: String,
    date_of_birth: Option<NaiveDate>,
    date_of_death: Option<NaiveDate>,
}

impl<'a> AuthorFactory<'a> {
    /// Creates a new AuthorFactory with default values.
    ///
    /// Defaults:
    /// - first_name: `"First{id}"` where id is auto-incremented
    /// - family_name: `"Family{id}"`
    /// - no dates
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            first_name: format!("First{}", id),
            family_name: format!("Family{}", id),
            date_of_birth: None,
            date_of_death: None,
        }
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn family_name(mut self, family_name: impl Into<String>) -> Self {
        self.family_name = family_name.into();
        self
    }

    pub fn date_of_birth(mut self, date: NaiveDate) -> Self {
        self.date_of_birth = Some(date);
        self
    }

    pub fn date_of_death(mut self, date: NaiveDate) -> Self {
        self.date_of_death = Some(date);
        self
    }

    /// Builds and inserts the author entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::author::Model)` - Created author entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::author::Model, DbErr> {
        entity::author::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            family_name: ActiveValue::Set(self.family_name),
            date_of_birth: ActiveValue::Set(self.date_of_birth),
            date_of_death: ActiveValue::Set(self.date_of_death),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an author with default values.
///
/// Shorthand for `AuthorFactory::new(db).build().await`.
pub async fn create_author(db: &DatabaseConnection) -> Result<entity::author::Model, DbErr> {
    AuthorFactory::new(db).build().await
}
