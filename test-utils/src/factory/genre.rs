//! Genre factory for creating test genre entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test genres with customizable fields.
pub struct GenreFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> GenreFactory<'a> {
    /// Creates a new GenreFactory with name `"Genre {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Genre {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the genre entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::genre::Model)` - Created genre entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::genre::Model, DbErr> {
        entity::genre::ActiveModel {
            name: ActiveValue::Set(self.name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a genre with default values.
pub async fn create_genre(db: &DatabaseConnection) -> Result<entity::genre::Model, DbErr> {
    GenreFactory::new(db).build().await
}
