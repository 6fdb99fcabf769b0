//! Author data repository for database operations.
//!
//! Provides the `AuthorRepository`, the SeaORM implementation of [`AuthorGateway`], and
//! handles the conversion of entity models into domain models at the repository boundary.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder,
};

use crate::server::{
    data::AuthorGateway,
    model::author::{Author, AuthorParam},
};

/// Repository providing database operations for authors.
pub struct AuthorRepository {
    db: DatabaseConnection,
}

impl AuthorRepository {
    /// Creates a new AuthorRepository instance
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuthorGateway for AuthorRepository {
    async fn find_all(&self) -> Result<Vec<Author>, DbErr> {
        let entities = entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::FamilyName)
            .order_by_asc(entity::author::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Author::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Author>, DbErr> {
        let entity = entity::prelude::Author::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(Author::from_entity))
    }

    async fn save(&self, param: AuthorParam) -> Result<Author, DbErr> {
        let entity = entity::author::ActiveModel {
            first_name: ActiveValue::Set(param.first_name),
            family_name: ActiveValue::Set(param.family_name),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            date_of_death: ActiveValue::Set(param.date_of_death),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Author::from_entity(entity))
    }

    async fn update_by_id(&self, id: i32, param: AuthorParam) -> Result<Option<Author>, DbErr> {
        let result = entity::prelude::Author::update(entity::author::ActiveModel {
            id: ActiveValue::Unchanged(id),
            first_name: ActiveValue::Set(param.first_name),
            family_name: ActiveValue::Set(param.family_name),
            date_of_birth: ActiveValue::Set(param.date_of_birth),
            date_of_death: ActiveValue::Set(param.date_of_death),
        })
        .exec(&self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Author::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Author::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Author::find().count(&self.db).await
    }
}
