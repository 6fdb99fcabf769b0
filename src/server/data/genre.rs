//! Genre data repository for database operations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::GenreGateway,
    model::genre::{Genre, GenreParam},
};

/// Repository providing database operations for genres.
pub struct GenreRepository {
    db: DatabaseConnection,
}

impl GenreRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenreGateway for GenreRepository {
    async fn find_all(&self) -> Result<Vec<Genre>, DbErr> {
        let entities = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Name)
            .order_by_asc(entity::genre::Column::Id)
            .all(&self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find_by_id(id).one(&self.db).await?;

        Ok(entity.map(Genre::from_entity))
    }

    /// SQLite compares text with the BINARY collation, so the match is case-sensitive.
    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find()
            .filter(entity::genre::Column::Name.eq(name))
            .order_by_asc(entity::genre::Column::Id)
            .one(&self.db)
            .await?;

        Ok(entity.map(Genre::from_entity))
    }

    async fn save(&self, param: GenreParam) -> Result<Genre, DbErr> {
        let entity = entity::genre::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(Genre::from_entity(entity))
    }

    async fn update_by_id(&self, id: i32, param: GenreParam) -> Result<Option<Genre>, DbErr> {
        let result = entity::prelude::Genre::update(entity::genre::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(param.name),
        })
        .exec(&self.db)
        .await;

        match result {
            Ok(entity) => Ok(Some(Genre::from_entity(entity))),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn remove_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Genre::delete_by_id(id)
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Genre::find().count(&self.db).await
    }
}
