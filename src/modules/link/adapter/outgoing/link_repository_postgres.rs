use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set, SqlErr};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::link::application::ports::outgoing::{
    CreateLinkData, LinkRepository, LinkRepositoryError, LinkResult,
};

use super::sea_orm_entity::{ActiveModel as LinkActiveModel, Model as LinkModel};

#[derive(Debug, Clone)]
pub struct LinkRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LinkRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_insert_error(e: DbErr) -> LinkRepositoryError {
        match e.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => LinkRepositoryError::OwnerNotFound,
            _ => LinkRepositoryError::DatabaseError(e.to_string()),
        }
    }
}

#[async_trait]
impl LinkRepository for LinkRepositoryPostgres {
    async fn create_link(&self, data: CreateLinkData) -> Result<LinkResult, LinkRepositoryError> {
        let active = LinkActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(data.owner.into()),
            url: Set(data.url),
            title: Set(data.title),
            description: Set(data.description),
            tags: Set(data.tags),
            created_at: NotSet,
        };

        let inserted: LinkModel = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_insert_error)?;

        Ok(inserted.to_repository_result())
    }
}
