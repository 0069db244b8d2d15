use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::link::application::ports::outgoing::{
    LinkQuery, LinkQueryError, LinkQueryResult,
};

use super::sea_orm_entity::{Column as LinkColumn, Entity as LinkEntity, Model as LinkModel};

#[derive(Debug, Clone)]
pub struct LinkQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LinkQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LinkQuery for LinkQueryPostgres {
    async fn get_links(&self) -> Result<Vec<LinkQueryResult>, LinkQueryError> {
        let models: Vec<LinkModel> = LinkEntity::find()
            .order_by_desc(LinkColumn::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(|e| LinkQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(LinkModel::to_query_result).collect())
    }
}
