use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct LinkQueryResult {
    pub id: Uuid,
    pub owner: UserId,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LinkQuery: Send + Sync {
    /// Every stored link, newest first.
    async fn get_links(&self) -> Result<Vec<LinkQueryResult>, LinkQueryError>;
}
