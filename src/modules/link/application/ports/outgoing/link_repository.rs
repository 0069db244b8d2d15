use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateLinkData {
    pub owner: UserId,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
}

/// A stored link as returned by write operations.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkResult {
    pub id: Uuid,
    pub owner: UserId,
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LinkRepositoryError {
    /// The owning account no longer exists.
    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn create_link(&self, data: CreateLinkData) -> Result<LinkResult, LinkRepositoryError>;
}
