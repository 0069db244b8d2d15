use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::application::domain::entities::{PendingCode, UserId};

/// Read model of an account, including its verification state.
#[derive(Debug, Clone)]
pub struct UserQueryResult {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_verified: bool,
    pub pending_code: Option<PendingCode>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserQueryResult>, UserQueryError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserQueryResult>, UserQueryError>;
}
